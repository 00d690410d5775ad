use async_trait::async_trait;

use crate::ids::{MediaRef, UserId};

/// Per-user thumbnail persistence.
///
/// Stores at most one opaque media reference per user. Absence is a normal
/// state, not an error.
#[async_trait]
pub trait ThumbnailStorePort: Send + Sync {
    async fn get(&self, user: UserId) -> anyhow::Result<Option<MediaRef>>;
    async fn put(&self, user: UserId, media: &MediaRef) -> anyhow::Result<()>;
    async fn clear(&self, user: UserId) -> anyhow::Result<()>;
}
