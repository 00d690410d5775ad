use async_trait::async_trait;

use crate::ids::UserId;
use crate::settings::model::Settings;

/// Per-user settings persistence.
///
/// `get` never fails on a missing record: the store creates and persists a
/// default record instead. Records survive restarts; sessions do not.
#[async_trait]
pub trait SettingsStorePort: Send + Sync {
    async fn get(&self, user: UserId) -> anyhow::Result<Settings>;
    async fn put(&self, user: UserId, settings: &Settings) -> anyhow::Result<()>;
}

/// One step of a settings schema migration chain.
///
/// Implementations are registered in version order; the migrator walks them
/// until the record reaches the current schema version.
pub trait SettingsMigrationPort: Send + Sync {
    fn from_version(&self) -> u32;
    fn to_version(&self) -> u32;
    fn migrate(&self, settings: Settings) -> Settings;
}
