//! Thumbnail registry.
//!
//! One JSON map file for every user, keyed by user id. Values are the
//! transport file ids handed back when the thumbnail photo was captured.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::Mutex;

use cb_core::ids::{MediaRef, UserId};
use cb_core::ports::thumbnail_store::ThumbnailStorePort;

pub struct JsonThumbnailStore {
    path: PathBuf,
    // Single file for all users, so one lock covers every mutation.
    lock: Mutex<()>,
}

impl JsonThumbnailStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read thumbnails failed: {}", self.path.display()))
            }
        };
        serde_json::from_str(&raw)
            .with_context(|| format!("parse thumbnails failed: {}", self.path.display()))
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create thumbnails dir failed: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(map).context("serialize thumbnails failed")?;
        crate::fsutil::atomic_write(&self.path, &json).await
    }
}

#[async_trait]
impl ThumbnailStorePort for JsonThumbnailStore {
    async fn get(&self, user: UserId) -> anyhow::Result<Option<MediaRef>> {
        let _guard = self.lock.lock().await;
        let map = self.read_map().await?;
        Ok(map.get(&user.to_string()).cloned().map(MediaRef::new))
    }

    async fn put(&self, user: UserId, media: &MediaRef) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(user.to_string(), media.as_str().to_string());
        self.write_map(&map).await
    }

    async fn clear(&self, user: UserId) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(&user.to_string()).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
