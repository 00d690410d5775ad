//! File-backed settings store.
//!
//! 基于文件的设置存储。每个用户一个 JSON 文件，写入走临时文件加重命名，
//! 加载时自动迁移旧版本记录。

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use cb_core::ids::UserId;
use cb_core::ports::settings_store::SettingsStorePort;
use cb_core::settings::{Settings, CURRENT_SCHEMA_VERSION};

use super::migration::SettingsMigrator;

/// One pretty-printed JSON record per user under the settings directory.
pub struct FileSettingsRepository {
    dir: PathBuf,
    migrator: SettingsMigrator,
    // Per-user locks serialize concurrent read-modify-write cycles on the
    // same record. Different users never block each other.
    locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl FileSettingsRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_migrator(dir, SettingsMigrator::new())
    }

    pub fn with_migrator(dir: impl Into<PathBuf>, migrator: SettingsMigrator) -> Self {
        Self {
            dir: dir.into(),
            migrator,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn record_path(&self, user: UserId) -> PathBuf {
        self.dir.join(format!("{}.json", user.value()))
    }

    async fn lock_for(&self, user: UserId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(user)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Forgets the user's lock once no task holds or waits on it, so the
    /// map does not grow with every user ever seen.
    async fn prune_lock(&self, user: UserId) {
        let mut locks = self.locks.lock().await;
        if locks.get(&user).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(&user);
        }
    }

    /// Caller must hold the per-user lock.
    async fn load_or_init(&self, user: UserId) -> anyhow::Result<Settings> {
        match self.read_record(user).await? {
            Some(record) => {
                let loaded_version = record.schema_version;
                let record = self.migrator.migrate_to_latest(record)?;
                if loaded_version < CURRENT_SCHEMA_VERSION {
                    info!(
                        %user,
                        from = loaded_version,
                        to = record.schema_version,
                        "migrated settings record"
                    );
                    self.write_record(user, &record).await?;
                }
                Ok(record)
            }
            None => {
                debug!(%user, "no settings record yet, creating defaults");
                let record = Settings::default();
                self.write_record(user, &record).await?;
                Ok(record)
            }
        }
    }

    /// Caller must hold the per-user lock.
    async fn read_record(&self, user: UserId) -> anyhow::Result<Option<Settings>> {
        let path = self.record_path(user);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read settings failed: {}", path.display()))
            }
        };
        let settings = serde_json::from_str(&raw)
            .with_context(|| format!("parse settings failed: {}", path.display()))?;
        Ok(Some(settings))
    }

    /// Caller must hold the per-user lock.
    async fn write_record(&self, user: UserId, settings: &Settings) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create settings dir failed: {}", self.dir.display()))?;
        let json = serde_json::to_string_pretty(settings).context("serialize settings failed")?;
        crate::fsutil::atomic_write(&self.record_path(user), &json).await
    }
}

#[async_trait]
impl SettingsStorePort for FileSettingsRepository {
    async fn get(&self, user: UserId) -> anyhow::Result<Settings> {
        let guard = self.lock_for(user).await.lock_owned().await;
        let result = self.load_or_init(user).await;
        drop(guard);
        self.prune_lock(user).await;
        result
    }

    async fn put(&self, user: UserId, settings: &Settings) -> anyhow::Result<()> {
        let guard = self.lock_for(user).await.lock_owned().await;
        let result = self.write_record(user, settings).await;
        drop(guard);
        self.prune_lock(user).await;
        result
    }
}
