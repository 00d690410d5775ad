//! Settings schema migration chain.
//!
//! 设置记录的版本迁移链。每个迁移把记录从一个版本推进到下一个版本，
//! 加载时按顺序执行直到达到当前版本。

use tracing::info;

use cb_core::ports::errors::SettingsStoreError;
use cb_core::ports::settings_store::SettingsMigrationPort;
use cb_core::settings::{Settings, CURRENT_SCHEMA_VERSION};

/// Walks a stored record through every registered migration until it
/// reaches [`CURRENT_SCHEMA_VERSION`].
pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl SettingsMigrator {
    /// All known migrations, in version order. Empty while the schema is
    /// still at its first version.
    pub fn new() -> Self {
        Self {
            migrations: Vec::new(),
        }
    }

    pub fn with_migrations(migrations: Vec<Box<dyn SettingsMigrationPort>>) -> Self {
        Self { migrations }
    }

    /// Applies migrations until the record is current. Records already at
    /// or past the current version pass through untouched.
    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings, SettingsStoreError> {
        while settings.schema_version < CURRENT_SCHEMA_VERSION {
            let from = settings.schema_version;
            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == from)
                .ok_or(SettingsStoreError::MigrationGap(from))?;
            settings = migration.migrate(settings);
            settings.schema_version = migration.to_version();
            info!(from, to = settings.schema_version, "applied settings migration");
        }
        Ok(settings)
    }
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}
