//! In-memory settings store for tests and ephemeral runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cb_core::ids::UserId;
use cb_core::ports::settings_store::SettingsStorePort;
use cb_core::settings::Settings;

#[derive(Default)]
pub struct InMemorySettingsStore {
    records: RwLock<HashMap<UserId, Settings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStorePort for InMemorySettingsStore {
    async fn get(&self, user: UserId) -> anyhow::Result<Settings> {
        let mut records = self.records.write().await;
        Ok(records.entry(user).or_default().clone())
    }

    async fn put(&self, user: UserId, settings: &Settings) -> anyhow::Result<()> {
        self.records.write().await.insert(user, settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_user_gets_defaults() {
        let store = InMemorySettingsStore::new();
        let settings = store.get(UserId::new(7)).await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn put_overwrites() {
        let store = InMemorySettingsStore::new();
        let mut settings = Settings::default();
        settings.prefix = "[X]".to_string();
        store.put(UserId::new(7), &settings).await.unwrap();
        assert_eq!(store.get(UserId::new(7)).await.unwrap(), settings);
    }
}
