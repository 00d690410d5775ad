//! # Dependency Wiring / 依赖装配
//!
//! Assembly only: build the stores, the Bot API client, the gateway and
//! the router, then hand a ready runtime to the run loop. No business
//! decisions here; bad configuration surfaces as a typed error before
//! polling starts.
//!
//! This is the only module that touches cb-infra, cb-telegram and
//! cb-app at the same time.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use cb_app::{AppDeps, EventRouter};
use cb_infra::{FileSettingsRepository, JsonThumbnailStore};
use cb_telegram::{BotApiClient, TelegramGateway, UpdatePoller};

use super::config::BotConfig;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("bot token is missing: set `token` in captionbot.toml or CAPTIONBOT_TOKEN")]
    TokenMissing,

    #[error("data directory unavailable: {0}")]
    DataDir(String),

    #[error("telegram client initialization failed: {0}")]
    Gateway(String),
}

/// Everything the run loop needs, fully wired.
pub struct BotRuntime {
    pub client: Arc<BotApiClient>,
    pub poller: UpdatePoller,
}

impl std::fmt::Debug for BotRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotRuntime").finish_non_exhaustive()
    }
}

/// The configured data directory, or the platform one when the config
/// leaves it empty. Created on first use.
pub fn resolve_data_dir(config: &BotConfig) -> WiringResult<PathBuf> {
    let dir = if config.data_dir.as_os_str().is_empty() {
        dirs::data_dir()
            .ok_or_else(|| WiringError::DataDir("no platform data directory".to_string()))?
            .join("captionbot")
    } else {
        config.data_dir.clone()
    };
    std::fs::create_dir_all(&dir)
        .map_err(|err| WiringError::DataDir(format!("{}: {err}", dir.display())))?;
    Ok(dir)
}

pub fn wire_dependencies(config: &BotConfig, data_dir: &Path) -> WiringResult<BotRuntime> {
    if config.token.is_empty() {
        return Err(WiringError::TokenMissing);
    }

    let settings = Arc::new(FileSettingsRepository::new(data_dir.join("settings")));
    let thumbs = Arc::new(JsonThumbnailStore::new(data_dir.join("thumbs.json")));

    let client = Arc::new(
        BotApiClient::new(&config.token).map_err(|err| WiringError::Gateway(err.to_string()))?,
    );
    let messenger = Arc::new(TelegramGateway::new(Arc::clone(&client)));

    let router = Arc::new(EventRouter::new(AppDeps {
        settings,
        thumbs,
        messenger,
    }));
    let poller = UpdatePoller::new(
        Arc::clone(&client),
        router,
        Duration::from_secs(config.poll_timeout_secs),
    );

    Ok(BotRuntime { client, poller })
}
