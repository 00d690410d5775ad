//! # Configuration Loader / 配置加载器
//!
//! Pure data loading of `captionbot.toml`. The loader reports what the
//! file says and nothing more: no validation, no business rules. Empty
//! values are facts; the wiring layer judges them.
//!
//! 纯数据加载，不做验证。空值是事实，由装配层裁决。

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_PATH_VAR: &str = "CAPTIONBOT_CONFIG";
pub const TOKEN_VAR: &str = "CAPTIONBOT_TOKEN";

const DEFAULT_CONFIG_PATH: &str = "captionbot.toml";
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 25;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Bot API token. `CAPTIONBOT_TOKEN` overrides the file.
    pub token: String,
    /// Root for settings, thumbnails and logs. Empty selects the
    /// platform data directory.
    pub data_dir: PathBuf,
    /// Long-poll window in seconds.
    pub poll_timeout_secs: u64,
    /// Extra tracing directives, comma separated, appended to the
    /// built-in defaults.
    pub log_directives: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            data_dir: PathBuf::new(),
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            log_directives: String::new(),
        }
    }
}

/// Path of the config file: `CAPTIONBOT_CONFIG`, or `captionbot.toml`
/// next to the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads the TOML file at `path`. A missing file yields the defaults,
/// so a token passed purely through the environment is enough to run;
/// an unreadable or malformed file is an error.
pub fn load_config(path: &Path) -> anyhow::Result<BotConfig> {
    if !path.exists() {
        return Ok(BotConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("config file is not valid TOML: {}", path.display()))
}

/// Environment overrides on top of the file. Values are copied as-is.
pub fn apply_env_overrides(mut config: BotConfig) -> BotConfig {
    if let Ok(token) = std::env::var(TOKEN_VAR) {
        config.token = token;
    }
    config
}
