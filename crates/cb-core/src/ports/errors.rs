//! Typed errors shared by port implementations.

use thiserror::Error;

/// Failures of a settings store implementation.
#[derive(Debug, Error)]
pub enum SettingsStoreError {
    #[error("settings io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings record is not valid json: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("no migration path from schema version {0}")]
    MigrationGap(u32),
}

/// Failures talking to the messaging backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend accepted the request and answered with an error.
    #[error("api error {code}: {description}")]
    Api { code: i64, description: String },

    /// The request never produced a usable answer.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl GatewayError {
    /// True for the harmless edit-without-change rejection.
    pub fn is_not_modified(&self) -> bool {
        matches!(self, GatewayError::Api { description, .. }
            if description.contains("message is not modified"))
    }
}
