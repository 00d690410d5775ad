//! Port definitions: the seams between the domain and the outside world.
//!
//! ## Port Placement Guidelines
//! ## 端口放置原则
//!
//! A trait belongs here only when all three answers are yes:
//!
//! 1. Does the application layer depend on it to do its job?
//! 2. Can it be implemented without knowing who calls it?
//! 3. Would swapping the implementation leave the domain untouched?
//!
//! Anything else is an implementation detail of its adapter crate.

pub mod errors;
pub mod events;
pub mod messenger;
pub mod settings_store;
pub mod thumbnail_store;

pub use errors::{GatewayError, SettingsStoreError};
pub use events::ChatEventHandlerPort;
pub use messenger::MessengerPort;
pub use settings_store::{SettingsMigrationPort, SettingsStorePort};
pub use thumbnail_store::ThumbnailStorePort;
