pub mod settings;
pub mod thumbs;

mod fsutil;

pub use settings::{FileSettingsRepository, InMemorySettingsStore};
pub use thumbs::JsonThumbnailStore;
