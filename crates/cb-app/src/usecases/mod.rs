//! Application use cases, one per user-visible operation.

pub mod capture_thumbnail;
pub mod clear_settings;
pub mod preview_caption;
pub mod relay_media;
pub mod run_wizard;
pub mod update_lists;

pub use capture_thumbnail::CaptureThumbnail;
pub use clear_settings::ClearSettings;
pub use preview_caption::PreviewCaption;
pub use relay_media::RelayMedia;
pub use run_wizard::RunWizard;
pub use update_lists::UpdateLists;
