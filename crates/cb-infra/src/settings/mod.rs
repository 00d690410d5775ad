mod file_repo;
mod memory;
mod migration;

pub use file_repo::FileSettingsRepository;
pub use memory::InMemorySettingsStore;
pub use migration::SettingsMigrator;
