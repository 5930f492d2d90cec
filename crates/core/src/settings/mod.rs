//! Settings and user identity.

mod settings_repository;
mod settings_service;
mod settings_traits;

pub use settings_repository::FileSettingsRepository;
pub use settings_service::SettingsService;
pub use settings_traits::SettingsRepositoryTrait;
