mod alert_settings_repo;

pub use alert_settings_repo::AlertSettingsRepo;
