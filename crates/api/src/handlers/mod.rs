pub mod alert_settings;
pub mod alerts;
