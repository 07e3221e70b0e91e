pub mod alert_settings;
