//! Alert settings entity model.

use airwatch_core::preferences::AlertPreferences;
use airwatch_core::types::{Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `alert_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlertSettings {
    pub id: i64,
    pub user_id: UserId,
    pub email: String,
    pub phone: Option<String>,
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub threshold: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AlertSettings> for AlertPreferences {
    fn from(row: AlertSettings) -> Self {
        Self {
            user_id: row.user_id,
            email: row.email,
            phone: row.phone,
            push_enabled: row.push_enabled,
            email_enabled: row.email_enabled,
            sms_enabled: row.sms_enabled,
            threshold: row.threshold,
        }
    }
}
