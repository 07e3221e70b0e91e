//! Repository for the `alert_settings` table.

use airwatch_core::preferences::AlertPreferences;
use airwatch_core::types::UserId;
use sqlx::PgPool;

use crate::models::alert_settings::AlertSettings;

/// Column list for `alert_settings` queries.
const COLUMNS: &str = "id, user_id, email, phone, push_enabled, email_enabled, \
    sms_enabled, threshold, created_at, updated_at";

/// Provides read and upsert operations for alert settings.
pub struct AlertSettingsRepo;

impl AlertSettingsRepo {
    /// Get the settings row for a user.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<AlertSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alert_settings WHERE user_id = $1");
        sqlx::query_as::<_, AlertSettings>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the settings for `prefs.user_id`.
    ///
    /// Uses `INSERT ... ON CONFLICT (user_id) DO UPDATE` so the whole record
    /// is replaced in a single statement.
    pub async fn upsert(
        pool: &PgPool,
        prefs: &AlertPreferences,
    ) -> Result<AlertSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO alert_settings \
                (user_id, email, phone, push_enabled, email_enabled, sms_enabled, threshold) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (user_id) DO UPDATE SET \
                email = EXCLUDED.email, \
                phone = EXCLUDED.phone, \
                push_enabled = EXCLUDED.push_enabled, \
                email_enabled = EXCLUDED.email_enabled, \
                sms_enabled = EXCLUDED.sms_enabled, \
                threshold = EXCLUDED.threshold, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AlertSettings>(&query)
            .bind(prefs.user_id)
            .bind(&prefs.email)
            .bind(prefs.phone.as_deref())
            .bind(prefs.push_enabled)
            .bind(prefs.email_enabled)
            .bind(prefs.sms_enabled)
            .bind(prefs.threshold)
            .fetch_one(pool)
            .await
    }
}
