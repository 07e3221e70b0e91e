//! PostgreSQL-backed [`SettingsStore`].

use airwatch_core::preferences::AlertPreferences;
use airwatch_core::store::{SettingsStore, StoreError};
use airwatch_core::types::UserId;
use async_trait::async_trait;

use crate::repositories::AlertSettingsRepo;
use crate::DbPool;

/// Settings store persisting to the `alert_settings` table.
#[derive(Clone)]
pub struct PgSettingsStore {
    pool: DbPool,
}

impl PgSettingsStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn get(&self, user_id: UserId) -> Result<Option<AlertPreferences>, StoreError> {
        let row = AlertSettingsRepo::find_by_user(&self.pool, user_id)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(AlertPreferences::from))
    }

    async fn upsert(&self, prefs: &AlertPreferences) -> Result<AlertPreferences, StoreError> {
        let row = AlertSettingsRepo::upsert(&self.pool, prefs)
            .await
            .map_err(StoreError::new)?;
        tracing::debug!(user_id = %prefs.user_id, "Alert settings saved");
        Ok(row.into())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::new)
    }
}
