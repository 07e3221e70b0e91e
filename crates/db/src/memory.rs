//! Process-local [`SettingsStore`] used by tests and database-less runs.

use std::collections::HashMap;

use airwatch_core::preferences::AlertPreferences;
use airwatch_core::store::{SettingsStore, StoreError};
use airwatch_core::types::UserId;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Settings store holding records in a `HashMap` behind an async lock.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    records: RwLock<HashMap<UserId, AlertPreferences>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with stored preferences.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, user_id: UserId) -> Result<Option<AlertPreferences>, StoreError> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }

    async fn upsert(&self, prefs: &AlertPreferences) -> Result<AlertPreferences, StoreError> {
        self.records
            .write()
            .await
            .insert(prefs.user_id, prefs.clone());
        Ok(prefs.clone())
    }
}
