//! The settings store capability.
//!
//! The alert path only reads from the store. Writes go through [`save`], which
//! validates the whole input before anything reaches the backend.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::preferences::{AlertPreferences, AlertPreferencesInput};
use crate::types::UserId;

/// Backend failure reported by a [`SettingsStore`].
#[derive(Debug, thiserror::Error)]
#[error("Settings store error: {0}")]
pub struct StoreError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

/// Key-value store holding one [`AlertPreferences`] record per user.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the preferences for `user_id`, if any have been saved.
    async fn get(&self, user_id: UserId) -> Result<Option<AlertPreferences>, StoreError>;

    /// Insert or replace the record keyed by `prefs.user_id`.
    ///
    /// Callers pass records produced by
    /// [`AlertPreferencesInput::into_preferences`]; use [`save`] rather than
    /// calling this directly.
    async fn upsert(&self, prefs: &AlertPreferences) -> Result<AlertPreferences, StoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Validate `input` and persist it for `user_id`.
///
/// On a validation failure nothing is written and the per-field messages are
/// returned as [`CoreError::InvalidPreferences`].
pub async fn save(
    store: &dyn SettingsStore,
    user_id: UserId,
    input: AlertPreferencesInput,
) -> Result<AlertPreferences, CoreError> {
    let prefs = input.into_preferences(user_id)?;
    Ok(store.upsert(&prefs).await?)
}
