//! The inbound alert path: load preferences, evaluate, dispatch.

use std::sync::Arc;

use airwatch_core::alert::AlertEvent;
use airwatch_core::dispatch::DispatchResult;
use airwatch_core::error::CoreError;
use airwatch_core::evaluator::{evaluate, Decision};
use airwatch_core::store::SettingsStore;

use crate::dispatcher::Dispatcher;

/// What happened to one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The user has no stored preferences.
    NoPreferences,
    /// The reading was below the user's threshold; nothing was sent.
    BelowThreshold(Decision),
    /// The alert fired; per-channel outcomes are in the result.
    Fired(DispatchResult),
}

impl ProcessOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, ProcessOutcome::Fired(_))
    }
}

/// Processes readings for any user. Stateless between calls.
#[derive(Clone)]
pub struct AlertProcessor {
    store: Arc<dyn SettingsStore>,
    dispatcher: Arc<Dispatcher>,
}

impl AlertProcessor {
    pub fn new(store: Arc<dyn SettingsStore>, dispatcher: Arc<Dispatcher>) -> Self {
        Self { store, dispatcher }
    }

    /// Evaluate `event` against the user's stored preferences and dispatch
    /// when it fires.
    ///
    /// Missing preferences and sub-threshold readings are normal outcomes.
    /// Errors are limited to store failures and malformed events.
    pub async fn process(&self, event: &AlertEvent) -> Result<ProcessOutcome, CoreError> {
        tracing::info!(
            user_id = %event.user_id,
            aqi = event.aqi_value,
            location = %event.location,
            "Processing alert"
        );

        let Some(prefs) = self.store.get(event.user_id).await? else {
            tracing::info!(user_id = %event.user_id, "No alert settings found for user");
            return Ok(ProcessOutcome::NoPreferences);
        };
        let decision = evaluate(event, &prefs);

        if !decision.fire {
            tracing::debug!(
                user_id = %event.user_id,
                threshold = prefs.threshold,
                "AQI below threshold, no alert sent"
            );
            return Ok(ProcessOutcome::BelowThreshold(decision));
        }

        let result = self.dispatcher.dispatch(&decision, &prefs, event).await?;
        Ok(ProcessOutcome::Fired(result))
    }
}
