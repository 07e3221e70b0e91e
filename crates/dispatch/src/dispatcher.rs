//! Fan-out dispatch of a firing decision.
//!
//! [`Dispatcher`] sends to every selected channel concurrently, each on its
//! own task under a per-channel timeout, and waits for all of them before
//! returning. A channel that errors, times out or panics is recorded as a
//! failure and never prevents the other channels from being attempted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use airwatch_core::alert::{AlertEvent, ALERT_SUBJECT};
use airwatch_core::channels::Channel;
use airwatch_core::dispatch::{recipient_for, ChannelResult, DispatchResult};
use airwatch_core::error::CoreError;
use airwatch_core::evaluator::Decision;
use airwatch_core::preferences::AlertPreferences;
use airwatch_core::types::UserId;

use crate::delivery::placeholder::PlaceholderSender;
use crate::delivery::ChannelSender;

/// Default upper bound on a single channel send.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Routes alert notifications to the registered sender of each channel.
///
/// Cheap to share behind an `Arc`; holds no per-dispatch state.
#[derive(Clone)]
pub struct Dispatcher {
    senders: HashMap<Channel, Arc<dyn ChannelSender>>,
    send_timeout: Duration,
}

impl Dispatcher {
    /// Create a dispatcher with no senders registered.
    pub fn new(send_timeout: Duration) -> Self {
        Self {
            senders: HashMap::new(),
            send_timeout,
        }
    }

    /// A dispatcher with a [`PlaceholderSender`] registered for every channel.
    pub fn with_placeholders(send_timeout: Duration) -> Self {
        PlaceholderSender::all()
            .into_iter()
            .fold(Self::new(send_timeout), |d, s| d.with_sender(Arc::new(s)))
    }

    /// Register `sender` for its channel, replacing any previous sender.
    pub fn with_sender(mut self, sender: Arc<dyn ChannelSender>) -> Self {
        self.senders.insert(sender.channel(), sender);
        self
    }

    pub fn send_timeout(&self) -> Duration {
        self.send_timeout
    }

    /// Deliver the alert for `event` on every channel selected by `decision`.
    ///
    /// A decision that does not fire returns an empty, non-fired result
    /// without touching any sender. Only a malformed event is an error.
    pub async fn dispatch(
        &self,
        decision: &Decision,
        prefs: &AlertPreferences,
        event: &AlertEvent,
    ) -> Result<DispatchResult, CoreError> {
        check_event(event)?;

        if !decision.fire {
            return Ok(DispatchResult::not_fired());
        }

        let body = event.message(prefs.threshold);
        let sends = decision.channels.iter().map(|&channel| {
            let recipient = recipient_for(channel, prefs);
            self.send_one(event.user_id, channel, recipient, body.clone())
        });

        let results = futures::future::join_all(sends)
            .await
            .into_iter()
            .map(|result| (result.channel, result))
            .collect();

        let result = DispatchResult {
            fired: true,
            results,
        };
        tracing::info!(
            user_id = %event.user_id,
            channels = result.results.len(),
            failures = result.failure_count(),
            "Alert dispatched"
        );
        Ok(result)
    }

    /// Run one channel's send on its own task so a panic stays contained.
    async fn send_one(
        &self,
        user_id: UserId,
        channel: Channel,
        recipient: String,
        body: String,
    ) -> ChannelResult {
        let Some(sender) = self.senders.get(&channel).cloned() else {
            tracing::warn!(%user_id, %channel, "No sender registered for channel");
            return ChannelResult::failure(channel, recipient, "no sender configured for channel");
        };

        let to = recipient.clone();
        let handle =
            tokio::spawn(async move { sender.send(&to, ALERT_SUBJECT, &body).await });
        let abort = handle.abort_handle();

        match tokio::time::timeout(self.send_timeout, handle).await {
            Ok(Ok(Ok(detail))) => {
                tracing::debug!(%user_id, %channel, "Channel send succeeded");
                ChannelResult::success(channel, recipient, detail)
            }
            Ok(Ok(Err(e))) => {
                tracing::warn!(%user_id, %channel, error = %e, "Channel send failed");
                ChannelResult::failure(channel, recipient, e.to_string())
            }
            Ok(Err(join_err)) => {
                tracing::error!(%user_id, %channel, error = %join_err, "Channel sender task aborted");
                let detail = if join_err.is_panic() {
                    "sender panicked"
                } else {
                    "sender task cancelled"
                };
                ChannelResult::failure(channel, recipient, detail)
            }
            Err(_) => {
                abort.abort();
                let ms = self.send_timeout.as_millis();
                tracing::warn!(%user_id, %channel, timeout_ms = ms as u64, "Channel send timed out");
                ChannelResult::failure(channel, recipient, format!("timed out after {ms} ms"))
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_placeholders(DEFAULT_SEND_TIMEOUT)
    }
}

/// Reject events the dispatcher cannot act on.
fn check_event(event: &AlertEvent) -> Result<(), CoreError> {
    if !event.aqi_value.is_finite() {
        return Err(CoreError::InvalidEvent("aqiValue must be a finite number".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
