//! Result types produced by dispatching an alert.
//!
//! A channel that was not selected is absent from [`DispatchResult::results`];
//! an entry with [`Outcome::Failure`] means the send was attempted and failed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::channels::Channel;
use crate::preferences::AlertPreferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// What happened on one channel during a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelResult {
    pub channel: Channel,
    pub attempted: bool,
    pub recipient: String,
    pub outcome: Outcome,
    /// Sender-provided detail on success, or the failure reason.
    pub detail: String,
}

impl ChannelResult {
    pub fn success(channel: Channel, recipient: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            channel,
            attempted: true,
            recipient: recipient.into(),
            outcome: Outcome::Success,
            detail: detail.into(),
        }
    }

    pub fn failure(channel: Channel, recipient: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            channel,
            attempted: true,
            recipient: recipient.into(),
            outcome: Outcome::Failure,
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Aggregate outcome of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DispatchResult {
    /// Mirrors the decision; individual channel failures do not clear it.
    pub fired: bool,
    pub results: BTreeMap<Channel, ChannelResult>,
}

impl DispatchResult {
    /// The result of a decision that did not fire.
    pub fn not_fired() -> Self {
        Self::default()
    }

    /// Number of channels whose send failed.
    pub fn failure_count(&self) -> usize {
        self.results.values().filter(|r| !r.is_success()).count()
    }
}

/// The address a channel delivers to for this user.
pub fn recipient_for(channel: Channel, prefs: &AlertPreferences) -> String {
    match channel {
        Channel::Email => prefs.email.clone(),
        Channel::Sms => prefs.phone_or_empty().to_string(),
        Channel::Push => prefs.user_id.to_string(),
    }
}
