//! Alert evaluation: the fire/no-fire decision for a single reading.
//!
//! Pure logic with no store or sender access. The caller loads preferences and
//! hands the resulting [`Decision`] to the dispatcher.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::alert::AlertEvent;
use crate::channels::Channel;
use crate::preferences::AlertPreferences;

/// Whether to alert, and through which channels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Decision {
    pub fire: bool,
    /// Enabled channels that also have a usable recipient. Populated even when
    /// `fire` is false so callers can report what would have been targeted.
    pub channels: BTreeSet<Channel>,
}

impl Decision {
    /// A decision that never fires and targets nothing.
    pub fn suppressed() -> Self {
        Self::default()
    }
}

/// Outcome of evaluating a reading against whatever preferences were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The user has no stored preferences; nothing should be dispatched.
    NoPreferences,
    Decided(Decision),
}

/// Decide whether `event` should fire an alert for `prefs`.
///
/// Fires when the reading meets or exceeds the threshold.
pub fn evaluate(event: &AlertEvent, prefs: &AlertPreferences) -> Decision {
    Decision {
        fire: event.aqi_value.is_finite() && event.aqi_value >= f64::from(prefs.threshold),
        channels: eligible_channels(prefs),
    }
}

/// Evaluate against an optional preference record as returned by a store.
pub fn evaluate_stored(event: &AlertEvent, prefs: Option<&AlertPreferences>) -> Evaluation {
    match prefs {
        Some(prefs) => Evaluation::Decided(evaluate(event, prefs)),
        None => Evaluation::NoPreferences,
    }
}

/// Channels whose toggle is on and, for email and SMS, whose contact field is
/// non-empty. Push is addressed by user id and needs no contact field.
pub fn eligible_channels(prefs: &AlertPreferences) -> BTreeSet<Channel> {
    Channel::ALL
        .into_iter()
        .filter(|channel| match channel {
            Channel::Email => prefs.email_enabled && !prefs.email.trim().is_empty(),
            Channel::Sms => prefs.sms_enabled && !prefs.phone_or_empty().trim().is_empty(),
            Channel::Push => prefs.push_enabled,
        })
        .collect()
}
