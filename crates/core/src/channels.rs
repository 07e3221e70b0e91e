//! Notification delivery channels.
//!
//! The serialized names must match the keys of the `results` object returned
//! by the alert trigger endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email notification sent to the preference record's address.
pub const CHANNEL_EMAIL: &str = "email";

/// SMS notification sent to the preference record's phone number.
pub const CHANNEL_SMS: &str = "sms";

/// Push notification delivered to the user's registered devices.
pub const CHANNEL_PUSH: &str = "push";

/// An independent notification delivery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
    Push,
}

impl Channel {
    /// Every channel, in result order.
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Sms, Channel::Push];

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Email => CHANNEL_EMAIL,
            Channel::Sms => CHANNEL_SMS,
            Channel::Push => CHANNEL_PUSH,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
