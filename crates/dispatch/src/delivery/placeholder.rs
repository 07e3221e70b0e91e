//! Placeholder senders that log instead of delivering.
//!
//! Each channel gets a [`PlaceholderSender`] until a real transport is wired
//! in. A send is reported as accepted with a detail saying which integration
//! is still missing.

use airwatch_core::channels::Channel;
use async_trait::async_trait;

use super::{ChannelSender, SendError};

/// Logs the notification it would have delivered and reports success.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderSender {
    channel: Channel,
}

impl PlaceholderSender {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    /// One placeholder per channel.
    pub fn all() -> [Self; 3] {
        Channel::ALL.map(Self::new)
    }

    fn detail(&self) -> &'static str {
        match self.channel {
            Channel::Email => "Email sending API placeholder - integrate your own API here",
            Channel::Sms => "SMS sending API placeholder - integrate your own API here",
            Channel::Push => "Push notification API placeholder - integrate your own API here",
        }
    }
}

#[async_trait]
impl ChannelSender for PlaceholderSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<String, SendError> {
        if recipient.trim().is_empty() {
            return Err(SendError::InvalidRecipient(format!(
                "no {} recipient",
                self.channel
            )));
        }

        tracing::info!(
            channel = %self.channel,
            recipient,
            subject,
            body,
            "[PLACEHOLDER] Would deliver alert notification"
        );
        Ok(self.detail().to_string())
    }
}
