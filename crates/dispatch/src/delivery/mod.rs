//! Delivery channels for alert notifications.
//!
//! Every channel is reached through [`ChannelSender`], so production
//! transports can be registered with the [`Dispatcher`](crate::Dispatcher)
//! in place of the placeholders without touching evaluation or dispatch.

use airwatch_core::channels::Channel;
use async_trait::async_trait;

pub mod placeholder;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a single failed send.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The recipient address is missing or not deliverable on this channel.
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    /// The transport accepted the request but delivery failed.
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// The channel's transport could not be reached.
    #[error("Channel unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// ChannelSender
// ---------------------------------------------------------------------------

/// Capability for delivering one notification on one channel.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    /// The channel this sender delivers on.
    fn channel(&self) -> Channel;

    /// Deliver `subject`/`body` to `recipient`.
    ///
    /// Returns a human-readable detail describing the accepted delivery.
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<String, SendError>;
}
