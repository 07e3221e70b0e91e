//! AirWatch alert dispatch.
//!
//! This crate turns an evaluated reading into notifications:
//!
//! - [`delivery`]: the [`ChannelSender`] capability and the placeholder
//!   senders shipped for email, SMS and push.
//! - [`Dispatcher`]: fans a firing decision out to every selected channel
//!   concurrently and joins the per-channel outcomes.
//! - [`AlertProcessor`]: the full inbound path: load preferences, evaluate,
//!   dispatch.

pub mod delivery;
pub mod dispatcher;
pub mod processor;

pub use delivery::placeholder::PlaceholderSender;
pub use delivery::{ChannelSender, SendError};
pub use dispatcher::Dispatcher;
pub use processor::{AlertProcessor, ProcessOutcome};
