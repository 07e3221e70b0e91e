//! AirWatch domain core.
//!
//! Pure domain logic with no I/O of its own:
//!
//! - [`preferences`]: the per-user alert preference record and its single
//!   canonical validation contract.
//! - [`alert`]: the inbound AQI reading and its parsing rules.
//! - [`evaluator`]: the fire/no-fire decision and channel selection.
//! - [`dispatch`]: the aggregate result types produced by a dispatch.
//! - [`store`]: the settings store capability consumed by the alert path.

pub mod alert;
pub mod channels;
pub mod dispatch;
pub mod error;
pub mod evaluator;
pub mod preferences;
pub mod store;
pub mod types;
