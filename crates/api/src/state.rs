use std::sync::Arc;

use airwatch_core::store::SettingsStore;
use airwatch_dispatch::AlertProcessor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Alert preference store (PostgreSQL or in-memory).
    pub store: Arc<dyn SettingsStore>,
    /// Evaluates readings and dispatches alerts.
    pub processor: AlertProcessor,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
