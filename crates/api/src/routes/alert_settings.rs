//! Route definitions for per-user alert settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::alert_settings;
use crate::state::AppState;

/// ```text
/// GET    /users/{user_id}/alert-settings  -> get_alert_settings
/// PUT    /users/{user_id}/alert-settings  -> update_alert_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users/{user_id}/alert-settings",
        get(alert_settings::get_alert_settings).put(alert_settings::update_alert_settings),
    )
}
