pub mod alert_settings;
pub mod alerts;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /alerts                            trigger alert processing
/// GET  /users/{user_id}/alert-settings    read preferences
/// PUT  /users/{user_id}/alert-settings    save preferences
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(alerts::router())
        .merge(alert_settings::router())
}
