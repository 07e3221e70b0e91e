//! Route definitions for the alert trigger.

use axum::routing::post;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/alerts", post(alerts::process_alert))
}
