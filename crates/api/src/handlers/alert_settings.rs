//! Handlers for `/api/v1/users/{user_id}/alert-settings`.

use airwatch_core::preferences::{AlertPreferences, AlertPreferencesInput};
use airwatch_core::store;
use airwatch_core::types::UserId;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for `GET`: the stored record, or the defaults when `saved` is
/// false.
#[derive(Debug, Serialize)]
pub struct AlertSettingsResponse {
    pub data: AlertPreferences,
    pub saved: bool,
}

/// GET /api/v1/users/{user_id}/alert-settings
pub async fn get_alert_settings(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<AlertSettingsResponse>> {
    let response = match state.store.get(user_id).await? {
        Some(prefs) => AlertSettingsResponse {
            data: prefs,
            saved: true,
        },
        None => AlertSettingsResponse {
            data: AlertPreferences::defaults_for(user_id),
            saved: false,
        },
    };

    Ok(Json(response))
}

/// PUT /api/v1/users/{user_id}/alert-settings
///
/// Replaces the user's preferences. The whole body is checked first; on any
/// missing, mistyped or invalid field nothing is written and every message
/// is returned.
pub async fn update_alert_settings(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<AlertPreferences>>> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = AlertPreferencesInput::from_json(&body)?;

    let prefs = store::save(state.store.as_ref(), user_id, input).await?;
    tracing::info!(%user_id, threshold = prefs.threshold, "Alert settings updated");

    Ok(Json(DataResponse { data: prefs }))
}
