//! Handler for the alert trigger, `POST /api/v1/alerts`.
//!
//! Every outcome of this route, including a malformed reading, is answered
//! with the same `{ success, fired, message, results }` body. The request
//! body is parsed by hand rather than through `Json<T>` so that malformed
//! input is reported in that shape.

use std::borrow::Cow;
use std::collections::BTreeMap;

use airwatch_core::alert::AlertEvent;
use airwatch_core::channels::Channel;
use airwatch_core::dispatch::ChannelResult;
use airwatch_core::error::CoreError;
use airwatch_dispatch::ProcessOutcome;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

pub const MSG_NO_SETTINGS: &str = "No alert settings found for user";
pub const MSG_BELOW_THRESHOLD: &str = "AQI below threshold, no alert sent";
pub const MSG_PROCESSED: &str = "Alerts processed";

/// Error code attached to responses for malformed readings.
pub const CODE_INVALID_EVENT: &str = "INVALID_EVENT";

/// Response body for the alert trigger.
///
/// `results` holds one entry per channel that was attempted, keyed by
/// channel name. It is empty when nothing fired.
#[derive(Debug, Serialize)]
pub struct ProcessAlertResponse {
    pub success: bool,
    pub fired: bool,
    pub message: Cow<'static, str>,
    pub results: BTreeMap<Channel, ChannelResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl ProcessAlertResponse {
    fn not_sent(success: bool, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success,
            fired: false,
            message: message.into(),
            results: BTreeMap::new(),
            code: None,
        }
    }

    fn from_outcome(outcome: ProcessOutcome) -> (StatusCode, Self) {
        match outcome {
            ProcessOutcome::NoPreferences => {
                (StatusCode::NOT_FOUND, Self::not_sent(false, MSG_NO_SETTINGS))
            }
            ProcessOutcome::BelowThreshold(_) => {
                (StatusCode::OK, Self::not_sent(true, MSG_BELOW_THRESHOLD))
            }
            ProcessOutcome::Fired(result) => (
                StatusCode::OK,
                Self {
                    success: true,
                    fired: result.fired,
                    message: MSG_PROCESSED.into(),
                    results: result.results,
                    code: None,
                },
            ),
        }
    }

    fn invalid_event(err: &CoreError) -> (StatusCode, Self) {
        let response = Self {
            code: Some(CODE_INVALID_EVENT),
            ..Self::not_sent(false, err.to_string())
        };
        (StatusCode::INTERNAL_SERVER_ERROR, response)
    }
}

/// POST /api/v1/alerts
///
/// Evaluate one AQI reading against the user's stored preferences and
/// dispatch on every eligible channel when it crosses the threshold.
/// Channel failures are reported per channel and never fail the request.
/// Store failures still go through [`AppError`](crate::error::AppError).
pub async fn process_alert(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ProcessAlertResponse>)> {
    let outcome = match AlertEvent::from_slice(&body) {
        Ok(event) => state.processor.process(&event).await,
        Err(err) => Err(err),
    };

    let (status, response) = match outcome {
        Ok(outcome) => ProcessAlertResponse::from_outcome(outcome),
        Err(err @ CoreError::InvalidEvent(_)) => {
            tracing::warn!(error = %err, "Rejected malformed alert event");
            ProcessAlertResponse::invalid_event(&err)
        }
        Err(err) => return Err(err.into()),
    };
    Ok((status, Json(response)))
}
