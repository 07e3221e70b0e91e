//! Inbound AQI readings that may trigger an alert.
//!
//! The monitoring process posts `{ userId, aqiValue, location }` once per new
//! reading per user. Parsing is lenient about `location` but strict about the
//! two fields the decision depends on.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::UserId;

/// Subject line used for every alert notification.
pub const ALERT_SUBJECT: &str = "Air Quality Alert";

/// Location used in the alert message when the reading carries none.
pub const DEFAULT_LOCATION: &str = "your area";

/// A single AQI reading for one user. Consumed once, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub user_id: UserId,
    pub aqi_value: f64,
    pub location: String,
}

impl AlertEvent {
    pub fn new(user_id: UserId, aqi_value: f64, location: impl Into<String>) -> Self {
        Self {
            user_id,
            aqi_value,
            location: location.into(),
        }
    }

    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| CoreError::InvalidEvent(format!("body is not valid JSON: {e}")))?;
        Self::from_json(&value)
    }

    /// Parse a trigger payload.
    ///
    /// Fields are read as `userId`/`aqiValue`/`location`, falling back to
    /// their snake_case spellings.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let object = value
            .as_object()
            .ok_or_else(|| CoreError::InvalidEvent("body must be a JSON object".into()))?;
        let field = |camel: &str, snake: &str| {
            object
                .get(camel)
                .or_else(|| object.get(snake))
                .filter(|v| !v.is_null())
        };

        let user_id = match field("userId", "user_id") {
            None => return Err(CoreError::InvalidEvent("userId is required".into())),
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(CoreError::InvalidEvent("userId is required".into()))
            }
            Some(Value::String(s)) => s
                .trim()
                .parse::<UserId>()
                .map_err(|_| CoreError::InvalidEvent(format!("userId '{s}' is not a valid id")))?,
            Some(_) => return Err(CoreError::InvalidEvent("userId must be a string".into())),
        };

        let aqi_value = match field("aqiValue", "aqi_value") {
            None => return Err(CoreError::InvalidEvent("aqiValue is required".into())),
            Some(v) => v
                .as_f64()
                .filter(|n| n.is_finite())
                .ok_or_else(|| CoreError::InvalidEvent("aqiValue must be a number".into()))?,
        };

        let location = field("location", "location")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
            .to_string();

        Ok(Self {
            user_id,
            aqi_value,
            location,
        })
    }

    /// Notification body for a reading that met `threshold`.
    pub fn message(&self, threshold: i32) -> String {
        format!(
            "Air Quality Alert: AQI in {} is {}, which exceeds your threshold of {}.",
            self.location, self.aqi_value, threshold
        )
    }
}
