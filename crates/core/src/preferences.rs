//! Per-user alert preferences and the canonical validation contract.
//!
//! [`AlertPreferencesInput`] is what a user submits; it becomes an
//! [`AlertPreferences`] only through [`AlertPreferencesInput::into_preferences`],
//! which trims, normalizes and validates every field at once.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::{FieldErrors, UserId};

/// Lowest accepted AQI threshold.
pub const THRESHOLD_MIN: i32 = 0;

/// Highest accepted AQI threshold (top of the AQI scale).
pub const THRESHOLD_MAX: i32 = 500;

/// Threshold offered to a user who has not saved preferences yet.
pub const DEFAULT_THRESHOLD: i32 = 100;

// ---------------------------------------------------------------------------
// AlertPreferences
// ---------------------------------------------------------------------------

/// A user's stored alert preferences. One record per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPreferences {
    pub user_id: UserId,
    pub email: String,
    /// `None` when the user has not provided a number.
    pub phone: Option<String>,
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    /// AQI value at or above which alerts fire, in `[0, 500]`.
    pub threshold: i32,
}

impl AlertPreferences {
    /// Starting values shown to a user with nothing saved: push on, email
    /// and SMS off, threshold 100.
    pub fn defaults_for(user_id: UserId) -> Self {
        Self {
            user_id,
            email: String::new(),
            phone: None,
            push_enabled: true,
            email_enabled: false,
            sms_enabled: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Phone number, or an empty string when none is stored.
    pub fn phone_or_empty(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// AlertPreferencesInput
// ---------------------------------------------------------------------------

/// DTO for creating or replacing a user's alert preferences.
///
/// Build it from a request body with [`AlertPreferencesInput::from_json`], which
/// reports missing and mistyped fields alongside the validation rules below.
#[derive(Debug, Clone, Validate)]
pub struct AlertPreferencesInput {
    #[validate(
        custom(function = "validate_email_address"),
        length(max = 255, message = "Email must be less than 255 characters")
    )]
    pub email: String,

    #[validate(length(max = 20, message = "Phone number must be less than 20 characters"))]
    pub phone: Option<String>,

    pub push_enabled: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,

    /// Any number is accepted here so a fractional value becomes a field
    /// error rather than a type error.
    #[validate(custom(function = "validate_threshold"))]
    pub threshold: f64,
}

impl AlertPreferencesInput {
    /// Read an input from a JSON request body.
    ///
    /// Keys are snake_case with camelCase accepted for the toggles. A missing
    /// or mistyped field is reported under its snake_case name together with
    /// any rule failures on the remaining fields, so one response lists every
    /// problem.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let Some(object) = value.as_object() else {
            let mut fields = FieldErrors::new();
            fields.insert("body".into(), vec!["Expected a JSON object".into()]);
            return Err(CoreError::InvalidPreferences(fields));
        };
        let field = |snake: &str, camel: &str| {
            object
                .get(snake)
                .or_else(|| object.get(camel))
                .filter(|v| !v.is_null())
        };

        let mut type_errors = FieldErrors::new();
        let mut reject = |name: &str, message: &str| {
            type_errors
                .entry(name.to_string())
                .or_default()
                .push(message.to_string());
        };

        let email = match field("email", "email") {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                reject("email", "Email must be a string");
                String::new()
            }
        };

        let phone = match field("phone", "phone") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                reject("phone", "Phone number must be a string");
                None
            }
        };

        let mut toggle = |snake: &str, camel: &str| match field(snake, camel) {
            Some(Value::Bool(b)) => *b,
            None => {
                reject(snake, "Required");
                false
            }
            Some(_) => {
                reject(snake, "Must be true or false");
                false
            }
        };
        let push_enabled = toggle("push_enabled", "pushEnabled");
        let email_enabled = toggle("email_enabled", "emailEnabled");
        let sms_enabled = toggle("sms_enabled", "smsEnabled");

        let threshold = match field("threshold", "threshold") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            None => {
                reject("threshold", "Threshold is required");
                0.0
            }
            Some(_) => {
                reject("threshold", "Threshold must be a number");
                0.0
            }
        };

        let input = Self {
            email,
            phone,
            push_enabled,
            email_enabled,
            sms_enabled,
            threshold,
        };
        if type_errors.is_empty() {
            return Ok(input);
        }

        // Rule failures on fields that already have a type error are noise.
        if let Err(errors) = input.normalized().validate() {
            for (name, messages) in field_errors(&errors) {
                type_errors.entry(name).or_insert(messages);
            }
        }
        Err(CoreError::InvalidPreferences(type_errors))
    }

    /// Trim contact fields and collapse an empty phone number to `None`.
    pub fn normalized(self) -> Self {
        let phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Self {
            email: self.email.trim().to_string(),
            phone,
            ..self
        }
    }

    /// Validate the input and build the preference record for `user_id`.
    ///
    /// All fields are checked before anything is returned, so a rejection
    /// reports every failing field at once.
    pub fn into_preferences(self, user_id: UserId) -> Result<AlertPreferences, CoreError> {
        let input = self.normalized();
        input
            .validate()
            .map_err(|e| CoreError::InvalidPreferences(field_errors(&e)))?;

        Ok(AlertPreferences {
            user_id,
            email: input.email,
            phone: input.phone,
            push_enabled: input.push_enabled,
            email_enabled: input.email_enabled,
            sms_enabled: input.sms_enabled,
            // Whole number within bounds, checked by `validate_threshold`.
            threshold: input.threshold as i32,
        })
    }
}

impl From<&AlertPreferences> for AlertPreferencesInput {
    fn from(prefs: &AlertPreferences) -> Self {
        Self {
            email: prefs.email.clone(),
            phone: prefs.phone.clone(),
            push_enabled: prefs.push_enabled,
            email_enabled: prefs.email_enabled,
            sms_enabled: prefs.sms_enabled,
            threshold: f64::from(prefs.threshold),
        }
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(validation_error("required", "Email is required"));
    }
    // `validate_email` allows dotless domains such as `localhost`.
    let has_dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        });
    if !email.validate_email() || !has_dotted_domain {
        return Err(validation_error(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

fn validate_threshold(threshold: f64) -> Result<(), ValidationError> {
    if !threshold.is_finite() || threshold.fract() != 0.0 {
        return Err(validation_error(
            "integer",
            "Threshold must be a whole number",
        ));
    }
    if threshold < f64::from(THRESHOLD_MIN) {
        return Err(validation_error("range", "Threshold must be at least 0"));
    }
    if threshold > f64::from(THRESHOLD_MAX) {
        return Err(validation_error("range", "Threshold must be at most 500"));
    }
    Ok(())
}

/// Flatten `validator` errors into messages keyed by field name.
///
/// Errors without a message fall back to their code.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
