use crate::store::StoreError;
use crate::types::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A preference save was rejected; no part of it was persisted.
    #[error("Invalid preferences: {}", summarize(.0))]
    InvalidPreferences(FieldErrors),

    /// The alert trigger payload was malformed; no dispatch was attempted.
    #[error("Invalid alert event: {0}")]
    InvalidEvent(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn summarize(fields: &FieldErrors) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_preferences_display_lists_fields() {
        let mut fields = FieldErrors::new();
        fields.insert("email".into(), vec!["Invalid email address".into()]);
        fields.insert(
            "threshold".into(),
            vec!["Threshold must be at most 500".into()],
        );

        let err = CoreError::InvalidPreferences(fields);
        assert_eq!(
            err.to_string(),
            "Invalid preferences: email: Invalid email address; \
             threshold: Threshold must be at most 500"
        );
    }

    #[test]
    fn invalid_event_display() {
        let err = CoreError::InvalidEvent("userId is required".into());
        assert_eq!(err.to_string(), "Invalid alert event: userId is required");
    }
}
