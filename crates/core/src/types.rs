/// Users are identified by the UUID issued by the identity provider.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Validation messages keyed by field name, in stable order.
pub type FieldErrors = std::collections::BTreeMap<String, Vec<String>>;
