//! Shared response envelope types for API handlers.
//!
//! Preference endpoints use a `{ "data": ... }` envelope. The alert trigger
//! returns its own result shape (see [`crate::handlers::alerts`]).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: prefs }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
