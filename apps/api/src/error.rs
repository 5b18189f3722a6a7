//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the API                                │
//! │                                                                         │
//! │  Handler                                                               │
//! │  Result<T, ApiError>                                                   │
//! │       │                                                                 │
//! │       ├── ValidationError ──► VALIDATION_ERROR ──► 400                 │
//! │       ├── bad UUID text   ──► MALFORMED_ID     ──► 400                 │
//! │       ├── unknown id      ──► NOT_FOUND        ──► 404                 │
//! │       └── DbError         ──► DATABASE_ERROR   ──► 500                 │
//! │                                                                         │
//! │  Every failure serializes the same way:                                │
//! │  {"code": "NOT_FOUND", "message": "No receipt found for that id"}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two 400 cases are deliberately distinct: a malformed identifier is
//! rejected before any storage access, while an unknown-but-well-formed
//! identifier reaches storage and comes back as 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use rewards_core::ValidationError;
use rewards_db::DbError;

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is the body a client receives when a request fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "The receipt is invalid: At least one item is required."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Receipt failed a validation rule (400)
    ValidationError,

    /// Path identifier is not a well-formed UUID (400)
    MalformedId,

    /// No receipt stored under the given id (404)
    NotFound,

    /// Database operation failed (500)
    DatabaseError,
}

impl ApiError {
    /// Identifier text that does not parse as a UUID.
    pub fn malformed_id(raw: &str) -> Self {
        ApiError {
            code: ErrorCode::MalformedId,
            message: format!("Invalid receipt id: {raw}"),
        }
    }

    /// Well-formed identifier with no stored receipt.
    pub fn receipt_not_found() -> Self {
        ApiError {
            code: ErrorCode::NotFound,
            message: "No receipt found for that id".to_string(),
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::ValidationError | ErrorCode::MalformedId => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: format!("The receipt is invalid: {err}"),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        // Full detail goes to the log; the client gets a generic message
        tracing::error!(error = %err, "Database operation failed");
        ApiError {
            code: ErrorCode::DatabaseError,
            message: "Internal storage error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_400_with_reason() {
        let err: ApiError = ValidationError::ItemsRequired.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "The receipt is invalid: At least one item is required."
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::malformed_id("not-a-uuid").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::receipt_not_found().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let err = ApiError::receipt_not_found();
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
        assert!(json.contains("No receipt found for that id"));
    }
}
