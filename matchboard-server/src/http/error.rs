//! API error types with IntoResponse.
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Recorder failures keep their distinctions on the wire: bad payloads are
//! 400, unknown players 404, transaction failures 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use matchboard_core::OutcomeError;

use crate::db::repos::{DbError, RecordError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload validation failed (400)
    Validation(OutcomeError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Sqlx(e) => Self::Database(e),
        }
    }
}

impl From<RecordError> for ApiError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::Invalid(e) => Self::Validation(e),
            RecordError::UnknownPlayer(id) => Self::NotFound {
                resource: "player",
                id: id.to_string(),
            },
            RecordError::Database(e) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(OutcomeError::InvalidResult(9));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "player",
            id: "42".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_player_record_error_is_404() {
        let err = ApiError::from(RecordError::UnknownPlayer(7));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn same_player_record_error_is_400() {
        let err = ApiError::from(RecordError::Invalid(OutcomeError::SamePlayer(7)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
