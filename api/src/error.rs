use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use finmock_core::error::{self, ApiError};
use finmock_core::fixtures::FixtureError;

/// Internal error type that converts to structured API responses
#[derive(Debug)]
pub enum AppError {
    /// Validation error (400)
    Validation {
        message: String,
        field: Option<String>,
        received: Option<serde_json::Value>,
    },
    /// Resolved identity is not on the allow-list (403)
    Forbidden { message: String },
    /// Fixture missing or unreadable (500) — the cause is logged, never
    /// surfaced to the caller
    FixtureUnavailable(FixtureError),
    /// Internal error (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::now_v7().to_string();

        let (status, api_error) = match self {
            AppError::Validation {
                message,
                field,
                received,
            } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: error::codes::VALIDATION_FAILED.to_string(),
                    message,
                    field,
                    received,
                    request_id,
                },
            ),
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                ApiError {
                    error: error::codes::FORBIDDEN.to_string(),
                    message,
                    field: None,
                    received: None,
                    request_id,
                },
            ),
            AppError::FixtureUnavailable(err) => {
                match err {
                    FixtureError::NotFound { ref path } => {
                        tracing::error!(path = %path.display(), "fixture not recorded");
                    }
                    FixtureError::Io { ref path, ref source } => {
                        tracing::error!(path = %path.display(), error = %source, "fixture read failed");
                    }
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: error::codes::TOOL_DATA_UNAVAILABLE.to_string(),
                        message: "Could not read tool data".to_string(),
                        field: None,
                        received: None,
                        request_id,
                    },
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: error::codes::INTERNAL_ERROR.to_string(),
                        message: "An internal error occurred".to_string(),
                        field: None,
                        received: None,
                        request_id,
                    },
                )
            }
        };

        (status, Json(api_error)).into_response()
    }
}

impl From<FixtureError> for AppError {
    fn from(err: FixtureError) -> Self {
        AppError::FixtureUnavailable(err)
    }
}
