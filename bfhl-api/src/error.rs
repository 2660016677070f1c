//! Error types for bfhl-api
//!
//! Only boundary failures become HTTP errors. Classification failures never
//! reach this type; they are reported in-band with `is_success = false`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body rejected before classification (400/415/422)
    #[error("Invalid request body: {message}")]
    Validation { status: StatusCode, message: String },

    /// Unknown route (404)
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Validation { status, message } => {
                let code = if status == StatusCode::UNPROCESSABLE_ENTITY {
                    "VALIDATION_ERROR"
                } else if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
                    "UNSUPPORTED_MEDIA_TYPE"
                } else {
                    "BAD_REQUEST"
                };
                (status, code, message)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
