//! Error handling
//!
//! The application's error taxonomy and its conversion to HTTP responses.
//! Store-originated failures are caught at the point of the call and logged;
//! nothing here is allowed to take down the rendering loop.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::config::environment::ConfigError;
use crate::store::client::StoreError;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing environment identifiers. Fatal at startup; the shell renders
    /// the fixed configuration-error page instead of connecting.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Live-feed failure. The board falls back to empty/stale; no reconnect.
    #[error("Subscription error: {0}")]
    Subscription(String),

    /// A create or update against the store failed. The page state is left
    /// untouched so the user can retry.
    #[error("Write error: {0}")]
    Write(#[from] StoreError),

    /// A required intake field is missing. Blocks the write entirely.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Error envelope for the API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Configuration(e) => {
                error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Configuration Error".to_string(),
                        message: e.to_string(),
                        code: Some("CONFIG_ERROR".to_string()),
                    },
                )
            }

            AppError::Subscription(msg) => {
                error!("Subscription error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Subscription Error".to_string(),
                        message: msg,
                        code: Some("SUBSCRIPTION_ERROR".to_string()),
                    },
                )
            }

            AppError::Write(e) => {
                error!("Write error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Write Error".to_string(),
                        message: "The document store did not accept the write".to_string(),
                        code: Some("WRITE_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                error!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Typed result for fallible operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("customer_name", validator::ValidationError::new("length"));

        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn write_errors_map_to_bad_gateway() {
        let err = AppError::Write(StoreError::Rejected(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
