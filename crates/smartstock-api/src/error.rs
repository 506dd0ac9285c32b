//! Maps application errors and failed store results to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use smartstock_core::error::{AppError, ErrorKind};
use smartstock_core::types::ActionCode;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Message key (`ERR00x`) or human-readable message.
    pub message: String,
    /// Optional details, such as per-field validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Infrastructure or extraction error.
    #[error(transparent)]
    App(#[from] AppError),
    /// A store operation reported failure.
    #[error("{code}: {message}")]
    Action {
        /// Response status chosen by the route.
        status: StatusCode,
        /// Failure code.
        code: ActionCode,
        /// Message from the action result.
        message: String,
    },
    /// Structural validation of the request body failed.
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    /// A failed store result answered with `status`.
    pub fn action(status: StatusCode, code: ActionCode, message: impl Into<String>) -> Self {
        Self::Action {
            status,
            code,
            message: message.into(),
        }
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation | ErrorKind::Serialization => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Storage
        | ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::App(err) => {
                let status = status_for(err.kind);
                if status.is_server_error() {
                    tracing::error!(error = %err, "Internal server error");
                }
                let body = ApiErrorResponse {
                    error: err.kind.to_string(),
                    message: err.message,
                    details: None,
                };
                (status, body)
            }
            Self::Action {
                status,
                code,
                message,
            } => {
                let body = ApiErrorResponse {
                    error: code.as_str().to_string(),
                    message,
                    details: None,
                };
                (status, body)
            }
            Self::Validation(errors) => {
                let body = ApiErrorResponse {
                    error: ErrorKind::Validation.to_string(),
                    message: "Request validation failed".to_string(),
                    details: serde_json::to_value(&errors).ok(),
                };
                (StatusCode::BAD_REQUEST, body)
            }
        };

        (status, Json(body)).into_response()
    }
}
