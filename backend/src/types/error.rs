//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use media_store::StoreError;
use schemars::JsonSchema;
use serde::Serialize;

/// JSON error body returned to clients
#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Application error type that wraps the error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    body: ErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: message.into(),
            },
        }
    }

    /// 400 with a caller-facing message
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {}", self.body.error),
            500..=599 => tracing::error!("Server error: {}", self.body.error),
            _ => {}
        }

        (self.status, Json(self.body)).into_response()
    }
}

/// Convert store errors to application errors.
///
/// Validation failures keep their message; everything else is logged in full
/// and collapsed to a generic body so raw SDK internals never leak to the
/// caller.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::Validation(msg) => Self::bad_request(msg.clone()),
            StoreError::Upstream(msg) => {
                tracing::error!("S3 upstream error: {msg}");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "internal error")
            }
            StoreError::Backend(msg) | StoreError::Template(msg) => {
                tracing::error!("S3 backend error: {msg}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
            StoreError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ErrorResponse>::operation_response(ctx, operation)
    }
}
