//! Error types for media store operations

use aws_sdk_s3::error::SdkError;
use thiserror::Error;

/// Result type for media store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while presigning, listing or rendering
#[derive(Error, Debug)]
pub enum StoreError {
    /// Bad or missing caller input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// S3 service or SDK error
    #[error("S3 backend error: {0}")]
    Backend(String),

    /// Upstream service error (5xx from S3)
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Template registration or rendering error
    #[error("Template error: {0}")]
    Template(String),
}

impl<E> From<SdkError<E>> for StoreError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: SdkError<E>) -> Self {
        match &error {
            SdkError::ServiceError(service_err) if service_err.raw().status().as_u16() >= 500 => {
                Self::Upstream(error.to_string())
            }
            _ => Self::Backend(error.to_string()),
        }
    }
}
