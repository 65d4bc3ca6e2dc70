use thiserror::Error;

use crate::projection::ProjectionError;
use crate::storage::StoreError;

/// Errors returned by service methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service was set up with unusable options. Never retried.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ProjectionError> for ServiceError {
    fn from(err: ProjectionError) -> Self {
        match err {
            ProjectionError::InvalidConfiguration(msg) => Self::InvalidConfiguration(msg),
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
