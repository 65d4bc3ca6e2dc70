use thiserror::Error;

/// Errors raised while setting up projection translation.
///
/// These are caller or configuration bugs, never per-request conditions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
