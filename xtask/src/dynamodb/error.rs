//! Error types for DynamoDB commands.

use dynoserv::storage::dynamodb::TableError;
use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Operation cancelled by user")]
    UserCancelled,
}
