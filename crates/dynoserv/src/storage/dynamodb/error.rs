//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `dynoserv_core::storage`, and
//! defines the error type for table lifecycle operations.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use dynoserv_core::storage::StoreError;
use thiserror::Error;

/// Errors that can occur during table lifecycle operations.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,
}

/// Result type alias for table lifecycle operations.
pub type Result<T> = std::result::Result<T, TableError>;

fn throughput_exceeded() -> StoreError {
    StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
}

fn request_limit_exceeded() -> StoreError {
    StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
}

fn internal_server_error() -> StoreError {
    StoreError::QueryFailed("DynamoDB internal server error".to_string())
}

fn table_not_found() -> StoreError {
    StoreError::QueryFailed("Table not found".to_string())
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => map_connection_error(format!("{:?}", e)),
        err => match err.into_service_error() {
            GetItemError::ResourceNotFoundException(_) => table_not_found(),
            GetItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
            GetItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
            GetItemError::InternalServerError(_) => internal_server_error(),
            err => StoreError::QueryFailed(format!("GetItem failed: {:?}", err)),
        },
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => map_connection_error(format!("{:?}", e)),
        err => match err.into_service_error() {
            PutItemError::ResourceNotFoundException(_) => table_not_found(),
            PutItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
            PutItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
            PutItemError::ItemCollectionSizeLimitExceededException(_) => {
                StoreError::QueryFailed("Item collection size limit exceeded".to_string())
            }
            PutItemError::TransactionConflictException(_) => {
                StoreError::QueryFailed("Transaction conflict, please retry".to_string())
            }
            PutItemError::InternalServerError(_) => internal_server_error(),
            err => StoreError::QueryFailed(format!("PutItem failed: {:?}", err)),
        },
    }
}

/// Map an UpdateItem SDK error to StoreError.
///
/// Conditional check failures mean the item does not exist; callers handle
/// them before mapping.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => map_connection_error(format!("{:?}", e)),
        err => match err.into_service_error() {
            UpdateItemError::ResourceNotFoundException(_) => table_not_found(),
            UpdateItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
            UpdateItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
            UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
                StoreError::QueryFailed("Item collection size limit exceeded".to_string())
            }
            UpdateItemError::TransactionConflictException(_) => {
                StoreError::QueryFailed("Transaction conflict, please retry".to_string())
            }
            UpdateItemError::InternalServerError(_) => internal_server_error(),
            err => StoreError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
        },
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => map_connection_error(format!("{:?}", e)),
        err => match err.into_service_error() {
            DeleteItemError::ResourceNotFoundException(_) => table_not_found(),
            DeleteItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
            DeleteItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
            DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
                StoreError::QueryFailed("Item collection size limit exceeded".to_string())
            }
            DeleteItemError::TransactionConflictException(_) => {
                StoreError::QueryFailed("Transaction conflict, please retry".to_string())
            }
            DeleteItemError::InternalServerError(_) => internal_server_error(),
            err => StoreError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
        },
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => map_connection_error(format!("{:?}", e)),
        err => match err.into_service_error() {
            ScanError::ResourceNotFoundException(_) => table_not_found(),
            ScanError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
            ScanError::RequestLimitExceeded(_) => request_limit_exceeded(),
            ScanError::InternalServerError(_) => internal_server_error(),
            err => StoreError::QueryFailed(format!("Scan failed: {:?}", err)),
        },
    }
}

/// Map a generic connection/config error to StoreError.
pub fn map_connection_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::ConnectionFailed(err.to_string())
}

/// Map any SDK error from a table lifecycle call to TableError.
pub fn map_table_error(err: impl std::fmt::Display) -> TableError {
    TableError::AwsSdk(err.to_string())
}
