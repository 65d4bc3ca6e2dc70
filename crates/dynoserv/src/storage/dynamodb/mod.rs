//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the [`Store`]
//! trait using `aws-sdk-dynamodb`, plus the table lifecycle helpers used to
//! provision a table for it.
//!
//! [`Store`]: dynoserv_core::storage::Store

mod client;
mod conversions;
mod error;
mod expressions;
mod store;
pub mod table;

pub use client::create_client;
pub use error::{Result, TableError};
pub use store::DynamoDbStore;
