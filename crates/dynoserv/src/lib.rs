//! CRUD services over a hash/range-key store.
//!
//! [`DynamoService`] implements [`dynoserv_core::service::Service`] on top of
//! any [`dynoserv_core::storage::Store`]. Backends live in [`storage`] and are
//! selected with feature flags:
//!
//! - `dynamodb` (default): AWS DynamoDB via `aws-sdk-dynamodb`
//! - `inmemory` (default): ordered in-memory store, used by tests
//!
//! # Example
//!
//! ```rust,ignore
//! use dynoserv::{Config, DynamoService, ServiceRegistry};
//! use dynoserv::storage::dynamodb::DynamoDbStore;
//!
//! let config = Config::from_env();
//! let store = DynamoDbStore::from_config(&config).await;
//! let mut registry = ServiceRegistry::new();
//! registry.mount("people", DynamoService::new(store, config.service_options())?);
//! ```

pub mod config;
pub mod events;
pub mod registry;
pub mod service;
pub mod storage;

pub use config::Config;
pub use events::EventBus;
pub use registry::ServiceRegistry;
pub use service::DynamoService;
