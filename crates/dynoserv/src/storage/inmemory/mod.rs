//! In-memory storage backend for testing.
//!
//! Items are kept in a `BTreeMap` behind `Arc<RwLock<_>>`, ordered by key,
//! so scans are deterministic. Projection expressions are resolved against
//! the stored items, giving reads the same shape DynamoDB returns.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynoserv::storage::inmemory::InMemoryStore;
//! use dynoserv_core::record::KeySchema;
//!
//! let store = InMemoryStore::new(KeySchema::new("id", None));
//! ```

mod store;

pub use store::InMemoryStore;
