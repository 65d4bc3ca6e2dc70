use async_trait::async_trait;

use crate::record::{Key, KeySchema, Record};

use super::{GetOptions, Result, ScanOptions};

/// The capability surface a storage backend provides to the service layer.
///
/// Backends forward calls to the underlying store and surface its failures
/// unchanged; they never retry.
#[async_trait]
pub trait Store: Send + Sync {
    /// The key attributes of the table behind this store.
    fn key_schema(&self) -> &KeySchema;

    /// Gets an item by key, restricted to the projected attributes.
    async fn get(&self, key: &Key, options: &GetOptions) -> Result<Option<Record>>;

    /// Writes an item, replacing any existing item with the same key.
    async fn put(&self, record: Record) -> Result<Record>;

    /// Merges `changes` into an existing item and returns the new item.
    ///
    /// Returns `None` without writing if no item exists under `key`.
    async fn update(&self, key: &Key, changes: Record) -> Result<Option<Record>>;

    /// Deletes an item and returns it as it was before deletion.
    async fn delete(&self, key: &Key) -> Result<Option<Record>>;

    /// Reads every item in the table that passes the scan filters.
    async fn scan_all(&self, options: &ScanOptions) -> Result<Vec<Record>>;
}
