//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dynoserv_core::projection::{TranslationResult, FIELD_SEPARATOR};
use dynoserv_core::record::{Key, KeySchema, Record};
use dynoserv_core::storage::{GetOptions, Result, ScanOptions, Store, StoreError};

/// In-memory storage backend for testing.
///
/// Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    schema: KeySchema,
    items: Arc<RwLock<BTreeMap<String, Record>>>,
}

impl InMemoryStore {
    /// Creates a new empty store for a table with the given key schema.
    pub fn new(schema: KeySchema) -> Self {
        Self {
            schema,
            items: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    fn storage_key(key: &Key) -> Result<String> {
        let range = key.range.as_ref().map(|(_, value)| value);
        serde_json::to_string(&(&key.hash_value, range))
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn key_of(&self, record: &Record) -> Result<Key> {
        self.schema.key_of(record).ok_or_else(|| {
            StoreError::InvalidData(format!(
                "Item is missing key attribute '{}'",
                self.schema.hash_key
            ))
        })
    }
}

/// Applies a projection the way DynamoDB does: only the named attributes
/// that exist on the item are returned.
///
/// Uses the resolved attribute list when the caller supplies one. Otherwise
/// the expression is split on the field separator, which cannot recover
/// names that themselves contain it.
fn project(record: &Record, projection: &TranslationResult, attributes: &[String]) -> Record {
    let Some(expression) = &projection.projection_expression else {
        return record.clone();
    };

    let fields: Vec<&str> = if attributes.is_empty() {
        expression
            .split(FIELD_SEPARATOR)
            .map(|token| {
                projection
                    .expression_attribute_names
                    .as_ref()
                    .and_then(|names| names.get(token))
                    .map(String::as_str)
                    .unwrap_or(token)
            })
            .collect()
    } else {
        attributes.iter().map(String::as_str).collect()
    };

    fields
        .into_iter()
        .filter_map(|field| record.get(field).map(|v| (field.to_string(), v.clone())))
        .collect()
}

#[async_trait]
impl Store for InMemoryStore {
    fn key_schema(&self) -> &KeySchema {
        &self.schema
    }

    async fn get(&self, key: &Key, options: &GetOptions) -> Result<Option<Record>> {
        let storage_key = Self::storage_key(key)?;
        let items = self.items.read().await;
        Ok(items
            .get(&storage_key)
            .map(|record| project(record, &options.projection, &options.attributes)))
    }

    async fn put(&self, record: Record) -> Result<Record> {
        let storage_key = Self::storage_key(&self.key_of(&record)?)?;
        let mut items = self.items.write().await;
        items.insert(storage_key, record.clone());
        Ok(record)
    }

    async fn update(&self, key: &Key, changes: Record) -> Result<Option<Record>> {
        let storage_key = Self::storage_key(key)?;
        let mut items = self.items.write().await;
        let Some(existing) = items.get_mut(&storage_key) else {
            return Ok(None);
        };

        for (field, value) in changes {
            if key.fields().any(|k| k == field) {
                continue;
            }
            if value.is_null() {
                existing.remove(&field);
            } else {
                existing.insert(field, value);
            }
        }
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, key: &Key) -> Result<Option<Record>> {
        let storage_key = Self::storage_key(key)?;
        let mut items = self.items.write().await;
        Ok(items.remove(&storage_key))
    }

    async fn scan_all(&self, options: &ScanOptions) -> Result<Vec<Record>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|record| options.accepts(record))
            .map(|record| project(record, &options.projection, &options.attributes))
            .collect())
    }
}
