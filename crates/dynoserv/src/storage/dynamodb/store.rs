//! DynamoDB store implementation.
//!
//! Implements the [`Store`] trait from `dynoserv_core::storage` over a single
//! table.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use dynoserv_core::record::{Key, KeySchema, Record};
use dynoserv_core::storage::{GetOptions, Result, ScanOptions, Store, StoreError};

use super::client::create_client;
use super::conversions::{item_to_record, key_to_item, record_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use super::expressions::{filter_expression, item_exists_condition, merge_names, update_expression};
use crate::config::Config;

/// DynamoDB-based store over one table.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    schema: KeySchema,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client, table and key schema.
    pub fn new(client: Client, table_name: impl Into<String>, schema: KeySchema) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            schema,
        }
    }

    /// Creates a new store from configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config).await;
        Self::new(client, &config.table_name, config.key_schema())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn failed(&self, operation: &'static str, err: StoreError) -> StoreError {
        tracing::warn!(table = %self.table_name, operation, error = %err, "DynamoDB request failed");
        err
    }
}

#[async_trait]
impl Store for DynamoDbStore {
    fn key_schema(&self) -> &KeySchema {
        &self.schema
    }

    async fn get(&self, key: &Key, options: &GetOptions) -> Result<Option<Record>> {
        tracing::debug!(
            table = %self.table_name,
            projection = ?options.projection,
            "GetItem"
        );

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .set_projection_expression(options.projection.projection_expression.clone())
            .set_expression_attribute_names(options.projection.expression_attribute_names.clone())
            .send()
            .await
            .map_err(|e| self.failed("GetItem", map_get_item_error(e)))?;

        result.item.as_ref().map(item_to_record).transpose()
    }

    async fn put(&self, record: Record) -> Result<Record> {
        if self.schema.key_of(&record).is_none() {
            return Err(StoreError::InvalidData(format!(
                "Item is missing key attribute '{}'",
                self.schema.hash_key
            )));
        }

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(&record)))
            .send()
            .await
            .map_err(|e| self.failed("PutItem", map_put_item_error(e)))?;

        Ok(record)
    }

    async fn update(&self, key: &Key, changes: Record) -> Result<Option<Record>> {
        let Some(update) = update_expression(key, &changes) else {
            return self.get(key, &GetOptions::default()).await;
        };

        tracing::debug!(
            table = %self.table_name,
            expression = %update.expression,
            "UpdateItem"
        );

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .update_expression(update.expression)
            .condition_expression(item_exists_condition())
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values((!update.values.is_empty()).then_some(update.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output.attributes.as_ref().map(item_to_record).transpose(),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                Ok(None)
            }
            Err(err) => Err(self.failed("UpdateItem", map_update_item_error(err))),
        }
    }

    async fn delete(&self, key: &Key) -> Result<Option<Record>> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| self.failed("DeleteItem", map_delete_item_error(e)))?;

        result.attributes.as_ref().map(item_to_record).transpose()
    }

    async fn scan_all(&self, options: &ScanOptions) -> Result<Vec<Record>> {
        let filter = filter_expression(&options.filters);
        let names = merge_names(
            options.projection.expression_attribute_names.as_ref(),
            filter.as_ref().map(|f| &f.names),
        );
        let (filter_expression, values) = match filter {
            Some(filter) => (Some(filter.expression), Some(filter.values)),
            None => (None, None),
        };

        tracing::debug!(
            table = %self.table_name,
            projection = ?options.projection.projection_expression,
            filter = ?filter_expression,
            "Scan"
        );

        let mut records = Vec::new();
        let mut exclusive_start_key = None;
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_projection_expression(options.projection.projection_expression.clone())
                .set_filter_expression(filter_expression.clone())
                .set_expression_attribute_names(names.clone())
                .set_expression_attribute_values(values.clone())
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(|e| self.failed("Scan", map_scan_error(e)))?;

            for item in result.items.as_deref().unwrap_or_default() {
                records.push(item_to_record(item)?);
            }

            exclusive_start_key = result.last_evaluated_key;
            if exclusive_start_key.is_none() {
                break;
            }
        }

        Ok(records)
    }
}
