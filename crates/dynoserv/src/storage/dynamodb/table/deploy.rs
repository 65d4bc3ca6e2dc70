//! Table lifecycle operations against DynamoDB.

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use super::planning::{DeployPlan, DestroyPlan, TableState, TableStatus};
use super::{AttributeType, KeyAttribute, TableConfig};
use crate::storage::dynamodb::error::{map_table_error, Result, TableError};

const ACTIVATION_ATTEMPTS: usize = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Fetches current table state, returns None if the table doesn't exist.
pub async fn describe_table(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let Some(table) = response.table() else {
                return Ok(None);
            };

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            Ok(Some(TableState { status }))
        }
        Err(err)
            if err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception()) =>
        {
            Ok(None)
        }
        Err(err) => Err(map_table_error(err)),
    }
}

/// Execute a deploy plan, waiting for a new table to become active.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await?;
        }
        DeployPlan::NoChanges { .. } => {}
    }
    Ok(())
}

pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => delete_table(client, table_name).await,
        DestroyPlan::AlreadyGone { .. } => Ok(()),
    }
}

pub async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let mut key_schema = vec![key_element(&config.hash_key, KeyType::Hash)?];
    let mut attribute_definitions = vec![attribute_definition(&config.hash_key)?];

    if let Some(range) = &config.range_key {
        key_schema.push(key_element(range, KeyType::Range)?);
        attribute_definitions.push(attribute_definition(range)?);
    }

    client
        .create_table()
        .table_name(&config.table_name)
        .set_key_schema(Some(key_schema))
        .set_attribute_definitions(Some(attribute_definitions))
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(map_table_error)?;

    tracing::info!(table = %config.table_name, "Created DynamoDB table");
    Ok(())
}

pub async fn delete_table(client: &Client, table_name: &str) -> Result<()> {
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(map_table_error)?;

    tracing::info!(table = %table_name, "Deleted DynamoDB table");
    Ok(())
}

/// Polls until the table reports ACTIVE, giving up after two minutes.
pub async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_ATTEMPTS {
        if let Some(state) = describe_table(client, table_name).await? {
            if state.status == TableStatus::Active {
                return Ok(());
            }
        }
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(TableError::TableActivationTimeout)
}

fn key_element(attribute: &KeyAttribute, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(&attribute.name)
        .key_type(key_type)
        .build()
        .map_err(map_table_error)
}

fn attribute_definition(attribute: &KeyAttribute) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(&attribute.name)
        .attribute_type(to_scalar_type(attribute.attribute_type))
        .build()
        .map_err(map_table_error)
}

fn to_scalar_type(attr_type: AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
        AttributeType::Number => ScalarAttributeType::N,
    }
}
