use std::env;

use dynoserv_core::projection::DEFAULT_ID_FIELD;
use dynoserv_core::record::KeySchema;
use dynoserv_core::service::{Paginate, ServiceOptions};

/// Service and AWS configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table name (default: "dynoserv")
    pub table_name: String,
    /// Hash-key attribute (default: "id")
    pub id_field: String,
    /// Range-key attribute, if the table has one
    pub range_key: Option<String>,
    /// Page size for `find` when pagination is enabled
    pub paginate_default: Option<usize>,
    /// Maximum page size for `find`
    pub paginate_max: Option<usize>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom endpoint URL, e.g. a local DynamoDB
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "dynoserv")
    /// - `DYNAMODB_ID_FIELD` - Hash-key attribute (default: "id")
    /// - `DYNAMODB_RANGE_KEY` - Range-key attribute (optional)
    /// - `DYNAMODB_PAGINATE_DEFAULT` - Default page size (optional)
    /// - `DYNAMODB_PAGINATE_MAX` - Maximum page size (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint (optional)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            table_name: var("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "dynoserv".to_string()),
            id_field: var("DYNAMODB_ID_FIELD").unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()),
            range_key: var("DYNAMODB_RANGE_KEY"),
            paginate_default: var("DYNAMODB_PAGINATE_DEFAULT").and_then(|v| v.parse().ok()),
            paginate_max: var("DYNAMODB_PAGINATE_MAX").and_then(|v| v.parse().ok()),
            region: var("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: var("AWS_ENDPOINT_URL"),
        }
    }

    /// Options for a service over the configured table.
    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            id: self.id_field.clone(),
            range_key: self.range_key.clone(),
            events: Vec::new(),
            paginate: Paginate {
                default: self.paginate_default,
                max: self.paginate_max,
            },
        }
    }

    pub fn key_schema(&self) -> KeySchema {
        KeySchema::new(&self.id_field, self.range_key.clone())
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
