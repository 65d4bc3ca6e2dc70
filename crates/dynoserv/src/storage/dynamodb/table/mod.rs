//! Table provisioning for the DynamoDB backend.
//!
//! Planning is pure ([`planning`]); applying a plan talks to DynamoDB
//! ([`deploy`]).

mod deploy;
mod planning;

pub use deploy::{
    create_table, delete_table, describe_table, execute_deploy_plan, execute_destroy_plan,
    wait_for_table_active,
};
pub use planning::{
    calculate_deploy_plan, calculate_destroy_plan, format_deploy_plan, format_destroy_plan,
    DeployPlan, DestroyPlan, TableState, TableStatus,
};

use crate::config::Config;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub hash_key: KeyAttribute,
    pub range_key: Option<KeyAttribute>,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types usable in a key.
///
/// Key values written through the service must have the declared type;
/// DynamoDB rejects a number id on a string-keyed table and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeType {
    #[default]
    String,
    Number,
}

impl AttributeType {
    /// The DynamoDB type descriptor (`S` or `N`).
    pub fn code(self) -> &'static str {
        match self {
            AttributeType::String => "S",
            AttributeType::Number => "N",
        }
    }
}

impl KeyAttribute {
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String)
    }
}

impl TableConfig {
    pub fn new(table_name: impl Into<String>, hash_key: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            hash_key: KeyAttribute::string(hash_key),
            range_key: None,
        }
    }

    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Adds a string range key.
    pub fn with_range_key(mut self, name: impl Into<String>) -> Self {
        self.range_key = Some(KeyAttribute::string(name));
        self
    }

    pub fn with_hash_key_type(mut self, attribute_type: AttributeType) -> Self {
        self.hash_key.attribute_type = attribute_type;
        self
    }

    /// Sets the range key type. No effect on a hash-only table.
    pub fn with_range_key_type(mut self, attribute_type: AttributeType) -> Self {
        if let Some(range) = &mut self.range_key {
            range.attribute_type = attribute_type;
        }
        self
    }

    /// Table layout matching the service configuration.
    pub fn from_config(config: &Config) -> Self {
        let table = Self::new(&config.table_name, &config.id_field);
        match &config.range_key {
            Some(range) => table.with_range_key(range),
            None => table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_key_fields() {
        let config = Config {
            table_name: "notes".to_string(),
            id_field: "noteId".to_string(),
            range_key: Some("createdAt".to_string()),
            ..Config::default()
        };

        let table = TableConfig::from_config(&config);

        assert_eq!(table.table_name, "notes");
        assert_eq!(table.hash_key, KeyAttribute::string("noteId"));
        assert_eq!(table.range_key, Some(KeyAttribute::string("createdAt")));
    }

    #[test]
    fn test_key_types_are_configurable() {
        let table = TableConfig::new("events", "id")
            .with_hash_key_type(AttributeType::Number)
            .with_range_key("at")
            .with_range_key_type(AttributeType::Number);

        assert_eq!(table.hash_key, KeyAttribute::new("id", AttributeType::Number));
        assert_eq!(
            table.range_key,
            Some(KeyAttribute::new("at", AttributeType::Number))
        );
        assert_eq!(AttributeType::Number.code(), "N");
        assert_eq!(AttributeType::String.code(), "S");
    }

    #[test]
    fn test_range_key_type_needs_range_key() {
        let table = TableConfig::new("items", "id").with_range_key_type(AttributeType::Number);
        assert!(table.range_key.is_none());
    }

    #[test]
    fn test_with_table_name_overrides_name() {
        let table = TableConfig::new("a", "id").with_table_name("b");
        assert_eq!(table.table_name, "b");
        assert!(table.range_key.is_none());
    }
}
