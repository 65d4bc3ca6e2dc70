//! Builders for DynamoDB update, condition and filter expressions.
//!
//! Every attribute name is referenced through a positional placeholder so
//! user field names never collide with reserved words. Pure functions.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use dynoserv_core::record::{Key, Record};

use super::conversions::value_to_attribute;

/// An expression with its attribute name and value tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Builds the `UpdateExpression` for merging `changes` into an item.
///
/// Key attributes are skipped. Null values remove the attribute. The hash
/// key is bound to `#k0` for use by [`item_exists_condition`]. Returns `None`
/// when `changes` has nothing besides key attributes.
pub fn update_expression(key: &Key, changes: &Record) -> Option<Expression> {
    let mut names = HashMap::from([("#k0".to_string(), key.hash_field.clone())]);
    let mut values = HashMap::new();
    let mut set = Vec::new();
    let mut remove = Vec::new();

    let attributes = changes
        .iter()
        .filter(|(field, _)| !key.fields().any(|k| k == field.as_str()));

    for (n, (field, value)) in attributes.enumerate() {
        let name = format!("#u{n}");
        names.insert(name.clone(), field.clone());
        if value.is_null() {
            remove.push(name);
        } else {
            let placeholder = format!(":u{n}");
            set.push(format!("{name} = {placeholder}"));
            values.insert(placeholder, value_to_attribute(value));
        }
    }

    if set.is_empty() && remove.is_empty() {
        return None;
    }

    let mut clauses = Vec::new();
    if !set.is_empty() {
        clauses.push(format!("SET {}", set.join(", ")));
    }
    if !remove.is_empty() {
        clauses.push(format!("REMOVE {}", remove.join(", ")));
    }

    Some(Expression {
        expression: clauses.join(" "),
        names,
        values,
    })
}

/// Condition requiring the item addressed by the update key to exist.
pub fn item_exists_condition() -> &'static str {
    "attribute_exists(#k0)"
}

/// Builds a `FilterExpression` requiring each attribute to equal its value.
///
/// Returns `None` for no filters.
pub fn filter_expression(filters: &Record) -> Option<Expression> {
    if filters.is_empty() {
        return None;
    }

    let mut names = HashMap::new();
    let mut values = HashMap::new();
    let conditions: Vec<String> = filters
        .iter()
        .enumerate()
        .map(|(n, (field, value))| {
            let name = format!("#f{n}");
            let placeholder = format!(":f{n}");
            names.insert(name.clone(), field.clone());
            values.insert(placeholder.clone(), value_to_attribute(value));
            format!("{name} = {placeholder}")
        })
        .collect();

    Some(Expression {
        expression: conditions.join(" AND "),
        names,
        values,
    })
}

/// Merges attribute-name tables, keeping the result absent when empty.
pub fn merge_names(
    projection: Option<&HashMap<String, String>>,
    other: Option<&HashMap<String, String>>,
) -> Option<HashMap<String, String>> {
    let merged: HashMap<String, String> = projection
        .into_iter()
        .chain(other)
        .flat_map(|names| names.iter().map(|(k, v)| (k.clone(), v.clone())))
        .collect();
    (!merged.is_empty()).then_some(merged)
}
