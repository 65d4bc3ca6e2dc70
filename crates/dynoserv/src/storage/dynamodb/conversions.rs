//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB `AttributeValue` maps and
//! JSON records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use dynoserv_core::record::{Key, Record};
use dynoserv_core::storage::StoreError;
use serde_json::{Number, Value};

/// A DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

/// Convert a JSON value to a DynamoDB attribute.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(record_to_item(map)),
    }
}

/// Convert a DynamoDB attribute to a JSON value.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, StoreError> {
    match attribute {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => item_to_record(map).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(StoreError::InvalidData(
            "Binary attributes are not supported".to_string(),
        )),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute value: {:?}",
            other
        ))),
    }
}

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> Item {
    record
        .iter()
        .map(|(k, v)| (k.clone(), value_to_attribute(v)))
        .collect()
}

/// Convert a DynamoDB item to a record.
pub fn item_to_record(item: &Item) -> Result<Record, StoreError> {
    item.iter()
        .map(|(k, v)| attribute_to_value(v).map(|value| (k.clone(), value)))
        .collect()
}

/// Convert a store key to the DynamoDB key map.
pub fn key_to_item(key: &Key) -> Item {
    record_to_item(&key.to_record())
}

/// Parses a DynamoDB number. Integers outside the 64-bit range and
/// decimals an `f64` cannot hold exactly are rejected rather than rounded.
fn parse_number(n: &str) -> Result<Number, StoreError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Number::from(u));
    }

    let invalid = || StoreError::InvalidData(format!("Invalid number: {}", n));
    let expected = decimal_parts(n).ok_or_else(invalid)?;
    let float = n.parse::<f64>().map_err(|_| invalid())?;
    if decimal_parts(&float.to_string()) != Some(expected) {
        return Err(StoreError::InvalidData(format!(
            "Number {} cannot be represented without losing precision",
            n
        )));
    }
    Number::from_f64(float).ok_or_else(invalid)
}

/// Normalises a decimal string to `(negative, significant digits, exponent)`
/// so that `0.<digits> * 10^exponent` equals its value. Zero has no digits.
fn decimal_parts(n: &str) -> Option<(bool, String, i64)> {
    let (negative, unsigned) = match n.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, n.strip_prefix('+').unwrap_or(n)),
    };
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int}{frac}");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let without_leading = digits.trim_start_matches('0');
    let leading = (digits.len() - without_leading.len()) as i64;
    let significant = without_leading.trim_end_matches('0');
    if significant.is_empty() {
        return Some((false, String::new(), 0));
    }

    Some((
        negative,
        significant.to_string(),
        exponent + int.len() as i64 - leading,
    ))
}
