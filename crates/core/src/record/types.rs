use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored item: attribute name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// Identifier passed to a service method.
///
/// Tables with only a hash key are addressed by [`Id::Hash`]; tables with a
/// range key need both parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Composite { hash: Value, range: Value },
    Hash(Value),
}

impl Id {
    /// The hash-key part of the identifier.
    pub fn hash(&self) -> &Value {
        match self {
            Self::Hash(hash) | Self::Composite { hash, .. } => hash,
        }
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Hash(Value::String(value.to_string()))
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::Hash(Value::String(value))
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Hash(Value::from(value))
    }
}

impl From<Value> for Id {
    fn from(value: Value) -> Self {
        Self::Hash(value)
    }
}

/// A fully resolved store key: attribute names and their values.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub hash_field: String,
    pub hash_value: Value,
    pub range: Option<(String, Value)>,
}

impl Key {
    /// Creates a key for a table without a range key.
    pub fn hash(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            hash_field: field.into(),
            hash_value: value.into(),
            range: None,
        }
    }

    /// Adds a range-key component.
    pub fn with_range(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.range = Some((field.into(), value.into()));
        self
    }

    /// Names of the key attributes, hash first.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.hash_field.as_str())
            .chain(self.range.as_ref().map(|(field, _)| field.as_str()))
    }

    /// The key as a record containing only key attributes.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert(self.hash_field.clone(), self.hash_value.clone());
        if let Some((field, value)) = &self.range {
            record.insert(field.clone(), value.clone());
        }
        record
    }

    /// Returns true if `record` carries exactly this key.
    pub fn matches(&self, record: &Record) -> bool {
        record.get(&self.hash_field) == Some(&self.hash_value)
            && self
                .range
                .as_ref()
                .is_none_or(|(field, value)| record.get(field) == Some(value))
    }
}

/// The key attributes configured for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    pub hash_key: String,
    pub range_key: Option<String>,
}

impl KeySchema {
    pub fn new(hash_key: impl Into<String>, range_key: Option<String>) -> Self {
        Self {
            hash_key: hash_key.into(),
            range_key,
        }
    }

    /// Resolves a service identifier into a store key.
    ///
    /// Returns `None` when the identifier shape does not match the schema:
    /// a composite id for a hash-only table, or a bare hash id for a table
    /// with a range key.
    pub fn key_for(&self, id: &Id) -> Option<Key> {
        match (id, &self.range_key) {
            (Id::Hash(hash), None) => Some(Key::hash(&self.hash_key, hash.clone())),
            (Id::Composite { hash, range }, Some(range_key)) => {
                Some(Key::hash(&self.hash_key, hash.clone()).with_range(range_key, range.clone()))
            }
            _ => None,
        }
    }

    /// Extracts the key from a stored record, if every key attribute is set.
    pub fn key_of(&self, record: &Record) -> Option<Key> {
        let key = Key::hash(&self.hash_key, record.get(&self.hash_key)?.clone());
        match &self.range_key {
            Some(range_key) => Some(key.with_range(range_key, record.get(range_key)?.clone())),
            None => Some(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_id_deserializes_hash_and_composite() {
        let hash: Id = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(hash, Id::from("abc"));

        let composite: Id = serde_json::from_value(json!({ "hash": "a", "range": 2 })).unwrap();
        assert_eq!(
            composite,
            Id::Composite {
                hash: json!("a"),
                range: json!(2)
            }
        );
        assert_eq!(composite.hash(), &json!("a"));
    }

    #[test]
    fn test_key_for_hash_only_schema() {
        let schema = KeySchema::new("id", None);

        assert_eq!(schema.key_for(&Id::from("1")), Some(Key::hash("id", "1")));
        assert_eq!(
            schema.key_for(&Id::Composite {
                hash: json!("1"),
                range: json!("x")
            }),
            None
        );
    }

    #[test]
    fn test_key_for_range_schema() {
        let schema = KeySchema::new("id", Some("createdAt".to_string()));
        let id = Id::Composite {
            hash: json!("1"),
            range: json!("2024-01-01"),
        };

        assert_eq!(
            schema.key_for(&id),
            Some(Key::hash("id", "1").with_range("createdAt", "2024-01-01"))
        );
        assert_eq!(schema.key_for(&Id::from("1")), None);
    }

    #[test]
    fn test_key_of_requires_all_key_attributes() {
        let schema = KeySchema::new("id", Some("sk".to_string()));

        assert_eq!(schema.key_of(&record(json!({ "id": "1" }))), None);
        assert_eq!(
            schema.key_of(&record(json!({ "id": "1", "sk": 3, "name": "x" }))),
            Some(Key::hash("id", "1").with_range("sk", 3))
        );
    }

    #[test]
    fn test_key_matches_and_to_record() {
        let key = Key::hash("id", "1").with_range("sk", "a");

        assert!(key.matches(&record(json!({ "id": "1", "sk": "a", "x": true }))));
        assert!(!key.matches(&record(json!({ "id": "1", "sk": "b" }))));
        assert!(!key.matches(&record(json!({ "id": "2", "sk": "a" }))));
        assert_eq!(key.to_record(), record(json!({ "id": "1", "sk": "a" })));
        assert_eq!(key.fields().collect::<Vec<_>>(), vec!["id", "sk"]);
    }
}
