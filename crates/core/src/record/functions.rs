//! Pure record helpers used by the service layer.

use serde_json::Value;

use super::{Key, Record};

/// Keeps only the attributes named in `fields`, plus `id_field`.
///
/// Attributes missing from `record` are skipped rather than set to null.
pub fn pick(record: &Record, fields: &[String], id_field: &str) -> Record {
    let mut out: Record = fields
        .iter()
        .filter_map(|field| record.get(field).map(|v| (field.clone(), v.clone())))
        .collect();
    if let Some(id) = record.get(id_field) {
        out.insert(id_field.to_string(), id.clone());
    }
    out
}

/// Returns a copy of `data` with the key attributes overwritten by `key`.
pub fn with_key(data: &Record, key: &Key) -> Record {
    let mut out = data.clone();
    out.extend(key.to_record());
    out
}

/// Sets `id_field` with a value from `generate` when it is absent or null.
///
/// Returns true if an id was generated.
pub fn ensure_id(record: &mut Record, id_field: &str, generate: impl FnOnce() -> String) -> bool {
    match record.get(id_field) {
        Some(value) if !value.is_null() => false,
        _ => {
            record.insert(id_field.to_string(), Value::String(generate()));
            true
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
    fn test_pick_keeps_selected_fields_and_id() {
        let doc = record(json!({ "id": "1", "name": "Doug", "age": 32, "created": true }));

        let picked = pick(&doc, &["name".to_string()], "id");

        assert_eq!(picked, record(json!({ "id": "1", "name": "Doug" })));
    }

    #[test]
    fn test_pick_skips_missing_fields() {
        let doc = record(json!({ "id": "1", "name": "Doug" }));

        let picked = pick(&doc, &["age".to_string()], "id");

        assert_eq!(picked, record(json!({ "id": "1" })));
    }

    #[test]
    fn test_with_key_overwrites_key_attributes() {
        let data = record(json!({ "id": "wrong", "name": "Doug" }));

        let patched = with_key(&data, &Key::hash("id", "right"));

        assert_eq!(patched, record(json!({ "id": "right", "name": "Doug" })));
    }

    #[test]
    fn test_ensure_id_generates_only_when_missing() {
        let mut missing = record(json!({ "name": "Doug" }));
        assert!(ensure_id(&mut missing, "id", || "generated".to_string()));
        assert_eq!(missing.get("id"), Some(&json!("generated")));

        let mut null = record(json!({ "id": null }));
        assert!(ensure_id(&mut null, "id", || "generated".to_string()));

        let mut present = record(json!({ "id": 7 }));
        assert!(!ensure_id(&mut present, "id", || unreachable!()));
        assert_eq!(present.get("id"), Some(&json!(7)));
    }
}
