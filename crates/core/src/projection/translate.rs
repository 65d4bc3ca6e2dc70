use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::{ProjectionError, ReservedWordSet, Result};

/// Primary key field used when none is configured.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Prefix that turns a field name into an expression attribute name.
pub const ESCAPE_MARKER: char = '#';

/// Separator between fields in a projection expression.
pub const FIELD_SEPARATOR: &str = ", ";

/// The projection properties added to an outgoing read request.
///
/// Both properties are absent rather than empty when unused: an absent
/// expression means "return every attribute", and DynamoDB rejects an empty
/// `ExpressionAttributeNames` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_attribute_names: Option<HashMap<String, String>>,
}

impl TranslationResult {
    /// Returns true when the read is not restricted to any attributes.
    pub fn is_unrestricted(&self) -> bool {
        self.projection_expression.is_none()
    }
}

/// Translates field selections for a fixed primary key and reserved-word set.
///
/// Cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct ProjectionTranslator {
    primary_key: String,
    reserved: Arc<ReservedWordSet>,
}

impl ProjectionTranslator {
    /// Creates a translator, failing if `primary_key` is empty.
    pub fn new(primary_key: impl Into<String>, reserved: Arc<ReservedWordSet>) -> Result<Self> {
        let primary_key = primary_key.into();
        validate_primary_key(&primary_key)?;
        Ok(Self {
            primary_key,
            reserved,
        })
    }

    /// Creates a translator over the DynamoDB reserved words.
    pub fn dynamodb(primary_key: impl Into<String>) -> Result<Self> {
        Self::new(primary_key, Arc::new(ReservedWordSet::dynamodb()))
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn reserved(&self) -> &ReservedWordSet {
        &self.reserved
    }

    /// Translates a selection. `None` and an empty slice both mean "no
    /// restriction".
    pub fn translate(&self, selection: Option<&[String]>) -> TranslationResult {
        build(selection.unwrap_or_default(), &self.primary_key, &self.reserved)
    }

    /// The attributes a selection projects, in expression order, with the
    /// primary key included. Empty when the selection is unrestricted.
    pub fn projected_fields(&self, selection: Option<&[String]>) -> Vec<String> {
        effective_fields(selection.unwrap_or_default(), &self.primary_key)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Translates `selection` into projection properties.
///
/// When the selection is non-empty, `primary_key` is appended unless it is
/// already present (exact, case-sensitive match). Each field whose uppercase
/// form is in `reserved` is replaced by `#<field>` and recorded in the
/// attribute-name map; other fields appear literally. Fields keep their
/// selection order.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidConfiguration`] if `primary_key` is empty.
///
/// # Examples
///
/// ```
/// use dynoserv_core::projection::{translate, ReservedWordSet};
///
/// let reserved = ReservedWordSet::from_words(["TIME", "SIZE"]);
/// let selection = vec!["name".to_string(), "Time".to_string()];
///
/// let result = translate(Some(&selection), "id", &reserved).unwrap();
///
/// assert_eq!(result.projection_expression.as_deref(), Some("name, #Time, id"));
/// assert_eq!(
///     result.expression_attribute_names.unwrap().get("#Time").map(String::as_str),
///     Some("Time")
/// );
/// ```
pub fn translate(
    selection: Option<&[String]>,
    primary_key: &str,
    reserved: &ReservedWordSet,
) -> Result<TranslationResult> {
    validate_primary_key(primary_key)?;
    Ok(build(selection.unwrap_or_default(), primary_key, reserved))
}

fn validate_primary_key(primary_key: &str) -> Result<()> {
    if primary_key.is_empty() {
        return Err(ProjectionError::InvalidConfiguration(
            "primary key field must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn effective_fields<'a>(selection: &'a [String], primary_key: &'a str) -> Vec<&'a str> {
    if selection.is_empty() {
        return Vec::new();
    }

    let mut fields: Vec<&str> = selection.iter().map(String::as_str).collect();
    if !fields.contains(&primary_key) {
        fields.push(primary_key);
    }
    fields
}

fn build(selection: &[String], primary_key: &str, reserved: &ReservedWordSet) -> TranslationResult {
    let fields = effective_fields(selection, primary_key);
    if fields.is_empty() {
        return TranslationResult::default();
    }

    let mut names = HashMap::new();
    let parts: Vec<String> = fields
        .into_iter()
        .map(|field| {
            if reserved.contains(field) {
                let placeholder = format!("{ESCAPE_MARKER}{field}");
                names.insert(placeholder.clone(), field.to_string());
                placeholder
            } else {
                field.to_string()
            }
        })
        .collect();

    TranslationResult {
        projection_expression: Some(parts.join(FIELD_SEPARATOR)),
        expression_attribute_names: (!names.is_empty()).then_some(names),
    }
}
