use crate::projection::TranslationResult;
use crate::record::Record;

/// Options for a single-item read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOptions {
    pub projection: TranslationResult,
    /// Attribute names the projection resolves to, in order. Empty when
    /// unknown or unrestricted.
    pub attributes: Vec<String>,
}

impl GetOptions {
    pub fn new(projection: TranslationResult, attributes: Vec<String>) -> Self {
        Self {
            projection,
            attributes,
        }
    }
}

impl From<TranslationResult> for GetOptions {
    fn from(projection: TranslationResult) -> Self {
        Self {
            projection,
            attributes: Vec::new(),
        }
    }
}

/// Options for a full-table scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOptions {
    pub projection: TranslationResult,
    pub attributes: Vec<String>,
    /// Attribute equality conditions every returned item must satisfy.
    pub filters: Record,
}

impl ScanOptions {
    /// Returns true if `record` satisfies every filter.
    pub fn accepts(&self, record: &Record) -> bool {
        self.filters
            .iter()
            .all(|(field, expected)| record.get(field) == Some(expected))
    }
}
