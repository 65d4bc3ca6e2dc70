//! Translation of field selections into DynamoDB projection expressions.
//!
//! A selection such as `$select: ["name", "Time"]` becomes a
//! `ProjectionExpression` (`"name, #Time, id"`) plus the
//! `ExpressionAttributeNames` table needed to escape reserved words
//! (`{"#Time": "Time"}`). The primary key is always projected.
//!
//! Everything here is pure: no I/O, no shared mutable state.

mod error;
mod reserved;
mod translate;

pub use error::{ProjectionError, Result};
pub use reserved::{ReservedWordSet, DYNAMODB_RESERVED_WORDS};
pub use translate::{
    translate, ProjectionTranslator, TranslationResult, DEFAULT_ID_FIELD, ESCAPE_MARKER,
    FIELD_SEPARATOR,
};
