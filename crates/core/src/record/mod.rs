//! Schemaless records and the keys that address them.

mod functions;
mod types;

pub use functions::{ensure_id, pick, with_key};
pub use types::{Id, Key, KeySchema, Record};
