//! Pure pagination helpers.

use crate::record::Record;

use super::{Page, Paginate};

/// Resolves the page size for a request.
///
/// Uses `$limit` when given, otherwise the configured default; the result is
/// capped at `paginate.max`. Returns `None` when neither is set.
pub fn effective_limit(requested: Option<usize>, paginate: &Paginate) -> Option<usize> {
    let limit = requested.or(paginate.default)?;
    Some(match paginate.max {
        Some(max) => limit.min(max),
        None => limit,
    })
}

/// Slices `records` into a page.
pub fn paginate(records: Vec<Record>, skip: usize, limit: usize) -> Page {
    let total = records.len();
    let data = records.into_iter().skip(skip).take(limit).collect();
    Page {
        total,
        limit,
        skip,
        data,
    }
}
