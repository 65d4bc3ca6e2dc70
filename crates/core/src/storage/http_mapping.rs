//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use dynoserv_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::ConnectionFailed("refused".to_string());
/// assert_eq!(store_error_to_status_code(&error), 503);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::ConnectionFailed(_) => 503,
        StoreError::QueryFailed(_) => 500,
        StoreError::Serialization(_) => 500,
        StoreError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failed_returns_500() {
        let error = StoreError::QueryFailed("boom".to_string());
        assert_eq!(store_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_serialization_returns_500() {
        let error = StoreError::Serialization("bad".to_string());
        assert_eq!(store_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_returns_400() {
        let error = StoreError::InvalidData("bad".to_string());
        assert_eq!(store_error_to_status_code(&error), 400);
    }
}
