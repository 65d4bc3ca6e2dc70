//! Pure functions for mapping service errors to HTTP status codes.

use crate::storage::store_error_to_status_code;

use super::ServiceError;

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// Store errors use [`store_error_to_status_code`].
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::InvalidConfiguration(_) => 500,
        ServiceError::BadRequest(_) => 400,
        ServiceError::MethodNotAllowed(_) => 405,
        ServiceError::Store(err) => store_error_to_status_code(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;

    #[test]
    fn test_service_error_status_codes() {
        assert_eq!(
            service_error_to_status_code(&ServiceError::InvalidConfiguration("x".into())),
            500
        );
        assert_eq!(
            service_error_to_status_code(&ServiceError::BadRequest("x".into())),
            400
        );
        assert_eq!(
            service_error_to_status_code(&ServiceError::MethodNotAllowed("x".into())),
            405
        );
    }

    #[test]
    fn test_store_error_uses_store_mapping() {
        let error = ServiceError::Store(StoreError::ConnectionFailed("refused".into()));
        assert_eq!(service_error_to_status_code(&error), 503);
    }
}
