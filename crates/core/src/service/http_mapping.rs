//! Pure functions for mapping service errors to HTTP status codes.

use crate::cache::CacheError;
use crate::storage::RepositoryError;

use super::{CollaboratorError, ServiceError};

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `StateConflict` -> 409 (Conflict)
/// - `Collaborator` with a connection failure -> 503 (Service Unavailable)
/// - any other `Collaborator` failure -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use phonebook_core::service::{ServiceError, service_error_to_status_code};
///
/// assert_eq!(service_error_to_status_code(&ServiceError::NotFound(1)), 404);
/// ```
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::NotFound(_) => 404,
        ServiceError::StateConflict { .. } => 409,
        ServiceError::Collaborator(CollaboratorError::Repository(
            RepositoryError::ConnectionFailed(_),
        )) => 503,
        ServiceError::Collaborator(CollaboratorError::Cache(CacheError::ConnectionFailed(_))) => {
            503
        }
        ServiceError::Collaborator(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(service_error_to_status_code(&ServiceError::NotFound(3)), 404);
    }

    #[test]
    fn test_state_conflict_maps_to_409() {
        let error = ServiceError::StateConflict {
            id: 3,
            activated: false,
        };
        assert_eq!(service_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_repository_connection_failed_maps_to_503() {
        let error: ServiceError = RepositoryError::ConnectionFailed("timeout".to_string()).into();
        assert_eq!(service_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_cache_connection_failed_maps_to_503() {
        let error: ServiceError = CacheError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(service_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_repository_not_found_is_server_error() {
        // A collaborator that reports NotFound on save is a server fault, not a missing target.
        let error: ServiceError = RepositoryError::NotFound {
            entity_type: "PhoneNumber",
            id: "1".to_string(),
        }
        .into();
        assert_eq!(service_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_cache_serialization_maps_to_500() {
        let error: ServiceError = CacheError::Serialization("bad bytes".to_string()).into();
        assert_eq!(service_error_to_status_code(&error), 500);
    }
}
