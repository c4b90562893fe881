use thiserror::Error;

use crate::cache::CacheError;
use crate::phone::PhoneNumberId;
use crate::storage::RepositoryError;

/// A failure raised by one of the service's collaborators.
///
/// The underlying error is kept as-is so callers can tell the exact fault apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Errors surfaced by the phone number service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Record not found with ID {0}")]
    NotFound(PhoneNumberId),
    #[error("Phone number {id} is already in the desired state (activated: {activated})")]
    StateConflict {
        id: PhoneNumberId,
        activated: bool,
    },
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        Self::Collaborator(CollaboratorError::Repository(err))
    }
}

impl From<CacheError> for ServiceError {
    fn from(err: CacheError) -> Self {
        Self::Collaborator(CollaboratorError::Cache(err))
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
