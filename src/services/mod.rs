//! Use cases behind the HTTP handlers, generic over the repository traits.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod client;
pub mod task;

/// Errors returned by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,
    /// The payload is missing a required field or holds an invalid value.
    #[error("{0}")]
    Validation(String),
    /// A task refers to a client id that does not exist.
    #[error("client not found")]
    ClientNotFound,
    /// A stored task has no owning client and cannot be rendered.
    #[error("task has no associated client")]
    MissingClient,
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            // Tasks are the only entities holding a reference.
            RepositoryError::RelationNotFound(_) => ServiceError::ClientNotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
