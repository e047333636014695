//! Error conversion glue between layers.
//!
//! The domain and DTO layers must not depend on service/repository error
//! types, so the conversions live here.

use crate::domain::types::TypeConstraintError;
#[cfg(feature = "server")]
use crate::dto::task::TaskMappingError;
use crate::repository::errors::RepositoryError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TaskMappingError> for ServiceError {
    fn from(val: TaskMappingError) -> Self {
        match val {
            TaskMappingError::MissingClient => ServiceError::MissingClient,
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
