use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    /// A required field was absent from the request.
    #[error("{0}")]
    MissingField(String),

    /// A field was present but could not be coerced to its type.
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),
}
