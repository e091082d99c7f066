//! Domain-level error types.

use posts_shared::FieldError;
use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    /// Caller is not the author of the post it tried to change.
    #[error("Unauthorized: only the author can modify this post")]
    Unauthorized,

    /// Token resolved to a different user than the one asserted for the request.
    #[error("Token user {resolved} does not match asserted user {asserted}")]
    IdentityMismatch { asserted: i64, resolved: i64 },

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] RepoError),
}

impl DomainError {
    pub(crate) fn post_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
