use thiserror::Error;

use super::pagination::PagingError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} with id={id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error(transparent)]
    Paging(#[from] PagingError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// Whether the caller sent something we refuse to act on, as opposed to
    /// an internal failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DomainError::not_found("Doctor", 7).to_string(),
            "Doctor with id=7 not found"
        );
        assert_eq!(
            DomainError::Conflict("Role 'nurse'".into()).to_string(),
            "Already exists: Role 'nurse'"
        );
    }

    #[test]
    fn paging_errors_are_transparent() {
        let err: DomainError = PagingError::UnknownSortKey {
            field: "age".into(),
            allowed: &["id"],
        }
        .into();
        assert_eq!(err.to_string(), "Unknown sort field 'age' (expected one of: id)");
        assert!(err.is_client_error());
        assert!(!DomainError::Storage("lock poisoned".into()).is_client_error());
    }
}
