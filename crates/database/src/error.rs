use sea_orm::{DbErr, SqlErr};
use std::fmt;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level fault taxonomy.
///
/// Everything a handler needs to pick an HTTP status: missing rows, rejected
/// input, uniqueness conflicts, and the catch-all database failure.
#[derive(Debug)]
pub enum ServiceError {
    /// A referenced row does not exist; carries the resource name
    NotFound(&'static str),
    /// Malformed or unacceptable input, rejected before or instead of a write
    Validation(String),
    /// A uniqueness constraint would be violated
    Conflict(String),
    /// Unexpected database failure
    Database(DbErr),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(resource) => write!(f, "{resource} not found"),
            Self::Validation(message) => write!(f, "{message}"),
            Self::Conflict(message) => write!(f, "{message}"),
            Self::Database(err) => write!(f, "database error: {err}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        Self::Database(err)
    }
}

/// True when the error is a unique-constraint violation, so the caller can
/// surface a domain-specific conflict instead of a generic database failure.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Map a unique violation onto a Conflict with the given message; other
/// errors pass through as Database.
pub fn on_conflict(err: DbErr, message: &str) -> ServiceError {
    if is_unique_violation(&err) {
        ServiceError::conflict(message)
    } else {
        ServiceError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unique_violation_ignores_other_errors() {
        assert!(!is_unique_violation(&DbErr::Custom("timeout".into())));
        assert!(!is_unique_violation(&DbErr::RecordNotFound("grade".into())));
    }

    #[test]
    fn test_on_conflict_passes_other_errors_through_as_database() {
        let err = on_conflict(DbErr::Custom("connection reset".into()), "duplicate row");
        assert!(matches!(err, ServiceError::Database(_)));

        // The conflict message must not leak onto unrelated failures
        assert_eq!(err.to_string(), "database error: Custom Error: connection reset");
    }

    #[test]
    fn test_conflict_message_is_preserved() {
        let err = ServiceError::conflict("student already has a submission for this assignment");
        assert_eq!(
            err.to_string(),
            "student already has a submission for this assignment"
        );
    }
}
