//! Application error handling
//!
//! One error taxonomy for the whole data-access layer. Calling screens
//! render `user_message()` directly and branch on `code()`, so they never
//! inspect storage-engine error text.

use thiserror::Error;
use tracing::error;

/// Error type returned by every service operation
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Stable code string for callers that branch on the failure kind
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Message suitable for direct display to the end user
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Forbidden(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Internal(err) => {
                error!("Internal error: {:?}", err);
                "An internal error occurred".to_string()
            }
            AppError::Database(err) => {
                error!("Database error: {:?}", err);
                "A database error occurred".to_string()
            }
        }
    }

    /// Translate a unique-constraint violation into `Conflict`; anything
    /// else stays a database error. Used where a racing insert can slip
    /// past the proactive existence check.
    pub(crate) fn conflict_on_unique(err: sqlx::Error, message: &str) -> AppError {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(message.to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

/// Result type alias for service operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Validation("x".into()).code(), "VALIDATION_ERROR");
        assert_eq!(AppError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::Forbidden("x".into()).code(), "FORBIDDEN");
        assert_eq!(AppError::Conflict("x".into()).code(), "CONFLICT");
    }

    #[test]
    fn test_user_message_passthrough() {
        let err = AppError::Conflict("Team name already exists".into());
        assert_eq!(err.user_message(), "Team name already exists");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = AppError::Internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
