//! Error handling utilities for repositories

use ideabin_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "account not found" error
pub fn account_not_found(id: i64) -> DomainError {
    DomainError::AccountNotFound(id)
}

/// Create an "idea not found" error
pub fn idea_not_found(id: i64) -> DomainError {
    DomainError::IdeaNotFound(id)
}
