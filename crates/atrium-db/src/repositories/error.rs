//! Error handling utilities for repositories

use atrium_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Unique constraint on `users.email`
pub const USERS_EMAIL_KEY: &str = "users_email_key";
/// Unique constraint on `users.username`
pub const USERS_USERNAME_KEY: &str = "users_username_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Translate unique violations on the users table into field-specific conflicts
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return unique_violation_for(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Pick the conflict error for a violated constraint name
pub fn unique_violation_for(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(USERS_EMAIL_KEY) => DomainError::EmailAlreadyExists,
        Some(USERS_USERNAME_KEY) => DomainError::UsernameAlreadyExists,
        Some(other) => DomainError::DatabaseError(format!("Unique constraint violated: {other}")),
        None => DomainError::DatabaseError("Unique constraint violated".to_string()),
    }
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}
