//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Avatar must be a PNG, JPEG, GIF or WebP image")]
    UnsupportedAvatarType,

    #[error("Avatar must be at most {max_mb} MB")]
    AvatarTooLarge { max_mb: u32 },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Please verify your email address before logging in")]
    EmailNotVerified,

    #[error("Invalid or expired link")]
    InvalidOrExpiredToken,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Mail delivery failed: {0}")]
    MailError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::UnsupportedAvatarType => "UNSUPPORTED_AVATAR_TYPE",
            Self::AvatarTooLarge { .. } => "AVATAR_TOO_LARGE",

            // Authorization
            Self::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            Self::InvalidOrExpiredToken => "INVALID_OR_EXPIRED_TOKEN",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::MailError(_) => "MAIL_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    ///
    /// Expired or unknown tokens count as bad input so that the response does
    /// not hint at whether an account exists.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::PasswordMismatch
                | Self::UnsupportedAvatarType
                | Self::AvatarTooLarge { .. }
                | Self::InvalidOrExpiredToken
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::EmailNotVerified)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::UsernameAlreadyExists)
    }
}
