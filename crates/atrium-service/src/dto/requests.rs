//! Request DTOs for form endpoints
//!
//! Form bodies implement `Deserialize` and `Validate`; messages are shown to
//! the user verbatim.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Signup form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters long"))]
    pub username: String,

    #[validate(email(message = "Email is not a valid email"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,

    #[validate(
        length(min = 8, message = "Password confirmation must be at least 8 characters long"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    pub password_confirm: String,
}

/// Login form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email is not a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Forget-password form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgetPasswordRequest {
    #[validate(email(message = "Email is not a valid email"))]
    pub email: String,
}

/// New password form reached from a reset link
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Invalid or expired reset link"))]
    pub token: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,

    #[validate(
        length(min = 8, message = "Password confirmation must be at least 8 characters long"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    pub password_confirm: String,
}

/// `?token=` query of emailed links
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// An uploaded avatar file
#[derive(Clone)]
pub struct AvatarUpload {
    /// Declared MIME type of the part
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Profile form (multipart)
#[derive(Debug, Clone, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters long"))]
    pub username: String,

    #[validate(email(message = "Email is not a valid email"))]
    pub email: String,

    /// Absent when no file (or an empty one) was sent
    pub avatar: Option<AvatarUpload>,
}

// ============================================================================
// Misc Requests
// ============================================================================

/// Hello form on the home page
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HelloRequest {
    #[serde(default)]
    pub name: String,
}

/// Theme switcher form
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeRequest {
    #[serde(default)]
    pub theme: String,
}
