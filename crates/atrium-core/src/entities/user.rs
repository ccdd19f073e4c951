//! User entity - represents an account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::OneTimeToken;

/// User entity
///
/// The password hash is deliberately absent; repositories expose it through a
/// separate call so that a loaded user can be handed to views as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub oauth_provider: Option<String>,
    pub oauth_id: Option<String>,
    /// Path of the avatar file relative to the upload directory
    pub avatar: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub pending_email: Option<String>,
    pub verification_token: Option<String>,
    pub verification_requested_at: Option<DateTime<Utc>>,
    pub reset_token: Option<String>,
    pub reset_requested_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified User with required fields
    pub fn new(id: Uuid, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            oauth_provider: None,
            oauth_id: None,
            avatar: None,
            verified_at: None,
            pending_email: None,
            verification_token: None,
            verification_requested_at: None,
            reset_token: None,
            reset_requested_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the email address has been verified
    #[inline]
    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }

    /// Public URL of the avatar, if one was uploaded
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.as_ref().map(|path| format!("/uploads/{path}"))
    }

    /// Update the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the email address directly (no verification round-trip)
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Update the avatar path
    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.avatar = avatar;
        self.updated_at = Utc::now();
    }

    /// Mark the current email as verified
    pub fn mark_verified(&mut self, at: DateTime<Utc>) {
        self.verified_at = Some(at);
        self.updated_at = at;
    }

    /// Record a pending email address and the token that confirms it
    pub fn begin_verification(&mut self, email: String, token: &OneTimeToken) {
        self.pending_email = Some(email);
        self.verification_token = Some(token.value().to_string());
        self.verification_requested_at = Some(token.issued_at());
        self.updated_at = token.issued_at();
    }

    /// Check whether the stored verification token is still usable
    pub fn verification_token_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.verification_token.is_some()
            && OneTimeToken::is_valid_at(self.verification_requested_at, now)
    }

    /// Consume the verification token: the pending email becomes the account email
    ///
    /// # Errors
    /// Returns `InvalidOrExpiredToken` if there is no usable token or pending email
    pub fn complete_verification(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.verification_token_valid_at(now) {
            return Err(DomainError::InvalidOrExpiredToken);
        }
        let email = self
            .pending_email
            .take()
            .ok_or(DomainError::InvalidOrExpiredToken)?;

        self.email = email;
        self.verified_at = Some(now);
        self.verification_token = None;
        self.verification_requested_at = None;
        self.updated_at = now;
        Ok(())
    }

    /// Record a password reset token
    pub fn begin_password_reset(&mut self, token: &OneTimeToken) {
        self.reset_token = Some(token.value().to_string());
        self.reset_requested_at = Some(token.issued_at());
        self.updated_at = token.issued_at();
    }

    /// Check whether the stored reset token is still usable
    pub fn reset_token_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.reset_token.is_some() && OneTimeToken::is_valid_at(self.reset_requested_at, now)
    }

    /// Drop the reset token after it has been used
    pub fn clear_password_reset(&mut self) {
        self.reset_token = None;
        self.reset_requested_at = None;
        self.updated_at = Utc::now();
    }
}
