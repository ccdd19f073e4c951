//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Soft-deleted rows are invisible to every method.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::User;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find the user holding an email verification token
    async fn find_by_verification_token(&self, token: &str) -> RepoResult<Option<User>>;

    /// Find the user holding a password reset token
    async fn find_by_reset_token(&self, token: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    ///
    /// Unique violations surface as `EmailAlreadyExists` / `UsernameAlreadyExists`.
    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Persist every mutable field of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Permanently remove a user that never completed verification
    ///
    /// Used to undo a signup whose confirmation mail could not be sent, so the
    /// email and username become available again. Returns `false` if no such
    /// row exists.
    async fn purge_unverified(&self, id: Uuid) -> RepoResult<bool>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Store a new password hash for the holder of a live reset token
    ///
    /// Checking the token and clearing it happen in one step, so a token
    /// succeeds at most once. Returns `false` when no live row holds an
    /// unexpired `token` at `now`.
    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Promote the pending email of the holder of a live verification token
    ///
    /// The token is cleared and the account marked verified at `now` in the
    /// same step. Returns `None` when no live row holds an unexpired `token`
    /// with a pending email. A pending email taken by another account in the
    /// meantime surfaces as `EmailAlreadyExists`.
    async fn consume_verification_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<User>>;
}
