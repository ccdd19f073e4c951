//! Avatar file storage port

use async_trait::async_trait;

use crate::error::DomainError;

/// Storage for uploaded avatar images
#[async_trait]
pub trait AvatarStorage: Send + Sync {
    /// Store an avatar under `file_name` and return its path relative to the upload root
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, DomainError>;

    /// Remove a previously stored avatar by the path returned from `store`
    async fn remove(&self, path: &str) -> Result<(), DomainError>;
}
