//! Avatar storage on the local filesystem
//!
//! Files live in `<upload_dir>/avatars/` and are served under `/uploads/`.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use atrium_core::{AvatarStorage, DomainError};
use tracing::{debug, instrument};

const AVATAR_DIR: &str = "avatars";

/// Stores avatars below an upload root directory
#[derive(Debug, Clone)]
pub struct LocalAvatarStorage {
    root: PathBuf,
}

impl LocalAvatarStorage {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a stored relative path, refusing anything that escapes the root
    fn resolve(&self, relative: &str) -> Result<PathBuf, DomainError> {
        let path = Path::new(relative);
        if path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(DomainError::StorageError(format!(
                "Invalid avatar path: {relative}"
            )));
        }
        Ok(self.root.join(path))
    }
}

#[async_trait]
impl AvatarStorage for LocalAvatarStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, DomainError> {
        let relative = format!("{AVATAR_DIR}/{file_name}");
        let path = self.resolve(&relative)?;

        tokio::fs::create_dir_all(self.root.join(AVATAR_DIR))
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(path = %path.display(), "Avatar stored");
        Ok(relative)
    }

    #[instrument(skip(self))]
    async fn remove(&self, path: &str) -> Result<(), DomainError> {
        let full = self.resolve(path)?;
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::StorageError(e.to_string())),
        }
    }
}
