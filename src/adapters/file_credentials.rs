//! File-based credentials provider adapter.
//!
//! Wraps [`CredentialsManager`] behind the [`CredentialsProvider`] trait.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::traits::{CredentialsError, CredentialsProvider};

/// File-based credentials provider.
///
/// Credentials are stored in `~/.snooze/credentials.json` unless a path is
/// given explicitly.
#[derive(Debug, Clone)]
pub struct FileCredentialsProvider {
    manager: CredentialsManager,
}

impl FileCredentialsProvider {
    /// Create a provider for the default location.
    ///
    /// # Returns
    /// The provider, or an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CredentialsError> {
        CredentialsManager::new()
            .map(|manager| Self { manager })
            .ok_or_else(|| {
                CredentialsError::Other("Failed to determine home directory".to_string())
            })
    }

    /// Create a provider backed by an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            manager: CredentialsManager::with_path(path),
        }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &Path {
        self.manager.credentials_path()
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        // The manager returns defaults for a missing file
        let creds = self.manager.load();
        if creds.is_empty() {
            Ok(None)
        } else {
            Ok(Some(creds))
        }
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        self.manager
            .save(creds)
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        self.manager
            .clear()
            .map_err(|e| CredentialsError::ClearFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_credentials_provider_new() {
        let provider = FileCredentialsProvider::new().unwrap();
        assert!(provider.credentials_path().ends_with("credentials.json"));
    }

    #[tokio::test]
    async fn test_round_trip_through_trait() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileCredentialsProvider::with_path(temp_dir.path().join("creds.json"));

        assert!(provider.load().await.unwrap().is_none());

        let creds = Credentials {
            token: Some("tok".to_string()),
            username: Some("alice".to_string()),
            favorites: vec!["s9".to_string()],
        };
        provider.save(&creds).await.unwrap();
        assert_eq!(provider.load().await.unwrap(), Some(creds));

        provider.clear().await.unwrap();
        assert!(provider.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let provider = FileCredentialsProvider::with_path(blocker.join("creds.json"));

        let result = provider.save(&Credentials::default()).await;
        assert!(matches!(result, Err(CredentialsError::SaveFailed(_))));
    }
}
