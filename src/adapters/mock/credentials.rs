//! In-memory credentials provider for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::credentials::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

/// In-memory credentials provider for testing.
///
/// Stores credentials in memory and can be told to fail any operation.
#[derive(Debug, Clone)]
pub struct InMemoryCredentials {
    /// Stored credentials
    credentials: Arc<Mutex<Option<Credentials>>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Whether clear should fail
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryCredentials {
    /// Create a new, empty in-memory credentials provider.
    pub fn new() -> Self {
        Self {
            credentials: Arc::new(Mutex::new(None)),
            save_should_fail: Arc::new(Mutex::new(false)),
            load_should_fail: Arc::new(Mutex::new(false)),
            clear_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a provider with initial credentials.
    pub fn with_credentials(creds: Credentials) -> Self {
        let provider = Self::new();
        provider.set_credentials(Some(creds));
        provider
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Get the current credentials synchronously.
    pub fn get_credentials(&self) -> Option<Credentials> {
        self.credentials.lock().unwrap().clone()
    }

    /// Set credentials synchronously.
    pub fn set_credentials(&self, creds: Option<Credentials>) {
        *self.credentials.lock().unwrap() = creds;
    }
}

impl Default for InMemoryCredentials {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(CredentialsError::LoadFailed("Mock load failure".to_string()));
        }

        Ok(self.credentials.lock().unwrap().clone())
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(CredentialsError::SaveFailed("Mock save failure".to_string()));
        }

        *self.credentials.lock().unwrap() = Some(creds.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(CredentialsError::ClearFailed("Mock clear failure".to_string()));
        }

        *self.credentials.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credentials {
        Credentials {
            token: Some("tok-1".to_string()),
            username: Some("alice".to_string()),
            favorites: vec!["s1".to_string()],
        }
    }

    #[tokio::test]
    async fn test_load_empty() {
        let provider = InMemoryCredentials::new();
        assert!(provider.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let provider = InMemoryCredentials::new();

        provider.save(&sample()).await.unwrap();
        assert_eq!(provider.load().await.unwrap(), Some(sample()));

        provider.clear().await.unwrap();
        assert!(provider.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_configured_failures() {
        let provider = InMemoryCredentials::with_credentials(sample());

        provider.set_load_should_fail(true);
        assert!(matches!(
            provider.load().await,
            Err(CredentialsError::LoadFailed(_))
        ));

        provider.set_save_should_fail(true);
        assert!(matches!(
            provider.save(&sample()).await,
            Err(CredentialsError::SaveFailed(_))
        ));

        provider.set_clear_should_fail(true);
        assert!(matches!(
            provider.clear().await,
            Err(CredentialsError::ClearFailed(_))
        ));
        assert!(provider.get_credentials().is_some());
    }

    #[test]
    fn test_clone_shares_storage() {
        let provider = InMemoryCredentials::new();
        let cloned = provider.clone();

        provider.set_credentials(Some(sample()));
        assert_eq!(cloned.get_credentials(), Some(sample()));
    }
}
