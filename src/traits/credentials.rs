//! Credentials provider trait abstraction.
//!
//! Persisted login state lives behind this trait so the application object
//! can be exercised against an in-memory store in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::Credentials;

/// Credentials operation errors.
#[derive(Debug, Clone, Error)]
pub enum CredentialsError {
    /// Failed to load credentials
    #[error("Failed to load credentials: {0}")]
    LoadFailed(String),
    /// Failed to save credentials
    #[error("Failed to save credentials: {0}")]
    SaveFailed(String),
    /// Failed to clear credentials
    #[error("Failed to clear credentials: {0}")]
    ClearFailed(String),
    /// Credentials not found
    #[error("Credentials not found")]
    NotFound,
    /// Other error
    #[error("Credentials error: {0}")]
    Other(String),
}

/// Trait for credentials storage and retrieval.
///
/// # Example
///
/// ```ignore
/// use snooze::traits::CredentialsProvider;
///
/// async fn remembered_user<P: CredentialsProvider>(provider: &P) -> Option<String> {
///     let creds = provider.load().await.ok()??;
///     creds.username
/// }
/// ```
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Load credentials from storage.
    ///
    /// # Returns
    /// - `Ok(Some(credentials))` if credentials exist and were loaded successfully
    /// - `Ok(None)` if no credentials are stored
    /// - `Err(error)` if loading failed
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError>;

    /// Save credentials to storage, replacing whatever was there.
    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError>;

    /// Clear all stored credentials. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), CredentialsError>;
}
