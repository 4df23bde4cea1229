//! Credentials storage for returning visitors.
//!
//! A logged-in user's token, username and favorite story ids are kept in
//! `~/.snooze/credentials.json` so the next run can re-validate the token
//! instead of asking for the password again.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The credentials directory name.
const CREDENTIALS_DIR: &str = ".snooze";

/// The credentials file name.
const CREDENTIALS_FILE: &str = "credentials.json";

/// Persisted login state.
///
/// Favorites are stored as story ids, not full stories; the server profile
/// fetched on restore is authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    /// Session token issued by the API on signup or login.
    pub token: Option<String>,
    /// The username the token belongs to.
    pub username: Option<String>,
    /// Ids of the user's favorite stories at the time of the last save.
    #[serde(default)]
    pub favorites: Vec<String>,
}

impl Credentials {
    /// Create new empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the credentials have a token.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Token and username, when both are present.
    ///
    /// Restoring a session needs both; anything less counts as "nothing stored".
    pub fn login_pair(&self) -> Option<(&str, &str)> {
        match (self.token.as_deref(), self.username.as_deref()) {
            (Some(token), Some(username)) if !token.is_empty() && !username.is_empty() => {
                Some((token, username))
            }
            _ => None,
        }
    }

    /// True when nothing worth persisting is set.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.username.is_none() && self.favorites.is_empty()
    }
}

/// Manages credential storage and retrieval.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    /// Path to the credentials file.
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Create a manager for the default location under the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let credentials_path = home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE);
        Some(Self { credentials_path })
    }

    /// Create a manager for an explicit file path.
    pub fn with_path(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
        }
    }

    /// Get the path to the credentials file.
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Load credentials from the credentials file.
    ///
    /// A missing file yields default credentials. An unreadable or corrupt
    /// file is logged and also yields defaults.
    pub fn load(&self) -> Credentials {
        if !self.credentials_path.exists() {
            return Credentials::default();
        }

        let file = match File::open(&self.credentials_path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Cannot open credentials file {}: {}",
                    self.credentials_path.display(),
                    e
                );
                return Credentials::default();
            }
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(creds) => creds,
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt credentials file {}: {}",
                    self.credentials_path.display(),
                    e
                );
                Credentials::default()
            }
        }
    }

    /// Save credentials to the credentials file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, credentials: &Credentials) -> io::Result<()> {
        if let Some(parent) = self.credentials_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.credentials_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, credentials)?;
        writer.flush()
    }

    /// Remove the credentials file. A missing file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.credentials_path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> CredentialsManager {
        CredentialsManager::with_path(temp_dir.path().join(CREDENTIALS_DIR).join(CREDENTIALS_FILE))
    }

    fn sample() -> Credentials {
        Credentials {
            token: Some("tok-123".to_string()),
            username: Some("alice".to_string()),
            favorites: vec!["s1".to_string(), "s2".to_string()],
        }
    }

    #[test]
    fn test_credentials_default() {
        let creds = Credentials::new();
        assert!(creds.is_empty());
        assert!(!creds.has_token());
        assert!(creds.login_pair().is_none());
    }

    #[test]
    fn test_login_pair_requires_both() {
        let mut creds = Credentials {
            token: Some("tok".to_string()),
            ..Default::default()
        };
        assert!(creds.has_token());
        assert!(creds.login_pair().is_none());

        creds.username = Some("alice".to_string());
        assert_eq!(creds.login_pair(), Some(("tok", "alice")));

        creds.token = Some(String::new());
        assert!(creds.login_pair().is_none());
    }

    #[test]
    fn test_credentials_manager_new() {
        let manager = CredentialsManager::new();
        assert!(manager.is_some());
    }

    #[test]
    fn test_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        assert_eq!(manager.load(), Credentials::default());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(!manager.credentials_path().parent().unwrap().exists());
        manager.save(&sample()).unwrap();
        assert!(manager.credentials_path().exists());

        assert_eq!(manager.load(), sample());
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.save(&sample()).unwrap();
        manager.clear().unwrap();
        assert!(!manager.credentials_path().exists());
        assert_eq!(manager.load(), Credentials::default());

        // Clearing twice is fine
        manager.clear().unwrap();
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        fs::create_dir_all(manager.credentials_path().parent().unwrap()).unwrap();
        fs::write(manager.credentials_path(), "not valid json").unwrap();

        assert_eq!(manager.load(), Credentials::default());
    }

    #[test]
    fn test_favorites_default_when_missing() {
        let creds: Credentials =
            serde_json::from_str(r#"{"token":"tok","username":"alice"}"#).unwrap();
        assert!(creds.favorites.is_empty());
        assert_eq!(creds.login_pair(), Some(("tok", "alice")));
    }

    #[test]
    fn test_saved_favorites_are_a_json_list() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        manager.save(&sample()).unwrap();

        let raw = fs::read_to_string(manager.credentials_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["favorites"], serde_json::json!(["s1", "s2"]));
    }
}
