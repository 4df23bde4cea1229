//! Runtime configuration.
//!
//! Defaults target the hosted API; each field can be overridden with a
//! builder method or an environment variable.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;

/// Base URL of the API.
pub const API_URL_ENV: &str = "SNOOZE_API_URL";
/// Path of the credentials file.
pub const CREDENTIALS_ENV: &str = "SNOOZE_CREDENTIALS";
/// Request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "SNOOZE_TIMEOUT_SECS";
/// `tracing` filter directive.
pub const LOG_ENV: &str = "SNOOZE_LOG";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_LOG_FILTER: &str = "warn";

/// Client configuration.
///
/// ```
/// use snooze::config::Config;
/// use std::time::Duration;
///
/// let config = Config::default()
///     .with_api_url("http://localhost:5000")
///     .with_request_timeout(Duration::from_secs(5));
/// assert_eq!(config.api_url, "http://localhost:5000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// `None` means `~/.snooze/credentials.json`.
    pub credentials_path: Option<PathBuf>,
    pub request_timeout: Duration,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials_path: None,
            request_timeout: DEFAULT_TIMEOUT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overlaid with the `SNOOZE_*` environment variables.
    ///
    /// Empty values are ignored. A timeout that is not a positive integer
    /// keeps the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(API_URL_ENV) {
            config = config.with_api_url(url);
        }
        if let Some(path) = non_empty_var(CREDENTIALS_ENV) {
            config = config.with_credentials_path(path);
        }
        if let Some(raw) = non_empty_var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Duration::from_secs(secs));
                }
                _ => eprintln!("Ignoring {}={:?}: expected a positive number of seconds", TIMEOUT_ENV, raw),
            }
        }
        if let Some(filter) = non_empty_var(LOG_ENV) {
            config = config.with_log_filter(filter);
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
