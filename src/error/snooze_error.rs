//! The unified error type returned by every fallible client operation.

use serde::Deserialize;
use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::{CredentialsError, HttpError};

/// Longest slice of a raw response body carried into an error message.
const MAX_BODY_EXCERPT: usize = 200;

/// Errors surfaced by the story client.
#[derive(Debug, Error)]
pub enum SnoozeError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] HttpError),

    /// Non-2xx response without a recognizable validation or auth reason,
    /// or a 2xx response whose body could not be decoded.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The server rejected the submitted values.
    #[error("validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    /// Bad credentials, or the token was rejected.
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// An operation needing a session was attempted while anonymous.
    #[error("not logged in")]
    NotLoggedIn,

    /// A story URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No locally known story carries this id.
    #[error("no story with id '{0}'")]
    StoryNotFound(String),

    /// Reading or writing persisted credentials failed.
    #[error("credential storage error: {0}")]
    Credentials(#[from] CredentialsError),
}

/// Type alias for results carrying a [`SnoozeError`].
pub type SnoozeResult<T> = Result<T, SnoozeError>;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl SnoozeError {
    /// Classify a non-2xx response.
    ///
    /// 401/403 become [`SnoozeError::Auth`], 400/409/422 become
    /// [`SnoozeError::Validation`], everything else is
    /// [`SnoozeError::Server`].
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = extract_message(status, body);
        match status {
            401 | 403 => SnoozeError::Auth { message },
            400 | 409 | 422 => SnoozeError::Validation { status, message },
            _ => SnoozeError::Server { status, message },
        }
    }

    /// Error for a success response whose body did not match the expected shape.
    pub fn invalid_body(status: u16, err: serde_json::Error) -> Self {
        SnoozeError::Server {
            status,
            message: format!("invalid response body: {}", err),
        }
    }

    /// Returns the high-level category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SnoozeError::Network(_) => ErrorCategory::Network,
            SnoozeError::Server { .. } => ErrorCategory::Server,
            SnoozeError::Validation { .. } => ErrorCategory::Validation,
            SnoozeError::Auth { .. } | SnoozeError::NotLoggedIn => ErrorCategory::Auth,
            SnoozeError::InvalidUrl { .. } | SnoozeError::StoryNotFound(_) => {
                ErrorCategory::Client
            }
            SnoozeError::Credentials(_) => ErrorCategory::Storage,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SnoozeError::Network(HttpError::Timeout(_)) => {
                "The server took too long to answer.".to_string()
            }
            SnoozeError::Network(_) => {
                "Unable to reach the server. Please check your internet connection.".to_string()
            }
            SnoozeError::Server { status, .. } => {
                format!("The server returned an error (HTTP {}).", status)
            }
            SnoozeError::Validation { message, .. } => format!("Rejected: {}", message),
            SnoozeError::Auth { message } => format!("Authentication failed: {}", message),
            SnoozeError::NotLoggedIn => "You need to log in first.".to_string(),
            SnoozeError::InvalidUrl { url, .. } => format!("'{}' is not a valid URL.", url),
            SnoozeError::StoryNotFound(id) => format!("No story with id '{}'.", id),
            SnoozeError::Credentials(_) => "Could not access saved credentials.".to_string(),
        }
    }
}

fn extract_message(status: u16, body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        if let Some(message) = envelope.error.message.or(envelope.error.title) {
            return message;
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return format!("HTTP {}", status);
    }
    text.chars().take(MAX_BODY_EXCERPT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_auth() {
        let body = br#"{"error":{"status":401,"title":"Unauthorized","message":"Invalid password"}}"#;
        let err = SnoozeError::from_status(401, body);
        match err {
            SnoozeError::Auth { message } => assert_eq!(message, "Invalid password"),
            other => panic!("Expected Auth, got {:?}", other),
        }

        assert_eq!(
            SnoozeError::from_status(403, b"").category(),
            ErrorCategory::Auth
        );
    }

    #[test]
    fn test_from_status_validation() {
        let body = br#"{"error":{"status":409,"message":"Username already taken"}}"#;
        match SnoozeError::from_status(409, body) {
            SnoozeError::Validation { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Username already taken");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }

        assert_eq!(
            SnoozeError::from_status(400, b"").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            SnoozeError::from_status(422, b"").category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn test_from_status_server_fallback() {
        match SnoozeError::from_status(500, b"upstream exploded") {
            SnoozeError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("Expected Server, got {:?}", other),
        }
    }

    #[test]
    fn test_title_used_when_message_missing() {
        let body = br#"{"error":{"title":"Not Found"}}"#;
        match SnoozeError::from_status(404, body) {
            SnoozeError::Server { message, .. } => assert_eq!(message, "Not Found"),
            other => panic!("Expected Server, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_message() {
        match SnoozeError::from_status(502, b"   ") {
            SnoozeError::Server { message, .. } => assert_eq!(message, "HTTP 502"),
            other => panic!("Expected Server, got {:?}", other),
        }
    }

    #[test]
    fn test_long_body_truncated() {
        let body = "x".repeat(1000);
        match SnoozeError::from_status(500, body.as_bytes()) {
            SnoozeError::Server { message, .. } => assert_eq!(message.len(), MAX_BODY_EXCERPT),
            other => panic!("Expected Server, got {:?}", other),
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            SnoozeError::Network(HttpError::ConnectionFailed("refused".into())).category(),
            ErrorCategory::Network
        );
        assert_eq!(SnoozeError::NotLoggedIn.category(), ErrorCategory::Auth);
        assert_eq!(
            SnoozeError::StoryNotFound("s1".into()).category(),
            ErrorCategory::Client
        );
        assert_eq!(
            SnoozeError::Credentials(CredentialsError::NotFound).category(),
            ErrorCategory::Storage
        );
    }

    #[test]
    fn test_user_messages_not_empty() {
        let errors = vec![
            SnoozeError::Network(HttpError::Timeout("30s".into())),
            SnoozeError::Server {
                status: 500,
                message: "boom".into(),
            },
            SnoozeError::Validation {
                status: 400,
                message: "title required".into(),
            },
            SnoozeError::Auth {
                message: "bad token".into(),
            },
            SnoozeError::NotLoggedIn,
            SnoozeError::InvalidUrl {
                url: "nope".into(),
                reason: "relative URL without a base".into(),
            },
            SnoozeError::StoryNotFound("abc".into()),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty(), "{:?}", err);
        }
    }

    #[test]
    fn test_display() {
        let err = SnoozeError::InvalidUrl {
            url: "not a url".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid URL 'not a url': relative URL without a base"
        );
    }
}
