//! Error category classification.
//!
//! Categories give callers one coarse switch to decide what to tell the
//! user without matching on every [`SnoozeError`](super::SnoozeError)
//! variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures: connection refused, DNS, timeouts.
    Network,

    /// Bad credentials, rejected or expired token, or no session at all.
    Auth,

    /// The server answered with a failure it did not explain.
    Server,

    /// The server rejected the input (duplicate username, bad story fields).
    Validation,

    /// A local value could not be interpreted (unparseable URL, unknown id).
    Client,

    /// Local credential storage failed.
    Storage,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Client => "client",
            ErrorCategory::Storage => "storage",
        }
    }

    /// Suggested next step, printed by the CLI under the error message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Log in again with `snooze login <username>`",
            ErrorCategory::Server => "The server may be having trouble. Try again later",
            ErrorCategory::Validation => "Check the values you entered and try again",
            ErrorCategory::Client => "Check the story id or URL you passed",
            ErrorCategory::Storage => "Check permissions on the credentials file",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_hint_points_at_login() {
        assert!(ErrorCategory::Auth.recovery_hint().contains("snooze login"));
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
        assert_eq!(ErrorCategory::Storage.to_string(), "storage");
    }

    #[test]
    fn test_every_category_has_a_hint() {
        for category in [
            ErrorCategory::Network,
            ErrorCategory::Auth,
            ErrorCategory::Server,
            ErrorCategory::Validation,
            ErrorCategory::Client,
            ErrorCategory::Storage,
        ] {
            assert!(!category.recovery_hint().is_empty());
        }
    }
}
