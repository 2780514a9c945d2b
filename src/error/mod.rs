//! Error types for the Workers AI client.
//!
//! This module defines two taxonomies:
//! - [`Error`]: input and configuration errors, raised synchronously before
//!   any network activity
//! - [`ConfigError`]: environment-loading failures for
//!   [`Credentials::from_env`](crate::config::Credentials::from_env)
//!
//! Network-stage failures are never errors: they are converted into
//! [`Outcome::Failure`](crate::client::Outcome::Failure) at the request
//! executor boundary so that no task client leaks a transport-specific
//! failure type.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Errors raised by task clients before any request is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was empty or out of range.
    ///
    /// Display output is exactly the documented validation message,
    /// e.g. `Input text cannot be empty.`
    #[error("{message}")]
    InvalidInput {
        /// The validation message.
        message: String,
    },

    /// A request parameter was misconfigured.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration is invalid.
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    HttpClient {
        /// Description of the construction failure.
        message: String,
    },
}

impl Error {
    /// Create an input validation error.
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Configuration errors.
///
/// These errors represent failures when loading credentials from the
/// environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // Type assertions - verify all errors implement required traits
    assert_impl_all!(Error: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error, Clone);

    #[test]
    fn test_invalid_input_display_is_bare_message() {
        let err = Error::invalid_input("Input text cannot be empty.");
        assert_eq!(err.to_string(), "Input text cannot be empty.");
    }

    #[test]
    fn test_invalid_config_display() {
        let err = Error::InvalidConfig {
            reason: "max_attempts must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_attempts must be at least 1"
        );
    }

    #[test]
    fn test_http_client_display() {
        let err = Error::HttpClient {
            message: "tls backend unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to build HTTP client: tls backend unavailable"
        );
    }

    #[test]
    fn test_config_error_display_missing_required() {
        let err = ConfigError::MissingRequired {
            var: "CLOUDFLARE_API_TOKEN".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required: CLOUDFLARE_API_TOKEN");
    }

    #[test]
    fn test_config_error_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            var: "CLOUDFLARE_ACCOUNT_ID".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CLOUDFLARE_ACCOUNT_ID: must not be empty"
        );
    }

    #[test]
    fn test_error_eq() {
        let err1 = Error::invalid_input("Messages cannot be empty.");
        let err2 = Error::invalid_input("Messages cannot be empty.");
        let err3 = Error::invalid_input("Prompt cannot be empty.");
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_error_clone() {
        let err = Error::InvalidConfig {
            reason: "test".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
