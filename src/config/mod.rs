//! Credentials and configuration.
//!
//! This module handles:
//! - The immutable account credentials shared by every task client
//! - Environment variable loading
//! - Secure API token storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use workers_ai::config::Credentials;
//!
//! let credentials = Credentials::new("my-account", "my-token")
//!     .with_base_url("https://gateway.example.com/v4");
//!
//! assert_eq!(credentials.account_id(), "my-account");
//! // Base URLs are normalized to end with a slash.
//! assert_eq!(credentials.base_url(), "https://gateway.example.com/v4/");
//! // The token is protected from accidental logging.
//! let debug = format!("{:?}", credentials);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("my-token"));
//! ```

mod secret;

pub use secret::SecretString;

use crate::error::ConfigError;

/// Default base URL for the Cloudflare API.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4/";

/// Environment variable holding the account identifier.
pub const ENV_ACCOUNT_ID: &str = "CLOUDFLARE_ACCOUNT_ID";
/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "CLOUDFLARE_API_BASE_URL";

/// Immutable account credentials for the Workers AI API.
///
/// Holds the account identifier, API token and base service URL. A single
/// `Credentials` value is typically wrapped in an `Arc` and shared by any
/// number of concurrently constructed task clients; it is read-only after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    account_id: String,
    api_token: SecretString,
    base_url: String,
}

impl Credentials {
    /// Create credentials with the production API base URL.
    #[must_use]
    pub fn new(account_id: impl Into<String>, api_token: impl Into<SecretString>) -> Self {
        Self {
            account_id: account_id.into(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base service URL.
    ///
    /// A trailing slash is appended when missing so that endpoint paths can
    /// be joined by simple concatenation.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Load credentials from environment variables.
    ///
    /// A `.env` file is honored when present. Required variables:
    /// - `CLOUDFLARE_ACCOUNT_ID`
    /// - `CLOUDFLARE_API_TOKEN`
    ///
    /// Optional:
    /// - `CLOUDFLARE_API_BASE_URL` (default: production API host)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let account_id = require_env(ENV_ACCOUNT_ID)?;
        let api_token = require_env(ENV_API_TOKEN)?;

        let credentials = Self::new(account_id, api_token);
        match std::env::var(ENV_BASE_URL) {
            Ok(base_url) if !base_url.is_empty() => Ok(credentials.with_base_url(base_url)),
            _ => Ok(credentials),
        }
    }

    /// Get the account identifier.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Get the API token.
    #[must_use]
    pub const fn api_token(&self) -> &SecretString {
        &self.api_token
    }

    /// Get the base service URL (always slash-terminated).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Read a required environment variable, rejecting empty values.
fn require_env(var: &str) -> Result<String, ConfigError> {
    let value = std::env::var(var).map_err(|_| ConfigError::MissingRequired {
        var: var.to_string(),
    })?;
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_ACCOUNT_ID);
        std::env::remove_var(ENV_API_TOKEN);
        std::env::remove_var(ENV_BASE_URL);
    }

    #[test]
    fn test_credentials_new_defaults() {
        let credentials = Credentials::new("acc", "token");
        assert_eq!(credentials.account_id(), "acc");
        assert_eq!(credentials.api_token().expose(), "token");
        assert_eq!(credentials.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_credentials_base_url_override() {
        let credentials = Credentials::new("acc", "token").with_base_url("http://localhost:8080");
        assert_eq!(credentials.base_url(), "http://localhost:8080/");
    }

    #[test]
    fn test_credentials_base_url_keeps_trailing_slash() {
        let credentials = Credentials::new("acc", "token").with_base_url("http://localhost:8080/");
        assert_eq!(credentials.base_url(), "http://localhost:8080/");
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let credentials = Credentials::new("acc", "very-secret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("<REDACTED>"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_account_id() {
        clear_env();
        let result = Credentials::from_env();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingRequired {
                var: ENV_ACCOUNT_ID.to_string()
            }
        );
    }

    #[test]
    #[serial]
    fn test_from_env_empty_token_rejected() {
        clear_env();
        std::env::set_var(ENV_ACCOUNT_ID, "acc");
        std::env::set_var(ENV_API_TOKEN, "");
        let result = Credentials::from_env();
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { var, .. } if var == ENV_API_TOKEN
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_with_base_url_override() {
        clear_env();
        std::env::set_var(ENV_ACCOUNT_ID, "acc");
        std::env::set_var(ENV_API_TOKEN, "token");
        std::env::set_var(ENV_BASE_URL, "http://localhost:9999");
        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.base_url(), "http://localhost:9999/");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_base_url() {
        clear_env();
        std::env::set_var(ENV_ACCOUNT_ID, "acc");
        std::env::set_var(ENV_API_TOKEN, "token");
        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.base_url(), DEFAULT_BASE_URL);
        clear_env();
    }
}
