//! Text translation client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use super::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT};
use crate::client::{ApiClient, Outcome};
use crate::config::Credentials;
use crate::error::Error;

/// Default source language.
pub const DEFAULT_SOURCE_LANG: &str = "en";

/// Client for translation models.
#[derive(Debug, Clone)]
pub struct Translation {
    api: ApiClient,
}

impl Translation {
    /// Create a translation client for the given model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the HTTP client cannot be built.
    pub fn new(credentials: Arc<Credentials>, model: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            api: ApiClient::new(credentials, model)?,
        })
    }

    /// Translate text into the target language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] before any request is made when the
    /// text or the target language is empty.
    pub async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        options: TranslateOptions,
    ) -> Result<Outcome, Error> {
        if text.is_empty() {
            return Err(Error::invalid_input("Text to be translated cannot be empty."));
        }
        if target_lang.is_empty() {
            return Err(Error::invalid_input("Target language cannot be empty."));
        }

        let payload = json!({
            "text": text,
            "source_lang": options.source_lang,
            "target_lang": target_lang,
        });

        self.api
            .execute(&payload, options.timeout, options.max_attempts)
            .await
    }
}

/// Options for [`Translation::translate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Source language code.
    pub source_lang: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Connection-timeout retry budget.
    pub max_attempts: u32,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl TranslateOptions {
    /// Set the source language code.
    #[must_use]
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Set the per-attempt timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry budget.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}
