//! Text summarization client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use super::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT};
use crate::client::{ApiClient, Outcome};
use crate::config::Credentials;
use crate::error::Error;

/// Default maximum summary length in tokens.
pub const DEFAULT_MAX_LENGTH: u32 = 1024;

/// Client for summarization models.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use workers_ai::config::Credentials;
/// use workers_ai::tasks::{SummarizeOptions, Summarization};
///
/// # async fn run() -> Result<(), workers_ai::error::Error> {
/// let credentials = Arc::new(Credentials::new("account", "token"));
/// let client = Summarization::new(credentials, "@cf/facebook/bart-large-cnn")?;
/// let outcome = client
///     .summarize("Long input text...", SummarizeOptions::default().with_max_length(256))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Summarization {
    api: ApiClient,
}

impl Summarization {
    /// Create a summarization client for the given model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the HTTP client cannot be built.
    pub fn new(credentials: Arc<Credentials>, model: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            api: ApiClient::new(credentials, model)?,
        })
    }

    /// Summarize the given text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `input_text` is empty, before
    /// any request is made.
    pub async fn summarize(
        &self,
        input_text: &str,
        options: SummarizeOptions,
    ) -> Result<Outcome, Error> {
        if input_text.is_empty() {
            return Err(Error::invalid_input("Input text cannot be empty."));
        }

        let payload = json!({
            "input_text": input_text,
            "max_length": options.max_length,
        });

        self.api
            .execute(&payload, options.timeout, options.max_attempts)
            .await
    }
}

/// Options for [`Summarization::summarize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeOptions {
    /// Maximum summary length in tokens.
    pub max_length: u32,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Connection-timeout retry budget.
    pub max_attempts: u32,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SummarizeOptions {
    /// Set the maximum summary length.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
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

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> Summarization {
        let credentials = Arc::new(Credentials::new("acc", "token").with_base_url(base_url));
        Summarization::new(credentials, "@cf/facebook/bart-large-cnn").unwrap()
    }

    #[tokio::test]
    async fn test_empty_input_fails_before_any_request() {
        let client = client_for("http://127.0.0.1:1");
        let err = client
            .summarize("", SummarizeOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Input text cannot be empty.");
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/acc/ai/run/@cf/facebook/bart-large-cnn"))
            .and(header("authorization", "Bearer token"))
            .and(body_json(
                serde_json::json!({"input_text": "Long text", "max_length": 1024}),
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"summary": "Test summary"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let outcome = client
            .summarize("Long text", SummarizeOptions::default())
            .await
            .unwrap();

        assert_eq!(
            outcome.body(),
            Some(&serde_json::json!({"summary": "Test summary"}))
        );
    }

    #[tokio::test]
    async fn test_summarize_custom_max_length_in_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(
                serde_json::json!({"input_text": "Text", "max_length": 128}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let outcome = client
            .summarize("Text", SummarizeOptions::default().with_max_length(128))
            .await
            .unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_options_defaults() {
        let options = SummarizeOptions::default();
        assert_eq!(options.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(options.timeout, DEFAULT_TIMEOUT);
        assert_eq!(options.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }
}
