//! Text embeddings client.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::json;

use super::DEFAULT_TIMEOUT;
use crate::client::{ApiClient, Outcome};
use crate::config::Credentials;
use crate::error::Error;

/// Input for an embedding request: a single string or a batch of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    /// A single text.
    Text(String),
    /// A batch of texts embedded in one call.
    Batch(Vec<String>),
}

impl EmbeddingInput {
    /// True when there is nothing to embed: an empty string or empty batch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Batch(texts) => texts.is_empty(),
        }
    }
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for EmbeddingInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(texts: Vec<String>) -> Self {
        Self::Batch(texts)
    }
}

impl From<Vec<&str>> for EmbeddingInput {
    fn from(texts: Vec<&str>) -> Self {
        Self::Batch(texts.into_iter().map(str::to_string).collect())
    }
}

/// Client for text embedding models.
///
/// Embedding calls issue a single attempt: connection timeouts are not
/// retried.
#[derive(Debug, Clone)]
pub struct TextEmbeddings {
    api: ApiClient,
}

impl TextEmbeddings {
    /// Create an embeddings client for the given model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the HTTP client cannot be built.
    pub fn new(credentials: Arc<Credentials>, model: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            api: ApiClient::new(credentials, model)?,
        })
    }

    /// Embed a text or a batch of texts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the input is empty, before any
    /// request is made.
    pub async fn embed(
        &self,
        input: impl Into<EmbeddingInput>,
        options: EmbedOptions,
    ) -> Result<Outcome, Error> {
        let input = input.into();
        if input.is_empty() {
            return Err(Error::invalid_input("Text input cannot be empty."));
        }

        let payload = json!({ "text": input });

        self.api.execute(&payload, options.timeout, 1).await
    }
}

/// Options for [`TextEmbeddings::embed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl EmbedOptions {
    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
