//! Chat/text generation client, plain and streaming.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::sync::mpsc;

use super::DEFAULT_TIMEOUT;
use crate::client::{ApiClient, Outcome};
use crate::config::Credentials;
use crate::error::Error;

/// One message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role: `system`, `user` or `assistant`.
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Create a message with an arbitrary role.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a `system` message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create a `user` message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an `assistant` message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Client for chat/text generation models.
///
/// [`run`](Self::run) issues a single request and returns the decoded
/// response. [`run_stream`](Self::run_stream) keeps the connection open and
/// returns a lazy sequence of raw chunks; a fresh call re-issues the
/// request, since a stream is not restartable.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use workers_ai::config::Credentials;
/// use workers_ai::tasks::{ChatMessage, GenerationOptions, TextGeneration};
///
/// # async fn run() -> Result<(), workers_ai::error::Error> {
/// let credentials = Arc::new(Credentials::new("account", "token"));
/// let client = TextGeneration::new(credentials, "@cf/meta/llama-3-8b-instruct")?;
///
/// let messages = vec![ChatMessage::user("Hello!")];
/// let mut rx = client.run_stream(&messages, GenerationOptions::default())?;
/// while let Some(chunk) = rx.recv().await {
///     print!("{chunk}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TextGeneration {
    api: ApiClient,
}

impl TextGeneration {
    /// Create a generation client for the given model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the HTTP client cannot be built.
    pub fn new(credentials: Arc<Credentials>, model: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            api: ApiClient::new(credentials, model)?,
        })
    }

    /// Run a non-streaming generation request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `messages` is empty, before any
    /// request is made.
    pub async fn run(
        &self,
        messages: &[ChatMessage],
        options: GenerationOptions,
    ) -> Result<Outcome, Error> {
        let payload = Self::payload(messages, false, &options)?;
        self.api.execute(&payload, options.timeout, 1).await
    }

    /// Run a streaming generation request.
    ///
    /// Returns a receiver yielding raw response chunks. Failures arrive
    /// in-band as a single JSON-encoded error chunk; the channel closes at
    /// end-of-data. Dropping the receiver releases the connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `messages` is empty, before any
    /// request is made.
    pub fn run_stream(
        &self,
        messages: &[ChatMessage],
        options: GenerationOptions,
    ) -> Result<mpsc::Receiver<String>, Error> {
        let payload = Self::payload(messages, true, &options)?;
        Ok(self.api.open_stream(payload, options.timeout))
    }

    /// Validate the messages and shape the payload.
    ///
    /// Caller-supplied extras merge on top of the defaults, so an extra can
    /// override any field, `stream` included.
    fn payload(
        messages: &[ChatMessage],
        stream: bool,
        options: &GenerationOptions,
    ) -> Result<Value, Error> {
        if messages.is_empty() {
            return Err(Error::invalid_input("Messages cannot be empty."));
        }

        let mut payload = Map::new();
        payload.insert("messages".to_string(), json!(messages));
        payload.insert("stream".to_string(), Value::Bool(stream));
        for (key, value) in &options.extra {
            payload.insert(key.clone(), value.clone());
        }
        Ok(Value::Object(payload))
    }
}

/// Options for [`TextGeneration::run`] and [`TextGeneration::run_stream`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Request timeout.
    pub timeout: Duration,
    /// Extra payload fields merged on top of the defaults.
    pub extra: Map<String, Value>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationOptions {
    /// Create options with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            extra: Map::new(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a payload field override (e.g. `max_tokens`, `temperature`).
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
