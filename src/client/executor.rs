//! Request executor for the Workers AI API.
//!
//! This module provides:
//! - HTTP POST execution against the `accounts/<id>/ai/run/<model>` endpoint
//! - Connection-timeout retries with a fixed delay between attempts
//! - Normalization of every network result into an [`Outcome`]

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tokio::sync::mpsc;

use super::outcome::{FailureKind, Outcome};
use super::streaming::{spawn_reader, StreamRequest};
use crate::config::Credentials;
use crate::error::Error;

/// Fixed pause between connection-timeout retries.
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Failure message after all connection attempts are exhausted.
pub const CONNECTION_TIMEOUT_MESSAGE: &str = "Connection timed out after multiple attempts";

/// Result of a single request attempt.
enum Attempt {
    /// The request settled, successfully or not. No further attempts.
    Settled(Outcome),
    /// The host could not be reached or the connection timed out.
    ConnectFailed(String),
}

/// Shared request executor bound to one account and one model.
///
/// Every task client delegates here. The endpoint path is fixed at
/// construction; each call supplies its own payload, timeout and retry
/// budget.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    credentials: Arc<Credentials>,
    endpoint: String,
}

impl ApiClient {
    /// Create an executor for the given account credentials and model.
    pub fn new(credentials: Arc<Credentials>, model: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::HttpClient {
                message: e.to_string(),
            })?;

        let endpoint = format!(
            "accounts/{}/ai/run/{}",
            credentials.account_id(),
            model.into()
        );

        Ok(Self {
            http,
            credentials,
            endpoint,
        })
    }

    /// The endpoint path relative to the base URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fully qualified request URL.
    fn url(&self) -> String {
        format!("{}{}", self.credentials.base_url(), self.endpoint)
    }

    /// Execute a request, retrying connection failures.
    ///
    /// Connection-level failures (host unreachable, connect/request timeout
    /// before a response) are retried after a fixed [`RETRY_DELAY`] until
    /// `max_attempts` is exhausted, then settle as a
    /// [`FailureKind::ConnectionTimeout`] failure. Any other failure settles
    /// immediately as [`FailureKind::RequestError`] with the decoded error
    /// body attached when the server sent one.
    ///
    /// `max_attempts` must be at least 1; lower values are a configuration
    /// error reported before any request is attempted.
    pub async fn execute(
        &self,
        payload: &Value,
        timeout: Duration,
        max_attempts: u32,
    ) -> Result<Outcome, Error> {
        if max_attempts < 1 {
            return Err(Error::InvalidConfig {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }

        let url = self.url();
        let mut attempt = 0;

        loop {
            match self.attempt(&url, payload, timeout).await {
                Attempt::Settled(outcome) => return Ok(outcome),
                Attempt::ConnectFailed(message) => {
                    attempt += 1;
                    tracing::warn!(
                        url = %url,
                        attempt,
                        max_attempts,
                        error = %message,
                        "Connection attempt failed"
                    );
                    if attempt >= max_attempts {
                        return Ok(Outcome::failure(
                            FailureKind::ConnectionTimeout,
                            CONNECTION_TIMEOUT_MESSAGE,
                            None,
                        ));
                    }
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    /// Open a streaming request and return the chunk receiver.
    ///
    /// Streaming failures are not retried: every failure is delivered as a
    /// single JSON-encoded error chunk inside the sequence, after which the
    /// channel closes. Dropping the receiver stops the reader and releases
    /// the connection.
    #[must_use]
    pub fn open_stream(&self, payload: Value, timeout: Duration) -> mpsc::Receiver<String> {
        spawn_reader(StreamRequest {
            http: self.http.clone(),
            url: self.url(),
            api_token: self.credentials.api_token().clone(),
            payload,
            timeout,
        })
    }

    /// Issue one POST and classify the result.
    async fn attempt(&self, url: &str, payload: &Value, timeout: Duration) -> Attempt {
        tracing::debug!(url = %url, timeout = ?timeout, "Issuing request");

        let sent = self
            .http
            .post(url)
            .bearer_auth(self.credentials.api_token().expose())
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .timeout(timeout)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) if is_connect_failure(&e) => return Attempt::ConnectFailed(e.to_string()),
            Err(e) => {
                return Attempt::Settled(Outcome::failure(
                    FailureKind::RequestError,
                    e.to_string(),
                    None,
                ))
            }
        };

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "Response received");

        if !status.is_success() {
            let message = format!("HTTP status {status} returned for {url}");
            let body = response.text().await.unwrap_or_default();
            let decoded = decode_error_body(&body);
            return Attempt::Settled(Outcome::failure(
                FailureKind::RequestError,
                message,
                decoded,
            ));
        }

        match response.text().await {
            Ok(body) => Attempt::Settled(Outcome::from_body(&body)),
            Err(e) if is_connect_failure(&e) => Attempt::ConnectFailed(e.to_string()),
            Err(e) => {
                Attempt::Settled(Outcome::failure(FailureKind::RequestError, e.to_string(), None))
            }
        }
    }
}

/// True for transport-level failures that warrant a retry: the host could
/// not be reached, or the attempt timed out.
pub(crate) fn is_connect_failure(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout()
}

/// Decode an error response body, treating JSON `null` as absent.
pub(crate) fn decode_error_body(body: &str) -> Option<Value> {
    serde_json::from_str::<Value>(body)
        .ok()
        .filter(|value| !value.is_null())
}
