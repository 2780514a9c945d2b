//! Streaming response consumption.
//!
//! This module provides:
//! - A dedicated reader task feeding raw response chunks through a channel
//! - In-band error delivery: failures become a single JSON-encoded chunk
//!
//! Chunks are opaque to this layer. No line or JSON-boundary framing is
//! imposed; a caller reassembling a structured stream-of-JSON protocol does
//! so on top of the raw fragments. A stream is not restartable and is never
//! retried.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use super::executor::{decode_error_body, is_connect_failure};
use crate::config::SecretString;

/// Error chunk message for a connection failure before any data arrived.
pub const STREAM_TIMEOUT_MESSAGE: &str = "Connection timed out";

/// Everything the reader task needs to issue the streaming POST.
pub(crate) struct StreamRequest {
    pub(crate) http: reqwest::Client,
    pub(crate) url: String,
    pub(crate) api_token: SecretString,
    pub(crate) payload: Value,
    pub(crate) timeout: Duration,
}

/// Spawn the reader task and hand back the chunk receiver.
///
/// The channel is bounded, so the reader suspends between chunks until the
/// consumer pulls the next one. When the receiver is dropped the next send
/// fails, the task returns, and the response body (and its connection) is
/// released.
pub(crate) fn spawn_reader(request: StreamRequest) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(32);
    tokio::spawn(read_into(request, tx));
    rx
}

/// Issue the POST and forward body chunks until end-of-data.
///
/// Exactly one terminal error chunk is sent on any failure, then the
/// channel closes.
async fn read_into(request: StreamRequest, tx: mpsc::Sender<String>) {
    tracing::debug!(url = %request.url, "Opening streaming request");

    let sent = request
        .http
        .post(&request.url)
        .bearer_auth(request.api_token.expose())
        .header(CONTENT_TYPE, "application/json")
        .json(&request.payload)
        .timeout(request.timeout)
        .send()
        .await;

    let response = match sent {
        Ok(response) => response,
        Err(e) if is_connect_failure(&e) => {
            send_chunk(&tx, &json!({"error": STREAM_TIMEOUT_MESSAGE})).await;
            return;
        }
        Err(e) => {
            send_chunk(&tx, &json!({"error": e.to_string(), "response": Value::Null})).await;
            return;
        }
    };

    let status = response.status();
    if !status.is_success() {
        let message = format!("HTTP status {status} returned for {url}", url = request.url);
        let body = response.text().await.unwrap_or_default();
        let decoded = decode_error_body(&body).unwrap_or(Value::Null);
        send_chunk(&tx, &json!({"error": message, "response": decoded})).await;
        return;
    }

    let mut stream = response.bytes_stream();
    while let Some(next) = stream.next().await {
        match next {
            Ok(bytes) => {
                let chunk = String::from_utf8_lossy(&bytes).into_owned();
                if tx.send(chunk).await.is_err() {
                    // Receiver dropped, stop reading
                    return;
                }
            }
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "Stream read failed");
                send_chunk(&tx, &json!({"error": e.to_string()})).await;
                return;
            }
        }
    }
}

/// Send one JSON-encoded error object as an in-band chunk.
async fn send_chunk(tx: &mpsc::Sender<String>, value: &Value) {
    let _ = tx.send(value.to_string()).await;
}
