//! Shared request execution.
//!
//! This module provides:
//! - [`ApiClient`]: the request executor every task client delegates to
//! - [`Outcome`]: the uniform success/failure result of a network call
//! - Streaming consumption of chunked response bodies
//!
//! # Architecture
//!
//! The executor issues HTTP POSTs via `reqwest` with per-call timeouts.
//! Transport-level connection failures are retried after a fixed 2-second
//! pause until the per-call attempt budget is exhausted; every other
//! failure settles immediately. Streaming requests skip retries entirely
//! and deliver failures in-band as a single JSON-encoded error chunk.

mod executor;
mod outcome;
mod streaming;

pub use executor::{ApiClient, CONNECTION_TIMEOUT_MESSAGE, RETRY_DELAY};
pub use outcome::{FailureKind, Outcome};
pub use streaming::STREAM_TIMEOUT_MESSAGE;
