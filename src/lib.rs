//! Workers AI client
//!
//! A Rust client for the Cloudflare Workers AI REST API, covering the
//! summarization, text embedding, text generation (including streaming),
//! text-to-image and translation model families.
//!
//! # Features
//!
//! - One task client per model family, all sharing a single request executor
//! - Connection-timeout retries with a fixed delay between attempts
//! - Streaming generation delivered as a lazy sequence of raw chunks
//! - Uniform [`Outcome`](client::Outcome) result for every network call
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use workers_ai::config::Credentials;
//! use workers_ai::tasks::{SummarizeOptions, Summarization};
//!
//! # async fn run() -> Result<(), workers_ai::error::Error> {
//! let credentials = Arc::new(Credentials::new("account-id", "api-token"));
//! let client = Summarization::new(credentials, "@cf/facebook/bart-large-cnn")?;
//!
//! let outcome = client
//!     .summarize("A long article...", SummarizeOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐      ┌───────────────────┐      ┌──────────────────────┐
//! │ Task client │─────▶│  Request executor │─────▶│ Workers AI REST API  │
//! │ (validates, │      │  (retries) or     │      │ accounts/<id>/ai/run │
//! │  shapes)    │◀─────│  stream consumer  │◀─────│ /<model>             │
//! └─────────────┘      └───────────────────┘      └──────────────────────┘
//! ```
//!
//! Network failures never surface as `Err`: they are normalized into
//! [`Outcome::Failure`](client::Outcome::Failure) so callers always receive
//! a structured result. Only input validation and configuration mistakes
//! return [`error::Error`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod tasks;

pub use client::{ApiClient, FailureKind, Outcome};
pub use config::Credentials;
pub use error::Error;
