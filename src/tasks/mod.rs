//! Task clients for the Workers AI model families.
//!
//! This module provides one client per task type:
//! - [`Summarization`]: text summarization
//! - [`TextEmbeddings`]: text embeddings
//! - [`TextGeneration`]: chat/text generation, plain and streaming
//! - [`TextToImage`]: image generation
//! - [`Translation`]: text translation
//!
//! Each client validates its task-specific inputs, shapes the JSON payload
//! and delegates to the shared [`ApiClient`](crate::client::ApiClient).
//! Validation failures return [`Error`](crate::error::Error) before any
//! network activity; network results always arrive as an
//! [`Outcome`](crate::client::Outcome).
//!
//! The retry policies differ per task on purpose: summarization, image
//! generation and translation retry connection timeouts three times, while
//! embeddings and generation issue a single attempt.

mod embeddings;
mod generation;
mod image;
mod summarization;
mod translation;

pub use embeddings::{EmbedOptions, EmbeddingInput, TextEmbeddings};
pub use generation::{ChatMessage, GenerationOptions, TextGeneration};
pub use image::{
    ImageOptions, TextToImage, DEFAULT_DIMENSION, DEFAULT_GUIDANCE, DEFAULT_IMAGE_TIMEOUT,
    MAX_STEPS, MIN_STEPS,
};
pub use summarization::{SummarizeOptions, Summarization, DEFAULT_MAX_LENGTH};
pub use translation::{TranslateOptions, Translation, DEFAULT_SOURCE_LANG};

use std::time::Duration;

/// Default per-attempt timeout for text tasks.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection-timeout retry budget.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
