//! Text-to-image client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use super::DEFAULT_MAX_ATTEMPTS;
use crate::client::{ApiClient, Outcome};
use crate::config::Credentials;
use crate::error::Error;

/// Minimum accepted diffusion step count.
pub const MIN_STEPS: u32 = 1;
/// Maximum accepted diffusion step count.
pub const MAX_STEPS: u32 = 20;

/// Default image height in pixels.
pub const DEFAULT_DIMENSION: u32 = 512;
/// Default guidance scale.
pub const DEFAULT_GUIDANCE: f64 = 7.5;
/// Default per-attempt timeout for image generation.
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(20);

/// Client for text-to-image models.
#[derive(Debug, Clone)]
pub struct TextToImage {
    api: ApiClient,
}

impl TextToImage {
    /// Create a text-to-image client for the given model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the HTTP client cannot be built.
    pub fn new(credentials: Arc<Credentials>, model: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            api: ApiClient::new(credentials, model)?,
        })
    }

    /// Generate an image from a prompt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] before any request is made when the
    /// prompt is empty or `num_steps` lies outside `[1, 20]`.
    pub async fn generate(&self, prompt: &str, options: ImageOptions) -> Result<Outcome, Error> {
        if prompt.is_empty() {
            return Err(Error::invalid_input("Prompt cannot be empty."));
        }
        if options.num_steps < MIN_STEPS || options.num_steps > MAX_STEPS {
            return Err(Error::invalid_input("Steps must be between 1 and 20"));
        }

        let payload = json!({
            "prompt": prompt,
            "negative_prompt": options.negative_prompt,
            "height": options.height,
            "width": options.width,
            "num_steps": options.num_steps,
            "guidance": options.guidance,
            "seed": options.seed,
        });

        self.api
            .execute(&payload, options.timeout, options.max_attempts)
            .await
    }
}

/// Options for [`TextToImage::generate`].
#[derive(Debug, Clone)]
pub struct ImageOptions {
    /// Elements to steer the model away from.
    pub negative_prompt: Option<String>,
    /// Output height in pixels.
    pub height: u32,
    /// Output width in pixels.
    pub width: u32,
    /// Diffusion step count, must lie in `[1, 20]`.
    pub num_steps: u32,
    /// Guidance scale.
    pub guidance: f64,
    /// Random seed for reproducible output.
    pub seed: Option<u64>,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Connection-timeout retry budget.
    pub max_attempts: u32,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            negative_prompt: None,
            height: DEFAULT_DIMENSION,
            width: DEFAULT_DIMENSION,
            num_steps: MAX_STEPS,
            guidance: DEFAULT_GUIDANCE,
            seed: None,
            timeout: DEFAULT_IMAGE_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ImageOptions {
    /// Set the negative prompt.
    #[must_use]
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    /// Set the output dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the diffusion step count.
    #[must_use]
    pub const fn with_num_steps(mut self, num_steps: u32) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Set the guidance scale.
    #[must_use]
    pub const fn with_guidance(mut self, guidance: f64) -> Self {
        self.guidance = guidance;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
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
