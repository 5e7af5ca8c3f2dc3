//! # Painpoint Models
//!
//! Generation settings for the Gemini model used by the idea generator.
//! Kept separate from the credential so settings can be persisted and shown
//! in the UI without ever exposing the API key.

use serde::{Deserialize, Serialize};

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Public Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for LLM model selection and sampling
///
/// ## Example
/// ```rust,ignore
/// use painpoint_core::models::ModelConfig;
///
/// // gemini-2.5-flash at temperature 0.8
/// let config = ModelConfig::default();
///
/// // Specific model behind a proxy
/// let config = ModelConfig::new("gemini-2.0-flash").with_base_url("http://localhost:9000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Model name (e.g., "gemini-2.5-flash")
    pub model: String,
    /// Base URL override for the Gemini REST API
    pub base_url: Option<String>,
    /// Sampling temperature; high values favor diverse ideas
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            temperature: 0.8,
            top_p: 0.9,
        }
    }
}

impl ModelConfig {
    /// Create a new model config with default sampling
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set base URL (proxies, test servers)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Effective base URL without a trailing slash
    pub fn endpoint_base(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}
