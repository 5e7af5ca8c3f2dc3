//! # LLM Backend
//!
//! The seam between the idea generator and the remote generative-text
//! service. `TextBackend` takes a prompt plus a structured-output schema and
//! returns the raw reply text; parsing is left to the caller.
//!
//! `GeminiBackend` talks to the Gemini `generateContent` REST endpoint.

use crate::models::ModelConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// A single structured-output request
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Natural-language instruction
    pub prompt: String,
    /// Schema the reply must conform to (Gemini schema dialect)
    pub response_schema: serde_json::Value,
    pub temperature: f32,
    pub top_p: f32,
}

/// Failures below the parsing layer
#[derive(Debug, Error)]
pub enum BackendError {
    /// No API key; raised before any request is built
    #[error("no API credential configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Generates raw text for a structured-output request
#[async_trait]
pub trait TextBackend: Send + Sync {
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, BackendError>;
}

/// Gemini REST client
pub struct GeminiBackend {
    client: reqwest::Client,
    config: ModelConfig,
    api_key: Option<String>,
}

impl GeminiBackend {
    pub fn new(config: ModelConfig, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint_base(),
            self.config.model
        )
    }

    fn body(request: &GenerationRequest) -> serde_json::Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema,
                "temperature": request.temperature,
                "topP": request.top_p
            }
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate; empty when the model returned nothing
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextBackend for GeminiBackend {
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::MissingCredential)?;

        tracing::debug!(model = %self.config.model, "Calling Gemini generateContent");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&Self::body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}
