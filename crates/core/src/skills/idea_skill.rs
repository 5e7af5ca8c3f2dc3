//! # Idea Skill (IdeaGenerator)
//!
//! Turns a set of selected pain points into business ideas. Builds the
//! prompt, declares the structured-output schema, calls the backend once and
//! parses the reply. Every failure is classified into a `GenerationError`.

use super::llm_backend::{BackendError, GenerationRequest, TextBackend};
use super::prompts;
use crate::catalog::PainPoint;
use crate::models::ModelConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

/// A generated business idea
///
/// All three fields are required strings on the wire; a reply missing any
/// of them, or carrying a non-string value, is rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdea {
    pub name: String,
    pub concept: String,
    pub target_audience: String,
}

/// Machine-readable classification of a failed generation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected before any generation started (nothing selected)
    UserInput,
    Configuration,
    EmptyResponse,
    MalformedResponse,
    Transport,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserInput => "user_input",
            Self::Configuration => "configuration",
            Self::EmptyResponse => "empty_response",
            Self::MalformedResponse => "malformed_response",
            Self::Transport => "transport",
        }
    }
}

/// Classified failure of a generation attempt
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key for Gemini is not configured.")]
    Configuration,
    #[error("Received an empty response from the API.")]
    EmptyResponse,
    #[error("Failed to parse the API response. The format might be invalid.")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("An unexpected error occurred while communicating with the Gemini API.")]
    Transport(#[source] BackendError),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration => ErrorKind::Configuration,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }
}

impl From<BackendError> for GenerationError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::MissingCredential => Self::Configuration,
            other => Self::Transport(other),
        }
    }
}

/// Schema constraining the reply to an array of ideas
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": {
                    "type": "STRING",
                    "description": "A catchy and short name for the business idea."
                },
                "concept": {
                    "type": "STRING",
                    "description": "A one or two-sentence summary of the business concept."
                },
                "targetAudience": {
                    "type": "STRING",
                    "description": "The specific group of people this business would serve."
                }
            },
            "required": ["name", "concept", "targetAudience"]
        }
    })
}

/// Parse a raw reply into ideas
pub fn parse_ideas(raw: &str) -> Result<Vec<BusinessIdea>, GenerationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(GenerationError::MalformedResponse)
}

/// Idea generation client
#[derive(Clone)]
pub struct IdeaGenerator {
    backend: Arc<dyn TextBackend>,
    config: ModelConfig,
}

impl IdeaGenerator {
    pub fn new(backend: Arc<dyn TextBackend>, config: ModelConfig) -> Self {
        Self { backend, config }
    }

    /// Build the request sent for a selection
    pub fn build_request(&self, points: &[PainPoint]) -> GenerationRequest {
        GenerationRequest {
            prompt: prompts::idea_prompt(points),
            response_schema: response_schema(),
            temperature: self.config.temperature,
            top_p: self.config.top_p,
        }
    }

    /// Generate ideas for the given pain points.
    ///
    /// An empty slice returns no ideas without contacting the backend.
    /// Otherwise a single attempt is made; the result is either every parsed
    /// idea or a classified error.
    pub async fn generate(
        &self,
        points: &[PainPoint],
    ) -> Result<Vec<BusinessIdea>, GenerationError> {
        if points.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(
            pain_points = points.len(),
            model = %self.config.model,
            "Generating business ideas"
        );

        let request = self.build_request(points);
        let result = match self.backend.generate_text(&request).await {
            Ok(raw) => parse_ideas(&raw),
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(ideas) => tracing::info!(ideas = ideas.len(), "Business ideas generated"),
            Err(e) => tracing::error!(kind = e.kind().as_str(), error = ?e, "Error generating business ideas"),
        }

        result
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that replays a canned reply and counts calls
    pub(crate) struct ScriptedBackend {
        reply: Result<String, fn() -> BackendError>,
        pub calls: AtomicUsize,
    }

    impl ScriptedBackend {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing(err: fn() -> BackendError) -> Self {
            Self {
                reply: Err(err),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl TextBackend for ScriptedBackend {
        async fn generate_text(&self, _request: &GenerationRequest) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    pub(crate) fn five_ideas_json() -> String {
        let ideas: Vec<_> = (1..=5)
            .map(|i| {
                json!({
                    "name": format!("Idea {i}"),
                    "concept": format!("Concept {i}."),
                    "targetAudience": format!("Audience {i}")
                })
            })
            .collect();
        serde_json::to_string(&ideas).unwrap()
    }

    fn procrastination() -> Vec<PainPoint> {
        vec![PainPoint::new(
            "Procrastination",
            "Putting off important tasks until the last minute.",
            "Productivity & Focus",
            "⏳",
        )]
    }

    fn generator(backend: Arc<ScriptedBackend>) -> IdeaGenerator {
        IdeaGenerator::new(backend, ModelConfig::default())
    }

    #[tokio::test]
    async fn test_valid_reply_is_parsed() {
        let backend = Arc::new(ScriptedBackend::replying(&five_ideas_json()));
        let ideas = generator(backend.clone())
            .generate(&procrastination())
            .await
            .unwrap();

        assert_eq!(ideas.len(), 5);
        assert_eq!(
            ideas[0],
            BusinessIdea {
                name: "Idea 1".into(),
                concept: "Concept 1.".into(),
                target_audience: "Audience 1".into(),
            }
        );
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_selection_skips_backend() {
        let backend = Arc::new(ScriptedBackend::replying(&five_ideas_json()));
        let ideas = generator(backend.clone()).generate(&[]).await.unwrap();
        assert!(ideas.is_empty());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_reply_is_empty_response() {
        for reply in ["", "   \n"] {
            let backend = Arc::new(ScriptedBackend::replying(reply));
            let err = generator(backend).generate(&procrastination()).await.unwrap_err();
            assert!(matches!(err, GenerationError::EmptyResponse));
            assert_eq!(err.to_string(), "Received an empty response from the API.");
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let backend = Arc::new(ScriptedBackend::replying("{not json"));
        let err = generator(backend).generate(&procrastination()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(
            err.to_string(),
            "Failed to parse the API response. The format might be invalid."
        );
    }

    #[test]
    fn test_shape_mismatch_is_malformed() {
        let cases = [
            r#"{"name":"a","concept":"b","targetAudience":"c"}"#,
            r#"[{"name":"a","concept":"b"}]"#,
            r#"[{"name":"a","concept":"b","targetAudience":7}]"#,
            r#"[{"name":null,"concept":"b","targetAudience":"c"}]"#,
        ];
        for raw in cases {
            let err = parse_ideas(raw).unwrap_err();
            assert!(
                matches!(err, GenerationError::MalformedResponse(_)),
                "expected malformed for {raw}"
            );
        }
    }

    #[test]
    fn test_error_kind_wire_names() {
        let kinds = [
            ErrorKind::UserInput,
            ErrorKind::Configuration,
            ErrorKind::EmptyResponse,
            ErrorKind::MalformedResponse,
            ErrorKind::Transport,
        ];
        for kind in kinds {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_ideas("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_is_configuration() {
        let backend = Arc::new(ScriptedBackend::failing(|| BackendError::MissingCredential));
        let err = generator(backend).generate(&procrastination()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Configuration));
        assert_eq!(err.to_string(), "API key for Gemini is not configured.");
    }

    #[tokio::test]
    async fn test_service_fault_is_transport() {
        let backend = Arc::new(ScriptedBackend::failing(|| BackendError::Status {
            status: 500,
            body: "boom".into(),
        }));
        let err = generator(backend).generate(&procrastination()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred while communicating with the Gemini API."
        );
    }

    #[test]
    fn test_request_carries_schema_and_sampling() {
        let backend = Arc::new(ScriptedBackend::replying("[]"));
        let request = generator(backend).build_request(&procrastination());
        assert!(request.prompt.contains("Procrastination"));
        assert_eq!(request.temperature, 0.8);
        assert_eq!(request.top_p, 0.9);
        assert_eq!(
            request.response_schema["items"]["required"],
            json!(["name", "concept", "targetAudience"])
        );
    }
}
