//! # Painpoint Skills
//!
//! LLM-backed skills.
//!
//! ## Architecture
//!
//! ```text
//! IdeaGenerator (prompt + schema + parsing)
//!   └── TextBackend (raw text from the model)
//!         └── GeminiBackend (generateContent over HTTPS)
//! ```

pub mod idea_skill;
pub mod llm_backend;
pub mod prompts;

// Re-exports for convenience
pub use idea_skill::{BusinessIdea, ErrorKind, GenerationError, IdeaGenerator};
pub use llm_backend::{BackendError, GeminiBackend, GenerationRequest, TextBackend};
