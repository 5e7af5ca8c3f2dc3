//! # Session State
//!
//! The browsing session: current selection plus the generation state
//! machine `Idle -> Loading -> Success | Error`.
//!
//! The single-flight rule lives here: `begin_generation` refuses to start
//! while a generation is in progress, whatever the caller's UI does.

use super::selection::Selection;
use crate::catalog::{Catalog, PainPoint};
use crate::skills::{BusinessIdea, ErrorKind, GenerationError};
use serde::Serialize;
use thiserror::Error;

/// Errors from session operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please select at least one pain point to generate ideas.")]
    EmptySelection,
    #[error("Ideas are already being generated. Please wait for the current request to finish.")]
    GenerationInFlight,
    #[error("Unknown pain point: {0}")]
    UnknownPainPoint(String),
}

/// Generation lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    Loading,
    Success(Vec<BusinessIdea>),
    Error { message: String, kind: ErrorKind },
}

impl GenerationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error { .. } => "error",
        }
    }
}

/// Serializable view of a session
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Selected pain point names in pick order
    pub selected: Vec<String>,
    /// `idle`, `loading`, `success` or `error`
    pub status: &'static str,
    /// Whether the trigger control should be enabled
    pub can_generate: bool,
    /// Present after a successful generation (possibly empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideas: Option<Vec<BusinessIdea>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

/// One user's selection and generation state
#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: Selection,
    state: GenerationState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == GenerationState::Loading
    }

    /// Toggle a point. Allowed in every state, including while loading.
    pub fn toggle(&mut self, point: &PainPoint) -> bool {
        self.selection.toggle(point)
    }

    /// Toggle a point by name, resolved against the catalog
    pub fn toggle_by_name(&mut self, catalog: &Catalog, name: &str) -> Result<bool, SessionError> {
        let point = catalog
            .find(name)
            .ok_or_else(|| SessionError::UnknownPainPoint(name.to_string()))?;
        Ok(self.toggle(point))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Start a generation.
    ///
    /// Returns the selection snapshot to send to the generator. While
    /// loading the call is rejected and nothing changes. With an empty
    /// selection the session moves to `Error` and no generation starts.
    pub fn begin_generation(&mut self) -> Result<Vec<PainPoint>, SessionError> {
        if self.is_loading() {
            return Err(SessionError::GenerationInFlight);
        }

        if self.selection.is_empty() {
            let err = SessionError::EmptySelection;
            self.state = GenerationState::Error {
                message: err.to_string(),
                kind: ErrorKind::UserInput,
            };
            return Err(err);
        }

        self.state = GenerationState::Loading;
        Ok(self.selection.points().to_vec())
    }

    /// Record the outcome of the generation started by `begin_generation`
    pub fn finish_generation(&mut self, result: Result<Vec<BusinessIdea>, GenerationError>) {
        if !self.is_loading() {
            tracing::warn!(state = self.state.as_str(), "Generation finished outside of loading state");
            return;
        }

        self.state = match result {
            Ok(ideas) => GenerationState::Success(ideas),
            Err(e) => GenerationState::Error {
                message: e.to_string(),
                kind: e.kind(),
            },
        };
    }

    /// Drop an unfinished generation, returning to idle
    pub fn abandon_generation(&mut self) {
        if self.is_loading() {
            self.state = GenerationState::Idle;
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (ideas, error, error_kind) = match &self.state {
            GenerationState::Success(ideas) => (Some(ideas.clone()), None, None),
            GenerationState::Error { message, kind } => (None, Some(message.clone()), Some(*kind)),
            GenerationState::Idle | GenerationState::Loading => (None, None, None),
        };

        SessionSnapshot {
            selected: self.selection.names(),
            status: self.state.as_str(),
            can_generate: !self.is_loading() && !self.selection.is_empty(),
            ideas,
            error,
            error_kind,
        }
    }
}
