//! # Idea Studio
//!
//! Top-level orchestration: owns the catalog, one `Session` and the
//! `IdeaGenerator`, and drives the generation state machine.
//!
//! The session lock is only held for state transitions, never across the
//! remote call, so toggling and filtering stay responsive while loading.

use crate::catalog::{self, Catalog, CategoryGroup};
use crate::skills::IdeaGenerator;
use crate::state::{Session, SessionError, SessionSnapshot};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Catalog, session and generator for one user
pub struct IdeaStudio {
    catalog: Catalog,
    session: Mutex<Session>,
    generator: IdeaGenerator,
}

/// Resets the session to idle if a generation future is dropped mid-flight
struct InFlight<'a> {
    session: &'a Mutex<Session>,
    finished: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("Generation dropped before completion, returning to idle");
            lock(self.session).abandon_generation();
        }
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

impl IdeaStudio {
    /// Studio over the built-in catalog
    pub fn new(generator: IdeaGenerator) -> Self {
        Self::with_catalog(Catalog::builtin().clone(), generator)
    }

    pub fn with_catalog(catalog: Catalog, generator: IdeaGenerator) -> Self {
        Self {
            catalog,
            session: Mutex::new(Session::new()),
            generator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog grouped by category, filtered by a search term
    pub fn search(&self, term: &str) -> Vec<CategoryGroup> {
        catalog::filter(term, &self.catalog)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        lock(&self.session).snapshot()
    }

    /// Toggle a pain point by name
    pub fn toggle(&self, name: &str) -> Result<SessionSnapshot, SessionError> {
        let mut session = lock(&self.session);
        let selected = session.toggle_by_name(&self.catalog, name)?;
        tracing::debug!(name, selected, "Toggled pain point");
        Ok(session.snapshot())
    }

    pub fn clear_selection(&self) -> SessionSnapshot {
        let mut session = lock(&self.session);
        session.clear_selection();
        session.snapshot()
    }

    /// Run one generation for the current selection.
    ///
    /// An empty selection is reported in the returned snapshot as a
    /// user-input error. A trigger while another generation is running is
    /// rejected with `GenerationInFlight` and leaves the session untouched.
    pub async fn generate(&self) -> Result<SessionSnapshot, SessionError> {
        let points = {
            let mut session = lock(&self.session);
            match session.begin_generation() {
                Ok(points) => points,
                Err(SessionError::EmptySelection) => {
                    tracing::info!("Generation requested with no pain points selected");
                    return Ok(session.snapshot());
                }
                Err(e) => return Err(e),
            }
        };

        let mut guard = InFlight {
            session: &self.session,
            finished: false,
        };

        let result = self.generator.generate(&points).await;

        let mut session = lock(&self.session);
        session.finish_generation(result);
        guard.finished = true;
        Ok(session.snapshot())
    }
}
