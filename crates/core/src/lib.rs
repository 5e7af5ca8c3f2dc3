//! # Painpoint Core
//!
//! The "Brain" of the pain point idea generator - catalog, selection,
//! idea generation and the session state machine.
//!
//! ## Architecture
//!
//! - `catalog/` - Static pain point catalog and search filter
//! - `state/` - Selection and session state machine
//! - `skills/` - Idea generation over the Gemini API
//! - `models` - Model and sampling configuration
//! - `config` - Layered application configuration
//! - `studio` - Orchestration tying session and generator together
//! - `view` - Plain-text rendering for the CLI
//!
//! ## Usage
//!
//! ```rust,ignore
//! use painpoint_core::{config::AppConfig, studio::IdeaStudio};
//!
//! let config = AppConfig::load(".painpoint/config.json".as_ref()).await?;
//! let studio = IdeaStudio::new(config.generator());
//! studio.toggle("Procrastination")?;
//! let snapshot = studio.generate().await?;
//! ```

pub mod catalog;
pub mod config;
pub mod models;
pub mod skills;
pub mod state;
pub mod studio;
pub mod view;

pub use catalog::{Catalog, CategoryGroup, PainPoint};
pub use skills::{BusinessIdea, ErrorKind, GenerationError, IdeaGenerator};
pub use state::{Session, SessionError, SessionSnapshot};
pub use studio::IdeaStudio;
