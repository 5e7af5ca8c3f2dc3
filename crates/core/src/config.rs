//! # Configuration
//!
//! Layered application config: built-in defaults, then the persisted
//! `.painpoint/config.json`, then environment variables. The API key is only
//! ever read from the environment and is passed explicitly to the backend.

use crate::models::ModelConfig;
use crate::skills::{GeminiBackend, IdeaGenerator};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Default location of the persisted config, relative to the working dir
pub const CONFIG_PATH: &str = ".painpoint/config.json";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variables, in lookup order where several apply
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
pub const MODEL_VAR: &str = "PAINPOINT_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings persisted on disk. Every field is optional; missing fields fall
/// back to defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct PersistedConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub port: Option<u16>,
}

impl PersistedConfig {
    /// Load from disk. A missing file yields the empty config.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective configuration for one process
#[derive(Clone)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub api_key: Option<String>,
    pub port: u16,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            api_key: None,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Resolve from a persisted config and an environment lookup
    pub fn resolve<F>(persisted: PersistedConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        let defaults = ModelConfig::default();

        let model = ModelConfig {
            model: lookup(MODEL_VAR)
                .or(persisted.model)
                .unwrap_or(defaults.model),
            base_url: lookup(BASE_URL_VAR).or(persisted.base_url),
            temperature: persisted.temperature.unwrap_or(defaults.temperature),
            top_p: persisted.top_p.unwrap_or(defaults.top_p),
        };

        Self {
            model,
            api_key: API_KEY_VARS.iter().find_map(|key| lookup(*key)),
            port: persisted.port.unwrap_or(DEFAULT_PORT),
        }
    }

    /// Load the persisted config at `path` and overlay the process environment
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let persisted = PersistedConfig::load(path).await?;
        Ok(Self::resolve(persisted, |key| std::env::var(key).ok()))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Idea generator backed by Gemini with this config's credential
    pub fn generator(&self) -> IdeaGenerator {
        let backend = GeminiBackend::new(self.model.clone(), self.api_key.clone());
        IdeaGenerator::new(Arc::new(backend), self.model.clone())
    }
}
