//! Engine configuration.

use atelier_core::prompt;
use atelier_error::{ConfigError, EngineResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use typed_builder::TypedBuilder;

fn default_instructions() -> String {
    prompt::SESSION_INSTRUCTIONS.to_string()
}

/// Configuration for the generation engine.
///
/// # Examples
///
/// ```
/// use atelier_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.instructions().contains("expert web developer"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct EngineConfig {
    /// System instructions every session is opened with, including
    /// replacement sessions created during context-window recovery
    #[serde(default = "default_instructions")]
    #[builder(default = default_instructions(), setter(into))]
    instructions: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            instructions: default_instructions(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}
