//! Search settings, loadable from a TOML file.
//!
//! ```toml
//! engine = "ids"
//! max-depth = 200
//! ```

use crate::search::search_engines::{SearchEngineName, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("max-depth must be positive")]
    ZeroMaxDepth,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub engine: SearchEngineName,
    /// Largest depth limit tried by iterative deepening
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        if config.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        Ok(config)
    }

    pub fn with_engine(self, engine: SearchEngineName) -> Self {
        Self { engine, ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}
