//! Configuration for the extraction core.
//!
//! Settings are handed in by the host service, either constructed directly or
//! parsed from TOML. Nothing here consults environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on extracted characters forwarded to the model.
pub const DEFAULT_MAX_CHARS: usize = 12_000;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "officio=warn";

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: max_chars must be greater than zero")]
    ZeroMaxChars,
}

/// Service-level settings for extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Characters of extracted text kept before the model call.
    pub max_chars: usize,
    /// Directory for temporary decoding files. System temp dir when unset.
    pub scratch_dir: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `officio=debug`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            scratch_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chars == 0 {
            return Err(ConfigError::ZeroMaxChars);
        }
        Ok(())
    }
}
