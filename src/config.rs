use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::section::MatchMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub write: WriteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Section title matching
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// "first" (default) or "prefer-exact"
    #[serde(default)]
    pub mode: MatchMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteConfig {
    /// Write through a temp file and rename (default: true)
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            atomic: default_atomic(),
        }
    }
}

fn default_atomic() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdsection/config.toml
    /// - Linux: ~/.config/mdsection/config.toml
    /// - Windows: %APPDATA%/mdsection/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdsection").join("config.toml"))
    }

    /// Load config from the default location, or return defaults if the file
    /// doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                fs::read_to_string(&path)
                    .ok()
                    .and_then(|contents| toml::from_str(&contents).ok())
            })
            .unwrap_or_default()
    }

    /// Load config from an explicit path. Unlike [`Config::load`], a missing or
    /// invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config for a run: the explicit path if given, the default
    /// location otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Ok(Self::load()),
        }
    }
}
