//! Configuration management for the doubt finder

use crate::error::{DoubtFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub errors: ErrorConfig,
    pub output: OutputConfig,
    pub walk: WalkConfig,
}

/// Which failures are printed when a file cannot be scanned.
///
/// The toggles are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorConfig {
    pub show_decode_errors: bool,
    pub show_permission_errors: bool,
    pub show_other_errors: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub pause_on_exit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub follow_symlinks: bool,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            show_decode_errors: false,
            show_permission_errors: true,
            show_other_errors: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            pause_on_exit: true,
        }
    }
}

impl Config {
    /// Load `path`, falling back to defaults when no file exists.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            DoubtFinderError::Configuration(msg) => {
                DoubtFinderError::Configuration(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DoubtFinderError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DoubtFinderError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("doubt-finder")
            .join("config.toml")
    }
}
