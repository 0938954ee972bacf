//! Configuration loading with tiered overrides.
//!
//! Precedence, lowest to highest: built-in defaults, user config
//! (`~/.taskboard/config.yaml`), project config (`./taskboard.yaml`), the
//! `TASKBOARD_API_URL` environment variable, and finally CLI flags (applied
//! by the caller).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "TASKBOARD_API_URL";

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the task backend.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

/// Interactive UI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Tick interval driving highlight expiry, in milliseconds.
    pub tick_ms: u64,
    /// How long a task stays highlighted after activation, in milliseconds.
    pub highlight_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            highlight_ms: 2000,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the standard tiers. An explicit path, when
    /// given, replaces the file tiers entirely but still yields to the
    /// environment override.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => {
                let mut config = Config::default();
                for path in Self::discover_paths() {
                    if path.exists() {
                        debug!(path = %path.display(), "loading config file");
                        config = Self::from_file(&path)?;
                    }
                }
                config
            }
        };

        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                config.api.base_url = url;
            }
        }
        Ok(config)
    }

    /// Parse a single YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Candidate config files, lowest priority first.
    fn discover_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".taskboard").join("config.yaml"));
        }
        paths.push(PathBuf::from("taskboard.yaml"));
        paths
    }
}
