use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Translator configuration module
/// This module handles the configuration surface consumed by the core:
/// pacing between backend calls, title-case normalization and the cache
/// base directory.
/// Configuration for a translator instance
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    /// Minimum milliseconds between two backend calls
    #[serde(default = "default_ms_between_calls")]
    pub ms_between_calls: u64,

    /// Whether to title-case translated output
    #[serde(default = "default_true")]
    pub title_case: bool,

    /// Base directory for the durable translation caches
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
}

impl TranslatorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.cache_dir.as_os_str().is_empty() {
            return Err(anyhow!("Cache directory must not be empty"));
        }
        Ok(())
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            ms_between_calls: default_ms_between_calls(),
            title_case: default_true(),
            cache_dir: default_cache_dir(),
        }
    }
}

fn default_ms_between_calls() -> u64 {
    20
}

fn default_true() -> bool {
    true
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("automtl")
}
