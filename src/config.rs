//! Optional `.keywordmap.toml` configuration.
//!
//! Every field has a default, so the file is entirely optional and
//! may specify any subset of keys.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::KeywordmapError;

pub const CONFIG_FILE_NAME: &str = ".keywordmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordmapConfig {
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Knobs for the artificial synthesis latency and seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Artificial latency for metric synthesis, in milliseconds.
    #[serde(default = "default_metrics_latency_ms")]
    pub metrics_latency_ms: u64,

    /// Artificial latency for suggestion synthesis, in milliseconds.
    #[serde(default = "default_suggestion_latency_ms")]
    pub suggestion_latency_ms: u64,

    /// Fixed seed for reproducible runs; absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            metrics_latency_ms: default_metrics_latency_ms(),
            suggestion_latency_ms: default_suggestion_latency_ms(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "terminal", "json", or "markdown".
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_metrics_latency_ms() -> u64 {
    800
}

fn default_suggestion_latency_ms() -> u64 {
    600
}

fn default_page_size() -> usize {
    crate::core::DEFAULT_PAGE_SIZE
}

fn default_format() -> String {
    "terminal".to_string()
}

impl KeywordmapConfig {
    /// Load from `.keywordmap.toml` in the current directory, falling
    /// back to defaults when the file is absent.
    pub fn load() -> Result<Self, KeywordmapError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self, KeywordmapError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| {
            KeywordmapError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        toml::from_str(&content).map_err(|source| KeywordmapError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
