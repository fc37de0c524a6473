//! Error types for keywordmap's fallible boundaries.
//!
//! Synthesis and filtering are total by design and never fail; errors
//! only arise at the edges (config files, output writing, terminal
//! setup). Commands surface them through `anyhow::Result`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeywordmapError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file already exists at {path} (use --force to overwrite)")]
    ConfigExists { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = KeywordmapError::ConfigExists {
            path: PathBuf::from(".keywordmap.toml"),
        };
        assert!(err.to_string().contains(".keywordmap.toml"));
    }
}
