//! Configuration loading.
//!
//! Config is TOML with every field optional; an absent or empty file yields
//! the defaults. Loading failures are typed so the caller can distinguish a
//! missing file from a malformed one.

use crate::layout::LayoutMetrics;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Feed configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Records requested per page.
    pub page_size: usize,
    /// Line limit applied to new entries; 0 disables truncation entirely.
    pub default_max_lines: u16,
    /// Layout constants.
    pub metrics: LayoutMetrics,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            default_max_lines: 3,
            metrics: LayoutMetrics::default(),
        }
    }
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or holds unknown fields.
    #[error("failed to parse config file {path}: {message}")]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

impl FeedConfig {
    /// Load configuration from `path`. A missing file is not an error and
    /// yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Conventional config file location, when a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("revfeed").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = FeedConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.default_max_lines, 3);
        assert_eq!(config.metrics, LayoutMetrics::default());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: FeedConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: FeedConfig = toml::from_str("page_size = 50").expect("parses");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.default_max_lines, 3);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<FeedConfig>("page_sise = 50").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config =
            FeedConfig::load(Path::new("/nonexistent/revfeed/config.toml")).expect("defaults");
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = std::env::temp_dir().join("revfeed-config-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("bad.toml");
        std::fs::write(&path, "page_size = [").expect("fixture");
        let err = FeedConfig::load(&path).expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
