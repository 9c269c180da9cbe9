//! Search configuration.
//!
//! Thresholds and highlight markup can be tuned per deployment in TOML:
//!
//! ```toml
//! [matching]
//! threshold = 0.6
//!
//! [search]
//! threshold = 0.4
//! limit = 20
//! normalize = true
//!
//! [highlight]
//! open = "<b>"
//! close = "</b>"
//! ```

use crate::error::{Result, SearchError};
use crate::{HighlightMarker, DEFAULT_MATCH_THRESHOLD, DEFAULT_SEARCH_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchConfig {
    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub search: CollectionConfig,

    #[serde(default)]
    pub highlight: HighlightMarker,

    /// File the configuration was loaded from
    #[serde(skip)]
    pub path: Option<String>,
}

/// Single text / query matching
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchingConfig {
    /// Minimum score for a match
    #[serde(default = "default_match_threshold")]
    pub threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_match_threshold(),
        }
    }
}

fn default_match_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

/// Collection search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionConfig {
    /// Minimum per-field score for a field to count
    #[serde(default = "default_search_threshold")]
    pub threshold: f64,

    /// Maximum number of results to keep
    #[serde(default)]
    pub limit: Option<usize>,

    /// Fold accents and punctuation before matching
    #[serde(default)]
    pub normalize: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            threshold: default_search_threshold(),
            limit: None,
            normalize: false,
        }
    }
}

fn default_search_threshold() -> f64 {
    DEFAULT_SEARCH_THRESHOLD
}

impl SearchConfig {
    /// Load configuration from a file path, a standard location, or defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        let mut config = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => Self::default(),
        };
        config.path = config_path;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| SearchError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds lie in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        check_threshold("matching.threshold", self.matching.threshold)?;
        check_threshold("search.threshold", self.search.threshold)
    }
}

fn check_threshold(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SearchError::Config(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )))
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".shiksha-search.toml",
        "shiksha-search.toml",
        ".config/shiksha-search.toml",
    ];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<SearchConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SearchError::Config(format!("Failed to read config file {}: {}", path, e)))?;

    toml::from_str(&content)
        .map_err(|e| SearchError::Config(format!("Failed to parse config file {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = SearchConfig::default();
        assert!(config.path.is_none());
        assert_eq!(config.matching.threshold, 0.6);
        assert_eq!(config.search.threshold, 0.5);
        assert_eq!(config.search.limit, None);
        assert_eq!(config.highlight, HighlightMarker::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SearchConfig::from_toml("[search]\nthreshold = 0.4\n").unwrap();
        assert_eq!(config.search.threshold, 0.4);
        assert_eq!(config.matching.threshold, 0.6);
        assert!(!config.search.normalize);
    }

    #[test]
    fn test_highlight_section() {
        let config = SearchConfig::from_toml("[highlight]\nopen = \"**\"\nclose = \"**\"\n").unwrap();
        assert_eq!(config.highlight, HighlightMarker::new("**", "**"));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let err = SearchConfig::from_toml("[matching]\nthreshold = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("matching.threshold"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nlimit = 5\nnormalize = true").unwrap();
        let path = file.path().to_str().unwrap();

        let config = SearchConfig::load(Some(path)).unwrap();
        assert_eq!(config.search.limit, Some(5));
        assert!(config.search.normalize);
        assert_eq!(config.path.as_deref(), Some(path));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = SearchConfig::load(Some("/nonexistent/shiksha-search.toml")).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(SearchConfig::from_toml("[search\nthreshold=").is_err());
    }
}
