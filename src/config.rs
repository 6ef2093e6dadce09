//! Configuration for the interpolation engine

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration or value files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Limits applied while interpolating a template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpolationConfig {
    /// Maximum number of rewrite passes before giving up on reaching a
    /// fixed point (at least one pass always runs)
    pub max_passes: usize,

    /// Maximum nesting depth of optional sections
    pub max_depth: usize,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            max_passes: 256,
            max_depth: 64,
        }
    }
}

impl InterpolationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of rewrite passes
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Set the maximum nesting depth of optional sections
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InterpolationConfig::default();
        assert_eq!(config.max_passes, 256);
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_builder_pattern() {
        let config = InterpolationConfig::new()
            .with_max_passes(8)
            .with_max_depth(2);

        assert_eq!(config.max_passes, 8);
        assert_eq!(config.max_depth, 2);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = InterpolationConfig::from_toml_str("max_passes = 10").expect("Should parse");
        assert_eq!(config.max_passes, 10);
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = InterpolationConfig::from_toml_str("").expect("Should parse");
        assert_eq!(config, InterpolationConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(InterpolationConfig::from_toml_str("max_pases = 10").is_err());
    }

    #[test]
    fn test_missing_file_error() {
        let result = InterpolationConfig::from_file(Path::new("/nonexistent/limits.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
