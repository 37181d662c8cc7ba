//! Configuration types for RuleEngine

use crate::error::{Result, SdkError};
use rulekit_core::MAX_DOCUMENT_DEPTH;
use rulekit_parser::ParserOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main engine configuration
///
/// ```yaml
/// validate_input: true
/// parser:
///   max_nesting: 16
///   max_tree_depth: 64
/// storage:
///   type: file_system
///   path: ./rules
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Run the advisory pre-check before parsing rule strings
    pub validate_input: bool,

    /// Parser limits
    pub parser: ParserOptions,

    /// Where rules are stored
    pub storage: StorageConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            validate_input: true,
            parser: ParserOptions::default(),
            storage: StorageConfig::Memory,
        }
    }

    /// Parse a YAML configuration
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| SdkError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse a YAML configuration file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Check the configuration before an engine is built.
    ///
    /// Trees deeper than [`MAX_DOCUMENT_DEPTH`] could be stored but never
    /// read back, so `parser.max_tree_depth` may not exceed it.
    pub fn validate(&self) -> Result<()> {
        if self.parser.max_tree_depth > MAX_DOCUMENT_DEPTH {
            return Err(SdkError::ConfigError(format!(
                "parser.max_tree_depth {} exceeds the storable maximum {}",
                self.parser.max_tree_depth, MAX_DOCUMENT_DEPTH
            )));
        }
        if self.parser.max_tree_depth == 0 {
            return Err(SdkError::ConfigError(
                "parser.max_tree_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Enable or disable the pre-check
    pub fn validate_input(mut self, enable: bool) -> Self {
        self.validate_input = enable;
        self
    }

    /// Set parser limits
    pub fn with_parser_options(mut self, options: ParserOptions) -> Self {
        self.parser = options;
        self
    }

    /// Set storage configuration
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Process-local storage
    Memory,
    /// One JSON document per rule under `path`
    FileSystem { path: PathBuf },
}

impl StorageConfig {
    pub fn file_system(path: impl Into<PathBuf>) -> Self {
        StorageConfig::FileSystem { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new()
            .validate_input(false)
            .with_storage(StorageConfig::file_system("rules"));

        assert!(!config.validate_input);
        assert_eq!(config.storage, StorageConfig::file_system("rules"));
        assert_eq!(config.parser, ParserOptions::default());
    }

    #[test]
    fn test_from_yaml() {
        let config = EngineConfig::from_yaml_str(
            r#"
validate_input: false
parser:
  max_nesting: 4
storage:
  type: file_system
  path: /var/lib/rulekit
"#,
        )
        .unwrap();

        assert!(!config.validate_input);
        assert_eq!(config.parser.max_nesting, 4);
        assert_eq!(config.parser.max_tree_depth, 100);
        assert_eq!(config.storage, StorageConfig::file_system("/var/lib/rulekit"));
    }

    #[test]
    fn test_from_yaml_defaults() {
        let config = EngineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validate_tree_depth() {
        assert!(EngineConfig::new().validate().is_ok());

        let config = EngineConfig::new().with_parser_options(ParserOptions {
            max_nesting: 32,
            max_tree_depth: MAX_DOCUMENT_DEPTH + 1,
        });
        assert!(matches!(config.validate(), Err(SdkError::ConfigError(_))));

        let config = EngineConfig::new().with_parser_options(ParserOptions {
            max_nesting: 32,
            max_tree_depth: 0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_yaml_invalid_storage() {
        let err = EngineConfig::from_yaml_str("storage:\n  type: redis\n").unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }
}
