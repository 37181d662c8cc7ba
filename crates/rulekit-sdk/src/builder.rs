//! Builder pattern for RuleEngine

use crate::config::{EngineConfig, StorageConfig};
use crate::error::Result;
use crate::rule_engine::RuleEngine;
use rulekit_parser::ParserOptions;
use rulekit_repository::{FileSystemRuleRepository, MemoryRuleRepository, RuleRepository};
use std::sync::Arc;
use tracing::info;

/// Builder for RuleEngine
///
/// # Example
///
/// ```rust,ignore
/// use rulekit_sdk::{RuleEngineBuilder, StorageConfig};
///
/// let engine = RuleEngineBuilder::new()
///     .with_storage(StorageConfig::file_system("rules"))
///     .validate_input(true)
///     .build()
///     .await?;
/// ```
pub struct RuleEngineBuilder {
    config: EngineConfig,
    repository: Option<Arc<dyn RuleRepository>>,
}

impl RuleEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            repository: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable the pre-check
    pub fn validate_input(mut self, enable: bool) -> Self {
        self.config.validate_input = enable;
        self
    }

    /// Set parser limits
    pub fn with_parser_options(mut self, options: ParserOptions) -> Self {
        self.config.parser = options;
        self
    }

    /// Set storage configuration
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.config.storage = storage;
        self
    }

    /// Use a caller-supplied repository; the storage configuration is ignored
    pub fn with_repository(mut self, repository: Arc<dyn RuleRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the engine
    pub async fn build(self) -> Result<RuleEngine> {
        self.config.validate()?;

        let repository: Arc<dyn RuleRepository> = match self.repository {
            Some(repository) => repository,
            None => match &self.config.storage {
                StorageConfig::Memory => Arc::new(MemoryRuleRepository::new()),
                StorageConfig::FileSystem { path } => {
                    Arc::new(FileSystemRuleRepository::new(path).await?)
                }
            },
        };

        info!(
            validate_input = self.config.validate_input,
            storage = ?self.config.storage,
            "Rule engine initialized"
        );
        Ok(RuleEngine::new(self.config, repository))
    }
}

impl Default for RuleEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
