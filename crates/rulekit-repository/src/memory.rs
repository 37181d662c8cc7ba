//! In-memory repository implementation

use async_trait::async_trait;
use rulekit_core::Rule;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{error::RepositoryError, traits::RuleRepository, RepositoryResult};

/// Process-local rule store
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleRepository {
    rules: Arc<RwLock<HashMap<String, Rule>>>,
}

impl MemoryRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rules
    pub async fn len(&self) -> usize {
        self.rules.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rules.read().await.is_empty()
    }
}

#[async_trait]
impl RuleRepository for MemoryRuleRepository {
    async fn save(&self, rule: &Rule) -> RepositoryResult<()> {
        debug!(rule_id = %rule.id, "Saving rule in memory");
        self.rules.write().await.insert(rule.id.clone(), rule.clone());
        Ok(())
    }

    async fn load(&self, id: &str) -> RepositoryResult<Rule> {
        self.rules
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.rules
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }

    async fn list(&self) -> RepositoryResult<Vec<Rule>> {
        let mut rules: Vec<Rule> = self.rules.read().await.values().cloned().collect();
        rules.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(rules)
    }
}
