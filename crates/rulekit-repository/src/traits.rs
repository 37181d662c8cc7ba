//! Core trait definition for rule storage

use async_trait::async_trait;
use rulekit_core::Rule;

use crate::RepositoryResult;

/// Storage for rule records
///
/// All implementations must be `Send + Sync` for use across async tasks.
/// The repository does not serialize concurrent edits of the same rule;
/// callers that load, mutate and save must do so one at a time per rule.
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Insert or replace a rule, keyed by its id
    async fn save(&self, rule: &Rule) -> RepositoryResult<()>;

    /// Load a rule by id
    async fn load(&self, id: &str) -> RepositoryResult<Rule>;

    /// Delete a rule by id
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// All stored rules, oldest first
    async fn list(&self) -> RepositoryResult<Vec<Rule>>;

    /// Check whether a rule exists
    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        match self.load(id).await {
            Ok(_) => Ok(true),
            Err(crate::RepositoryError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
