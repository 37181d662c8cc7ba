//! File system based repository implementation
//!
//! Each rule is stored as `<root>/<id>.json`, pretty-printed, with the rule
//! tree in its nested document form.

use async_trait::async_trait;
use rulekit_core::Rule;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::{error::RepositoryError, traits::RuleRepository, RepositoryResult};

const EXTENSION: &str = "json";

/// File system based repository
pub struct FileSystemRuleRepository {
    /// Directory holding one document per rule
    root_path: PathBuf,
}

impl FileSystemRuleRepository {
    /// Open a repository rooted at `root_path`, creating the directory if needed
    pub async fn new<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        let path = root_path.as_ref().to_path_buf();

        fs::create_dir_all(&path).await?;
        if !fs::metadata(&path).await?.is_dir() {
            return Err(RepositoryError::InvalidPath { path });
        }

        Ok(Self { root_path: path })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Path of a rule's document. Ids are used as file names, so anything
    /// that could escape the root directory is refused.
    fn rule_path(&self, id: &str) -> RepositoryResult<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidId { id: id.to_string() });
        }
        Ok(self.root_path.join(format!("{}.{}", id, EXTENSION)))
    }
}

async fn replace_file(tmp: &Path, path: &Path, content: String) -> std::io::Result<()> {
    fs::write(tmp, content).await?;
    fs::rename(tmp, path).await
}

#[async_trait]
impl RuleRepository for FileSystemRuleRepository {
    async fn save(&self, rule: &Rule) -> RepositoryResult<()> {
        let path = self.rule_path(&rule.id)?;
        let content = serde_json::to_string_pretty(rule)?;

        // write a temp file, then rename it over the document
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = replace_file(&tmp, &path, content).await {
            if let Err(cleanup) = fs::remove_file(&tmp).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %tmp.display(), error = %cleanup, "Failed to remove temp file");
                }
            }
            return Err(e.into());
        }

        debug!(rule_id = %rule.id, path = %path.display(), "Saved rule document");
        Ok(())
    }

    async fn load(&self, id: &str) -> RepositoryResult<Rule> {
        let path = self.rule_path(id)?;
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound { id: id.to_string() })
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let path = self.rule_path(id)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(rule_id = %id, "Deleted rule document");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::NotFound { id: id.to_string() })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> RepositoryResult<Vec<Rule>> {
        let mut rules = Vec::new();
        let mut entries = fs::read_dir(&self.root_path).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }

            let content = fs::read_to_string(&path).await?;
            match serde_json::from_str::<Rule>(&content) {
                Ok(rule) => rules.push(rule),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable rule document");
                }
            }
        }

        rules.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(rules)
    }
}
