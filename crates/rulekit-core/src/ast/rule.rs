//! Persisted rule record

use super::node::Node;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored rule: display string plus its tree
///
/// The `rule_name` is the human-facing rule string; `ast` is the source of
/// truth for evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier
    pub id: String,

    /// Rule string as entered or as rebuilt after an edit
    pub rule_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Root of the rule tree
    pub ast: Node,
}

impl Rule {
    /// Create a rule with a fresh id and timestamps
    pub fn new(rule_name: impl Into<String>, ast: Node) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            rule_name: rule_name.into(),
            description: None,
            created_at: now,
            updated_at: now,
            ast,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the rule as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
