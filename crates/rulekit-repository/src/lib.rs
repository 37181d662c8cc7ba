//! Repository abstraction layer for rulekit
//!
//! Stores [`rulekit_core::Rule`] records, each holding its rule tree in the
//! persisted document form.
//!
//! # Backends
//!
//! - [`MemoryRuleRepository`]: process-local map, for tests and embedding
//! - [`FileSystemRuleRepository`]: one JSON document per rule under a root directory
//!
//! # Quick Start
//!
//! ```no_run
//! use rulekit_repository::{FileSystemRuleRepository, RuleRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = FileSystemRuleRepository::new("rules").await?;
//!     for rule in repo.list().await? {
//!         println!("{}: {}", rule.id, rule.rule_name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod file_system;
pub mod memory;
pub mod traits;

// Re-exports
pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileSystemRuleRepository;
pub use memory::MemoryRuleRepository;
pub use traits::RuleRepository;
