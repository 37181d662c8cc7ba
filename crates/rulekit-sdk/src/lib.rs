//! rulekit SDK
//!
//! High-level API for creating, combining, editing, storing and evaluating
//! eligibility rules.
//!
//! ```rust,ignore
//! use rulekit_sdk::{RuleEngineBuilder, Value};
//!
//! let engine = RuleEngineBuilder::new().build().await?;
//! let rule = engine.create_rule("age > 30 AND department = 'Sales'", None).await?;
//!
//! let mut record = rulekit_sdk::Record::new();
//! record.insert("age".to_string(), Value::from(35));
//! record.insert("department".to_string(), Value::from("Sales"));
//!
//! let result = engine.evaluate_rule(&rule.id, &record).await?;
//! assert!(result.success);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod rule_engine;

// Re-export main types
pub use builder::RuleEngineBuilder;
pub use config::{EngineConfig, StorageConfig};
pub use error::{Result, SdkError};
pub use rule_engine::RuleEngine;

// Re-export commonly used types from dependencies
pub use rulekit_core::{LogicalOperator, Node, Rule, Value};
pub use rulekit_parser::ParserOptions;
pub use rulekit_runtime::{EvaluationResult, Record};
