//! rulekit Core - Core types and tree operations for the rulekit rule engine
//!
//! This crate provides the fundamental types shared across the rulekit crates:
//! - Value types for rule literals and record fields
//! - The rule AST (operand and operator nodes) and its document form
//! - Tree operations that work on an existing AST (combine, mutate)
//! - The persisted `Rule` record
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{
    combine, combine_uniform, combine_with_max_depth, Comparator, Condition, LogicalOperator, Node, Rule,
    DEFAULT_MAX_TREE_DEPTH, MAX_DOCUMENT_DEPTH,
};
pub use error::{CoreError, Result};
pub use types::Value;
