//! Abstract Syntax Tree (AST) definitions for rulekit
//!
//! This module contains:
//! - Comparators and logical operators
//! - Operand conditions (`attribute comparator value`)
//! - The binary rule tree and its persisted document form
//! - Tree operations: combining trees, in-place mutation
//! - The persisted rule record

pub mod combine;
pub mod condition;
pub mod document;
pub mod mutate;
pub mod node;
pub mod operator;
pub mod rule;

pub use combine::{combine, combine_uniform, combine_with_max_depth, DEFAULT_MAX_TREE_DEPTH};
pub use condition::Condition;
pub use document::{NodeDocument, NodeKind, MAX_DOCUMENT_DEPTH};
pub use node::Node;
pub use operator::{Comparator, LogicalOperator};
pub use rule::Rule;
