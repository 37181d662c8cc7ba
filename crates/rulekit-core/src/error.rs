//! Error types for rulekit Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Combining requires at least one tree
    #[error("No rules provided")]
    NoRules,

    /// Combining `n` trees requires exactly `n - 1` operators
    #[error("Invalid number of operators: {operators} operators for {rules} rules")]
    OperatorCountMismatch { rules: usize, operators: usize },

    /// Logical operator other than AND / OR
    #[error("Invalid operator. Must be 'AND' or 'OR', got '{0}'")]
    InvalidOperator(String),

    /// Comparator other than `>`, `<`, `=`
    #[error("Invalid comparator: {0}")]
    InvalidComparator(String),

    /// Tree would exceed the depth limit
    #[error("Rule tree depth {depth} exceeds maximum {max}")]
    TreeTooDeep { depth: usize, max: usize },

    /// Number with no finite value; the document form cannot hold it
    #[error("Non-finite number cannot be stored in a rule: {0}")]
    NonFiniteNumber(String),

    /// Persisted tree document has an invalid shape
    #[error("Invalid AST document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
