//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A raw condition does not read as `attribute comparator value`
    #[error("Invalid operand format: {0}")]
    InvalidOperandFormat(String),

    /// Reduction did not end with exactly one root
    #[error("Failed to create AST from rule string: {roots} root nodes remained")]
    Structural { roots: usize },

    /// An operator had fewer than two subtrees to join
    #[error("Failed to create AST from rule string: missing operand for {operator}")]
    MissingOperand { operator: String },

    /// `)` without a matching `(`
    #[error("Unmatched ')' at token {position}")]
    UnmatchedParenthesis { position: usize },

    /// `(` never closed
    #[error("Unclosed '(' in rule string")]
    UnclosedParenthesis,

    /// Parenthesis nesting exceeds the configured limit
    #[error("Parenthesis nesting depth {depth} exceeds maximum {max}")]
    NestingTooDeep { depth: usize, max: usize },

    /// Produced tree exceeds the configured depth
    #[error("Rule tree depth {depth} exceeds maximum {max}")]
    TreeTooDeep { depth: usize, max: usize },
}

impl ParseError {
    /// True for failures caused by the shape of the token stream rather than
    /// by a single malformed condition
    pub fn is_structural(&self) -> bool {
        !matches!(self, ParseError::InvalidOperandFormat(_))
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
