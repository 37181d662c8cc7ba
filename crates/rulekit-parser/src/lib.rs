//! rulekit Parser - rule string to AST parser
//!
//! Turns rule strings such as `age > 30 AND (department = 'Sales' OR salary < 50000)`
//! into [`rulekit_core::Node`] trees.
//!
//! The pipeline is:
//! - [`validator`]: a cheap advisory pre-check (pattern + bracket balance)
//! - [`tokenizer`]: splits the string into parentheses, `AND`/`OR` and raw conditions
//! - [`condition`]: turns one raw condition into an `attribute comparator value` triple
//! - [`rule_parser`]: shunting-yard reduction of the token stream into one tree

pub mod condition;
pub mod error;
pub mod rule_parser;
pub mod tokenizer;
pub mod validator;

// Re-export main parser types
pub use condition::parse_condition;
pub use error::{ParseError, Result};
pub use rule_parser::{ParserOptions, RuleParser};
pub use tokenizer::{tokenize, Token};
pub use validator::validate_rule_string;

/// Parse a rule string with default options
pub fn create_rule(rule_string: &str) -> Result<rulekit_core::Node> {
    RuleParser::new().parse(rule_string)
}
