//! rulekit Runtime - evaluation of rule trees against data records
//!
//! This crate walks a [`rulekit_core::Node`] tree against a flat record of
//! attribute values and reports a pass/fail flag with a human-readable message.

pub mod context;
pub mod error;
pub mod evaluator;
pub mod result;

// Re-export main types
pub use context::{record_from_json, Record};
pub use error::{Result, RuntimeError};
pub use evaluator::Evaluator;
pub use result::EvaluationResult;
