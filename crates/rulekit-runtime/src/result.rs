//! Evaluation result

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a rule tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub success: bool,
    pub message: String,
}

impl EvaluationResult {
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Result for input that is not a rule tree
    pub fn unknown_error() -> Self {
        Self::failed("Unknown error occurred during rule evaluation")
    }
}
