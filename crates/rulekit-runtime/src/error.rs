//! Runtime error types

use thiserror::Error;

/// Runtime error
///
/// Evaluation itself never fails; these errors come from turning external
/// input into a [`crate::Record`].
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Input record is not a JSON object
    #[error("Invalid record: expected a JSON object, got {0}")]
    InvalidRecord(String),

    /// Field value is neither a number nor a string
    #[error("Unsupported value for field '{field}': {value}")]
    UnsupportedValue { field: String, value: String },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
