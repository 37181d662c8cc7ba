//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Rule string rejected by the pre-check
    #[error("Invalid Rule String Format: {0}")]
    InvalidRuleString(String),

    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] rulekit_parser::ParseError),

    /// Tree operation error (combine, operator names, documents)
    #[error("Rule error: {0}")]
    CoreError(#[from] rulekit_core::CoreError),

    /// Runtime input error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] rulekit_runtime::RuntimeError),

    /// Storage error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] rulekit_repository::RepositoryError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("Invalid configuration".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_invalid_rule_string() {
        let error = SdkError::InvalidRuleString("age ! 30".to_string());
        assert_eq!(error.to_string(), "Invalid Rule String Format: age ! 30");
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse = rulekit_parser::ParseError::InvalidOperandFormat("x".to_string());
        let error: SdkError = parse.into();
        assert!(error.to_string().contains("Invalid operand format: x"));
    }

    #[test]
    fn test_core_error_conversion() {
        let error: SdkError = rulekit_core::CoreError::NoRules.into();
        assert_eq!(error.to_string(), "Rule error: No rules provided");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }
}
