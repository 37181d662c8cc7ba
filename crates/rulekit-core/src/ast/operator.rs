//! Operators for rule expressions

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator of an operand condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Strict equality (=)
    #[serde(rename = "=")]
    Eq,
}

impl Comparator {
    /// Rule-string spelling of the comparator
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Eq => "=",
        }
    }
}

impl FromStr for Comparator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Comparator::Gt),
            "<" => Ok(Comparator::Lt),
            "=" => Ok(Comparator::Eq),
            other => Err(CoreError::InvalidComparator(other.to_string())),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean operator joining two subtrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl LogicalOperator {
    /// Binding strength; AND binds tighter than OR
    pub fn precedence(&self) -> u8 {
        match self {
            LogicalOperator::And => 2,
            LogicalOperator::Or => 1,
        }
    }

    /// Rule-string spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

impl FromStr for LogicalOperator {
    type Err = CoreError;

    /// Case-sensitive: only `AND` and `OR` are operators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(LogicalOperator::And),
            "OR" => Ok(LogicalOperator::Or),
            other => Err(CoreError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
