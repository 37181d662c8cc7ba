//! Operand condition: one `attribute comparator value` comparison

use super::operator::Comparator;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single comparison stored in an operand node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Record field the condition reads
    pub attribute: String,
    /// Comparison applied between the record field and `value`
    pub operator: Comparator,
    /// Literal the record field is compared against
    pub value: Value,
}

impl Condition {
    pub fn new(attribute: impl Into<String>, operator: Comparator, value: impl Into<Value>) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Renders the condition as rule-string text.
///
/// String values are quoted so numeric-looking strings survive a re-parse
/// only as far as the number coercion allows.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::String(s) if s.contains('\'') => {
                write!(f, "{} {} \"{}\"", self.attribute, self.operator, s)
            }
            Value::String(s) => write!(f, "{} {} '{}'", self.attribute, self.operator, s),
            Value::Number(_) => write!(f, "{} {} {}", self.attribute, self.operator, self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_number() {
        let cond = Condition::new("age", Comparator::Gt, 30);
        assert_eq!(cond.to_string(), "age > 30");
    }

    #[test]
    fn test_display_string() {
        let cond = Condition::new("department", Comparator::Eq, "Sales");
        assert_eq!(cond.to_string(), "department = 'Sales'");

        let quoted = Condition::new("name", Comparator::Eq, "O'Neil");
        assert_eq!(quoted.to_string(), "name = \"O'Neil\"");
    }

    #[test]
    fn test_serde_field_names() {
        let cond = Condition::new("salary", Comparator::Lt, 5000);
        let json = serde_json::to_value(&cond).unwrap();
        assert_eq!(json["attribute"], "salary");
        assert_eq!(json["operator"], "<");
        assert_eq!(json["value"], 5000.0);
    }
}
