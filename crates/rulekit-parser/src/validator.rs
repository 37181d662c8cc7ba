//! Advisory rule string pre-check
//!
//! Two independent checks, both must pass:
//! - somewhere in the string a `word (AND|OR|>|<|=) word` pattern appears
//!   (case-insensitive, the right-hand word optionally quoted)
//! - parentheses are balanced
//!
//! This is a sanity filter, not a grammar. It accepts strings that fail to
//! parse and rejects some that would parse; [`crate::RuleParser`] is the
//! authority on well-formedness.

use once_cell::sync::Lazy;
use regex::Regex;

static RULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s*[0-9A-Za-z_]+\s*(AND|OR|>|<|=)\s*(['"]?[0-9A-Za-z_]+['"]?)"#)
        .expect("rule pattern is a valid regex")
});

/// Run the pre-check on a rule string
pub fn validate_rule_string(rule_string: &str) -> bool {
    let valid_format = RULE_PATTERN.is_match(rule_string);
    let balanced = is_balanced(rule_string);

    if !valid_format || !balanced {
        log::debug!(
            "Rule string rejected (format: {}, balanced: {}): {}",
            valid_format,
            balanced,
            rule_string
        );
    }

    valid_format && balanced
}

/// Parenthesis balance: a `)` with nothing open fails immediately
fn is_balanced(s: &str) -> bool {
    let mut open = 0usize;
    for c in s.chars() {
        match c {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    return false;
                }
                open -= 1;
            }
            _ => {}
        }
    }
    open == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_condition() {
        assert!(validate_rule_string("age > 30"));
        assert!(validate_rule_string("department = 'Sales'"));
        assert!(validate_rule_string("age>30"));
    }

    #[test]
    fn test_compound_rule() {
        assert!(validate_rule_string(
            "((age > 30 AND department = 'Sales') OR (age < 25 AND department = 'Marketing')) AND (salary > 50000 OR experience > 5)"
        ));
    }

    #[test]
    fn test_case_insensitive_keywords() {
        assert!(validate_rule_string("a and b"));
    }

    #[test]
    fn test_rejects_unknown_comparator() {
        assert!(!validate_rule_string("age ! 30"));
        assert!(!validate_rule_string(""));
    }

    #[test]
    fn test_rejects_unbalanced() {
        assert!(!validate_rule_string("(age > 30"));
        assert!(!validate_rule_string("age > 30)"));
        assert!(!validate_rule_string(")age > 30("));
    }

    #[test]
    fn test_is_permissive() {
        // passes the pre-check but cannot parse
        assert!(validate_rule_string("age > 30 AND"));
    }
}
