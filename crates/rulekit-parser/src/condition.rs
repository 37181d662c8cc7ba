//! Raw condition parser
//!
//! Parses one raw condition such as `age > 30` or `department = 'Sales'`.
//!
//! The grammar is a word, optional spaces, one of `>` `<` `=`, optional
//! spaces, then a quoted string or a bare word. The pattern is searched for
//! anywhere in the fragment rather than anchored at both ends.

use crate::error::{ParseError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rulekit_core::{Comparator, Condition, Value};

static CONDITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([0-9A-Za-z_]+)\s*(>|<|=)\s*(['"][^'"]+['"]|[0-9A-Za-z_]+)"#)
        .expect("condition pattern is a valid regex")
});

/// Parse a raw condition into an `attribute comparator value` triple.
///
/// Quotes are stripped from the value before number coercion, so `'30'`
/// becomes the number 30 just like `30`. A literal that reads as an infinite
/// number (`Infinity`, `1e400`) is rejected, since a stored rule cannot hold it.
pub fn parse_condition(fragment: &str) -> Result<Condition> {
    let Some(caps) = CONDITION.captures(fragment) else {
        log::warn!("Invalid operand format: {}", fragment);
        return Err(ParseError::InvalidOperandFormat(fragment.to_string()));
    };

    let (Some(attribute), Some(comparator), Some(raw_value)) = (caps.get(1), caps.get(2), caps.get(3))
    else {
        return Err(ParseError::InvalidOperandFormat(fragment.to_string()));
    };

    let operator = comparator
        .as_str()
        .parse::<Comparator>()
        .map_err(|_| ParseError::InvalidOperandFormat(fragment.to_string()))?;
    let unquoted = raw_value.as_str().replace(['\'', '"'], "");
    let value = Value::from_literal(&unquoted);
    if !value.is_finite() {
        log::warn!("Non-finite literal in condition: {}", fragment);
        return Err(ParseError::InvalidOperandFormat(fragment.to_string()));
    }

    Ok(Condition {
        attribute: attribute.as_str().to_string(),
        operator,
        value,
    })
}
