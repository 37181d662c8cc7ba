//! Runtime value types for rule literals and record fields
//!
//! A rule compares a record field against a literal. Both sides are either a
//! number or a string; there is no other coercion than the number-vs-string
//! rules implemented here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Number value (f64 handles both int and float)
    Number(f64),
    /// String value
    String(String),
}

impl Value {
    /// Build a value from a raw literal taken out of a rule string.
    ///
    /// The literal becomes a number when it reads as one, otherwise it stays a
    /// string. Quote stripping is the caller's job and must happen first, so
    /// `'30'` and `30` both end up as `Number(30.0)`.
    pub fn from_literal(raw: &str) -> Self {
        match parse_number(raw) {
            Some(n) => Value::Number(n),
            None => Value::String(raw.to_string()),
        }
    }

    /// Numeric view used by ordering comparisons between a number and a string.
    ///
    /// Strings that do not read as a number map to NaN, so every ordering
    /// comparison against them is false.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::String(s) => parse_number(s).unwrap_or(f64::NAN),
        }
    }

    /// False only for an infinite or NaN number, which the stored document
    /// form cannot represent
    pub fn is_finite(&self) -> bool {
        match self {
            Value::Number(n) => n.is_finite(),
            Value::String(_) => true,
        }
    }
}

/// Parse a numeric literal.
///
/// Accepts decimal and exponent notation, `0x`/`0o`/`0b` integers and the
/// spelled-out `Infinity`. Surrounding whitespace is ignored and a blank string
/// reads as zero. Rust-only spellings such as `inf` or `nan` are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }

    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }

    s.parse::<f64>().ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => {
                if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else if *n == 0.0 {
                    f.write_str("0")
                } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
                    // exponent form with an explicit sign: 1e+21, 1.5e-7
                    let formatted = format!("{:e}", n);
                    match formatted.split_once('e') {
                        Some((mantissa, exp)) if !exp.starts_with('-') => {
                            write!(f, "{}e+{}", mantissa, exp)
                        }
                        _ => f.write_str(&formatted),
                    }
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
