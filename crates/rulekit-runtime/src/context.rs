//! Evaluation input record

use crate::error::{Result, RuntimeError};
use rulekit_core::Value;
use std::collections::HashMap;

/// Flat attribute → value record a rule is evaluated against
pub type Record = HashMap<String, Value>;

/// Build a record from a JSON object.
///
/// Every field must hold a number or a string.
pub fn record_from_json(json: serde_json::Value) -> Result<Record> {
    let map = match json {
        serde_json::Value::Object(map) => map,
        other => return Err(RuntimeError::InvalidRecord(json_kind(&other).to_string())),
    };

    map.into_iter()
        .map(|(field, value)| match value {
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Ok((field, Value::Number(f))),
                None => Err(RuntimeError::UnsupportedValue {
                    field,
                    value: n.to_string(),
                }),
            },
            serde_json::Value::String(s) => Ok((field, Value::String(s))),
            other => Err(RuntimeError::UnsupportedValue {
                field,
                value: other.to_string(),
            }),
        })
        .collect()
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
