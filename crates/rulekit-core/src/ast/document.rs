//! Persisted document form of the rule tree
//!
//! Trees are stored and exchanged as nested three-field documents:
//!
//! ```json
//! {
//!   "type": "operator",
//!   "value": "AND",
//!   "left":  { "type": "operand", "value": { "attribute": "age", "operator": ">", "value": 30 }, "left": null, "right": null },
//!   "right": { "type": "operand", "value": { "attribute": "salary", "operator": "<", "value": 5000 }, "left": null, "right": null }
//! }
//! ```
//!
//! The document is loosely typed on purpose; converting it into a [`Node`]
//! checks that the kind, payload and children agree.
//!
//! Writing a tree fails if an operand holds a non-finite number. Reading
//! nests one JSON object per tree level, so serde_json's recursion limit caps
//! the depth of a tree that can be read back; see [`MAX_DOCUMENT_DEPTH`].

use super::condition::Condition;
use super::node::Node;
use super::operator::LogicalOperator;
use crate::error::CoreError;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Deepest tree whose stored rule document reads back through serde_json's
/// default recursion limit of 128, with room for the enclosing rule object
/// and the operand payload.
pub const MAX_DOCUMENT_DEPTH: usize = 120;

/// Node kind tag of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Operand,
    Operator,
}

/// One level of the persisted tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Operand condition object, or the operator name
    pub value: serde_json::Value,

    #[serde(default)]
    pub left: Option<Box<NodeDocument>>,

    #[serde(default)]
    pub right: Option<Box<NodeDocument>>,
}

impl TryFrom<&Node> for NodeDocument {
    type Error = CoreError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Operand(condition) => Ok(NodeDocument {
                kind: NodeKind::Operand,
                value: json!({
                    "attribute": condition.attribute,
                    "operator": condition.operator.as_str(),
                    "value": value_to_json(&condition.value)?,
                }),
                left: None,
                right: None,
            }),
            Node::Operator { op, left, right } => Ok(NodeDocument {
                kind: NodeKind::Operator,
                value: serde_json::Value::String(op.as_str().to_string()),
                left: Some(Box::new(NodeDocument::try_from(left.as_ref())?)),
                right: Some(Box::new(NodeDocument::try_from(right.as_ref())?)),
            }),
        }
    }
}

impl TryFrom<NodeDocument> for Node {
    type Error = CoreError;

    fn try_from(doc: NodeDocument) -> Result<Self, Self::Error> {
        match doc.kind {
            NodeKind::Operand => {
                if doc.left.is_some() || doc.right.is_some() {
                    return Err(CoreError::InvalidDocument(
                        "operand node must not have children".to_string(),
                    ));
                }
                let condition: Condition = serde_json::from_value(doc.value).map_err(|e| {
                    CoreError::InvalidDocument(format!("invalid operand payload: {}", e))
                })?;
                Ok(Node::Operand(condition))
            }
            NodeKind::Operator => {
                let op = match doc.value.as_str() {
                    Some(name) => name.parse::<LogicalOperator>()?,
                    None => {
                        return Err(CoreError::InvalidDocument(format!(
                            "operator payload must be \"AND\" or \"OR\", got {}",
                            doc.value
                        )))
                    }
                };
                let (left, right) = match (doc.left, doc.right) {
                    (Some(left), Some(right)) => (left, right),
                    _ => {
                        return Err(CoreError::InvalidDocument(format!(
                            "{} node requires two children",
                            op
                        )))
                    }
                };
                Ok(Node::operator(
                    op,
                    Node::try_from(*left)?,
                    Node::try_from(*right)?,
                ))
            }
        }
    }
}

/// JSON has no spelling for infinities or NaN, so those values are refused
/// rather than written as `null`.
fn value_to_json(value: &Value) -> Result<serde_json::Value, CoreError> {
    match value {
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .ok_or_else(|| CoreError::NonFiniteNumber(value.to_string())),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
    }
}
