//! In-place edits of an existing rule tree
//!
//! Both edits take the tree by exclusive reference and never fail: a node of
//! the wrong kind or an attribute that does not occur leaves the tree as it was.

use super::node::Node;
use super::operator::LogicalOperator;
use crate::types::Value;

impl Node {
    /// Replace the operator of this node.
    ///
    /// Only the node itself is touched, never its descendants. No-op on an
    /// operand node.
    pub fn set_operator(&mut self, new_op: LogicalOperator) -> &mut Self {
        if let Node::Operator { op, .. } = self {
            *op = new_op;
        }
        self
    }

    /// Overwrite the value of every operand reading `attribute`.
    ///
    /// The whole tree is visited, so all matching operands are updated. The
    /// new value is stored as given, without number coercion.
    pub fn set_operand_value(&mut self, attribute: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        let mut updated = 0usize;
        let mut pending: Vec<&mut Node> = vec![&mut *self];

        while let Some(node) = pending.pop() {
            match node {
                Node::Operand(condition) => {
                    if condition.attribute == attribute {
                        condition.value = value.clone();
                        updated += 1;
                    }
                }
                Node::Operator { left, right, .. } => {
                    pending.push(right.as_mut());
                    pending.push(left.as_mut());
                }
            }
        }

        log::debug!("Updated {} operand(s) for attribute '{}'", updated, attribute);
        self
    }
}
