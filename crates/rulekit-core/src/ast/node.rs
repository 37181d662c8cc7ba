//! Rule tree nodes
//!
//! A rule is a strict binary tree. Leaves are operand conditions, internal
//! nodes join exactly two subtrees with AND / OR. The two shapes are separate
//! variants, so an operand with children or an operator without them cannot
//! be built.

use super::condition::Condition;
use super::document::NodeDocument;
use super::operator::LogicalOperator;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Rule AST node
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "NodeDocument")]
pub enum Node {
    /// Leaf comparison (`age > 30`)
    Operand(Condition),

    /// Boolean combination of two subtrees
    Operator {
        op: LogicalOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create an operand node
    pub fn operand(condition: Condition) -> Self {
        Node::Operand(condition)
    }

    /// Create an operator node owning both children
    pub fn operator(op: LogicalOperator, left: Node, right: Node) -> Self {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Node::Operand(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Node::Operator { .. })
    }

    /// The condition of an operand node
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            Node::Operand(condition) => Some(condition),
            Node::Operator { .. } => None,
        }
    }

    /// The operator of an operator node
    pub fn logical_operator(&self) -> Option<LogicalOperator> {
        match self {
            Node::Operator { op, .. } => Some(*op),
            Node::Operand(_) => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Operator { left, .. } => Some(left),
            Node::Operand(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Operator { right, .. } => Some(right),
            Node::Operand(_) => None,
        }
    }

    /// Number of levels in the tree; a single operand has depth 1
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut pending = vec![(self, 1usize)];

        while let Some((node, depth)) = pending.pop() {
            max_depth = max_depth.max(depth);
            if let Node::Operator { left, right, .. } = node {
                pending.push((left.as_ref(), depth + 1));
                pending.push((right.as_ref(), depth + 1));
            }
        }

        max_depth
    }

    /// All operand conditions, left to right
    pub fn conditions(&self) -> Vec<&Condition> {
        let mut conditions = Vec::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node {
                Node::Operand(condition) => conditions.push(condition),
                Node::Operator { left, right, .. } => {
                    pending.push(right.as_ref());
                    pending.push(left.as_ref());
                }
            }
        }

        conditions
    }
}

/// Serializes through the document form; fails on values the document
/// cannot hold.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeDocument::try_from(self)
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

/// Renders the tree back into rule-string form.
///
/// Operator children are parenthesised, so the output parses back into an
/// equal tree regardless of precedence.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand(condition) => write!(f, "{}", condition),
            Node::Operator { op, left, right } => {
                write_child(f, left)?;
                write!(f, " {} ", op)?;
                write_child(f, right)
            }
        }
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: &Node) -> fmt::Result {
    if child.is_operator() {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Comparator;

    fn age_gt_30() -> Node {
        Node::operand(Condition::new("age", Comparator::Gt, 30))
    }

    fn salary_lt_5000() -> Node {
        Node::operand(Condition::new("salary", Comparator::Lt, 5000))
    }

    #[test]
    fn test_operand_accessors() {
        let node = age_gt_30();
        assert!(node.is_operand());
        assert_eq!(node.condition().unwrap().attribute, "age");
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert!(node.logical_operator().is_none());
    }

    #[test]
    fn test_operator_accessors() {
        let node = Node::operator(LogicalOperator::And, age_gt_30(), salary_lt_5000());
        assert!(node.is_operator());
        assert_eq!(node.logical_operator(), Some(LogicalOperator::And));
        assert_eq!(node.left(), Some(&age_gt_30()));
        assert_eq!(node.right(), Some(&salary_lt_5000()));
    }

    #[test]
    fn test_depth() {
        assert_eq!(age_gt_30().depth(), 1);

        let inner = Node::operator(LogicalOperator::And, age_gt_30(), salary_lt_5000());
        let outer = Node::operator(LogicalOperator::Or, inner, age_gt_30());
        assert_eq!(outer.depth(), 3);
    }

    #[test]
    fn test_conditions_in_order() {
        let inner = Node::operator(LogicalOperator::And, age_gt_30(), salary_lt_5000());
        let outer = Node::operator(
            LogicalOperator::Or,
            inner,
            Node::operand(Condition::new("dept", Comparator::Eq, "HR")),
        );
        let attrs: Vec<_> = outer.conditions().iter().map(|c| c.attribute.as_str()).collect();
        assert_eq!(attrs, vec!["age", "salary", "dept"]);
    }

    #[test]
    fn test_display_parenthesises_operator_children() {
        let inner = Node::operator(LogicalOperator::Or, age_gt_30(), salary_lt_5000());
        let outer = Node::operator(
            LogicalOperator::And,
            inner,
            Node::operand(Condition::new("department", Comparator::Eq, "Sales")),
        );
        assert_eq!(
            outer.to_string(),
            "(age > 30 OR salary < 5000) AND department = 'Sales'"
        );
    }
}
