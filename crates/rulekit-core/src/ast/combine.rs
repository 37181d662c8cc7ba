//! Structural combination of existing rule trees

use super::node::Node;
use super::operator::LogicalOperator;
use crate::error::{CoreError, Result};

/// Depth limit applied by [`combine`] and by the parser's default options
pub const DEFAULT_MAX_TREE_DEPTH: usize = 100;

/// Left-fold `asts` into one tree using `operators` pairwise.
///
/// `combine([r1, r2, r3], [AND, OR])` yields `OR(AND(r1, r2), r3)`. The result
/// is always left-deep; operator precedence is not re-applied, so mixing AND
/// and OR can differ from parsing the flattened rule string.
///
/// Fails with [`CoreError::TreeTooDeep`] when the result would be deeper than
/// [`DEFAULT_MAX_TREE_DEPTH`].
pub fn combine(asts: Vec<Node>, operators: &[LogicalOperator]) -> Result<Node> {
    combine_with_max_depth(asts, operators, DEFAULT_MAX_TREE_DEPTH)
}

/// [`combine`] with an explicit depth limit.
///
/// The limit is checked level by level before each operator node is built,
/// so an oversized fold is rejected without ever materialising the deep tree.
pub fn combine_with_max_depth(
    asts: Vec<Node>,
    operators: &[LogicalOperator],
    max_depth: usize,
) -> Result<Node> {
    if asts.is_empty() {
        return Err(CoreError::NoRules);
    }
    if operators.len() != asts.len() - 1 {
        return Err(CoreError::OperatorCountMismatch {
            rules: asts.len(),
            operators: operators.len(),
        });
    }

    let count = asts.len();
    let mut trees = asts.into_iter();
    let mut root = trees.next().ok_or(CoreError::NoRules)?;
    let mut depth = root.depth();
    if depth > max_depth {
        return Err(CoreError::TreeTooDeep {
            depth,
            max: max_depth,
        });
    }

    for (tree, op) in trees.zip(operators) {
        depth = depth.max(tree.depth()) + 1;
        if depth > max_depth {
            return Err(CoreError::TreeTooDeep {
                depth,
                max: max_depth,
            });
        }
        root = Node::operator(*op, root, tree);
    }

    log::debug!("Combined {} rule trees into depth {}", count, depth);
    Ok(root)
}

/// Left-fold `asts` joining every pair with the same operator
pub fn combine_uniform(asts: Vec<Node>, op: LogicalOperator) -> Result<Node> {
    let operators = vec![op; asts.len().saturating_sub(1)];
    combine(asts, &operators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Comparator, Condition};

    fn leaf(attr: &str, value: i32) -> Node {
        Node::operand(Condition::new(attr, Comparator::Gt, value))
    }

    fn leaves(count: usize) -> Vec<Node> {
        (0..count).map(|i| leaf(&format!("a{}", i), i as i32)).collect()
    }

    #[test]
    fn test_single_tree_is_returned_as_is() {
        let root = combine(vec![leaf("age", 30)], &[]).unwrap();
        assert_eq!(root, leaf("age", 30));
    }

    #[test]
    fn test_left_deep_fold() {
        let root = combine(
            vec![leaf("a", 1), leaf("b", 2), leaf("c", 3)],
            &[LogicalOperator::And, LogicalOperator::Or],
        )
        .unwrap();

        assert_eq!(root.logical_operator(), Some(LogicalOperator::Or));
        assert_eq!(root.right(), Some(&leaf("c", 3)));

        let left = root.left().unwrap();
        assert_eq!(left.logical_operator(), Some(LogicalOperator::And));
        assert_eq!(left.left(), Some(&leaf("a", 1)));
        assert_eq!(left.right(), Some(&leaf("b", 2)));
    }

    #[test]
    fn test_precedence_is_not_reapplied() {
        // a OR b AND c parses as OR(a, AND(b, c)); combine keeps the fold order
        let root = combine(
            vec![leaf("a", 1), leaf("b", 2), leaf("c", 3)],
            &[LogicalOperator::Or, LogicalOperator::And],
        )
        .unwrap();
        assert_eq!(root.logical_operator(), Some(LogicalOperator::And));
        assert_eq!(root.left().unwrap().logical_operator(), Some(LogicalOperator::Or));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(combine(vec![], &[]), Err(CoreError::NoRules));
    }

    #[test]
    fn test_operator_count_mismatch() {
        let err = combine(vec![leaf("a", 1), leaf("b", 2)], &[]).unwrap_err();
        assert_eq!(
            err,
            CoreError::OperatorCountMismatch {
                rules: 2,
                operators: 0
            }
        );
    }

    #[test]
    fn test_combine_uniform() {
        let root = combine_uniform(
            vec![leaf("a", 1), leaf("b", 2), leaf("c", 3)],
            LogicalOperator::And,
        )
        .unwrap();
        assert_eq!(root.logical_operator(), Some(LogicalOperator::And));
        assert_eq!(root.left().unwrap().logical_operator(), Some(LogicalOperator::And));
    }

    #[test]
    fn test_default_depth_limit() {
        let root = combine_uniform(leaves(DEFAULT_MAX_TREE_DEPTH), LogicalOperator::And).unwrap();
        assert_eq!(root.depth(), DEFAULT_MAX_TREE_DEPTH);

        assert_eq!(
            combine_uniform(leaves(DEFAULT_MAX_TREE_DEPTH + 1), LogicalOperator::And),
            Err(CoreError::TreeTooDeep {
                depth: DEFAULT_MAX_TREE_DEPTH + 1,
                max: DEFAULT_MAX_TREE_DEPTH
            })
        );
    }

    #[test]
    fn test_many_leaves_rejected_early() {
        let err = combine_uniform(leaves(200_000), LogicalOperator::Or).unwrap_err();
        assert!(matches!(err, CoreError::TreeTooDeep { .. }));
    }

    #[test]
    fn test_depth_counts_input_trees() {
        let deep = combine_uniform(leaves(3), LogicalOperator::And).unwrap();
        assert_eq!(deep.depth(), 3);

        let err = combine_with_max_depth(
            vec![leaf("x", 1), deep.clone()],
            &[LogicalOperator::Or],
            3,
        )
        .unwrap_err();
        assert_eq!(err, CoreError::TreeTooDeep { depth: 4, max: 3 });

        assert!(combine_with_max_depth(vec![deep], &[], 2).is_err());
    }
}
