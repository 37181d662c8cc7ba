//! Rule tree evaluator
//!
//! Walks the tree with an explicit stack, so deep trees do not grow the call
//! stack. Both children of an operator are always evaluated; only the way
//! their results are combined short-circuits.
//!
//! Messages:
//! - operand: `Condition passed: {attribute} {comparator} {value}` or
//!   `Condition failed: ...`
//! - AND: the first failing child's result verbatim (left before right),
//!   otherwise `Both conditions passed for AND`
//! - OR: `One condition passed for OR` or `Both conditions failed for OR`;
//!   which branch decided is not reported

use crate::context::Record;
use crate::result::EvaluationResult;
use rulekit_core::{Comparator, Condition, LogicalOperator, Node, Value};
use serde::Deserialize;
use tracing::debug;

enum Frame<'a> {
    Visit(&'a Node),
    Combine(LogicalOperator),
}

/// Rule tree evaluator
pub struct Evaluator;

impl Evaluator {
    /// Evaluate a tree against a record
    pub fn evaluate(root: &Node, record: &Record) -> EvaluationResult {
        let mut frames = vec![Frame::Visit(root)];
        let mut results: Vec<EvaluationResult> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Visit(Node::Operand(condition)) => {
                    results.push(Self::evaluate_condition(condition, record));
                }
                Frame::Visit(Node::Operator { op, left, right }) => {
                    frames.push(Frame::Combine(*op));
                    frames.push(Frame::Visit(right));
                    frames.push(Frame::Visit(left));
                }
                Frame::Combine(op) => {
                    let (Some(right), Some(left)) = (results.pop(), results.pop()) else {
                        return EvaluationResult::unknown_error();
                    };
                    results.push(Self::combine_results(op, left, right));
                }
            }
        }

        let result = results.pop().unwrap_or_else(EvaluationResult::unknown_error);
        debug!(success = result.success, message = %result.message, "Rule evaluated");
        result
    }

    /// Evaluate a tree received in its persisted document form.
    ///
    /// A document that does not describe a valid tree yields the
    /// `Unknown error occurred during rule evaluation` result instead of an error.
    pub fn evaluate_document(document: &serde_json::Value, record: &Record) -> EvaluationResult {
        match Node::deserialize(document) {
            Ok(root) => Self::evaluate(&root, record),
            Err(e) => {
                debug!(error = %e, "Document is not a rule tree");
                EvaluationResult::unknown_error()
            }
        }
    }

    /// Evaluate a single operand condition
    pub fn evaluate_condition(condition: &Condition, record: &Record) -> EvaluationResult {
        let met = Self::compare(
            record.get(&condition.attribute),
            condition.operator,
            &condition.value,
        );
        let verdict = if met { "passed" } else { "failed" };
        let message = format!(
            "Condition {}: {} {} {}",
            verdict, condition.attribute, condition.operator, condition.value
        );

        EvaluationResult {
            success: met,
            message,
        }
    }

    fn combine_results(
        op: LogicalOperator,
        left: EvaluationResult,
        right: EvaluationResult,
    ) -> EvaluationResult {
        match op {
            LogicalOperator::And => {
                if !left.success {
                    left
                } else if !right.success {
                    right
                } else {
                    EvaluationResult::passed("Both conditions passed for AND")
                }
            }
            LogicalOperator::Or => {
                if left.success || right.success {
                    EvaluationResult::passed("One condition passed for OR")
                } else {
                    EvaluationResult::failed("Both conditions failed for OR")
                }
            }
        }
    }

    /// Compare a record field against a rule literal.
    ///
    /// A missing field never satisfies a condition. Equality is strict: a
    /// number never equals a string. Ordering between a number and a string
    /// compares them as numbers, and a non-numeric string makes it false.
    fn compare(actual: Option<&Value>, comparator: Comparator, expected: &Value) -> bool {
        let Some(actual) = actual else {
            return false;
        };

        match (actual, expected) {
            (Value::Number(a), Value::Number(b)) => match comparator {
                Comparator::Gt => a > b,
                Comparator::Lt => a < b,
                Comparator::Eq => a == b,
            },
            (Value::String(a), Value::String(b)) => match comparator {
                Comparator::Gt => a > b,
                Comparator::Lt => a < b,
                Comparator::Eq => a == b,
            },
            _ => match comparator {
                Comparator::Gt => actual.to_number() > expected.to_number(),
                Comparator::Lt => actual.to_number() < expected.to_number(),
                Comparator::Eq => false,
            },
        }
    }
}
