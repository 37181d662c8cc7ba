//! Unit tests for rule evaluation
//!
//! Parses rule strings and evaluates them against records, checking both the
//! verdict and the reported message.

use rulekit_runtime::{record_from_json, EvaluationResult, Evaluator, Record, RuntimeError};
use serde_json::json;

fn record(data: serde_json::Value) -> Record {
    record_from_json(data).unwrap()
}

fn eval(rule: &str, data: serde_json::Value) -> EvaluationResult {
    let ast = rulekit_parser::create_rule(rule).unwrap();
    Evaluator::evaluate(&ast, &record(data))
}

// =============================================================================
// Verdicts
// =============================================================================

#[test]
fn test_simple_and_passes() {
    let result = eval(
        "age > 30 AND salary < 5000",
        json!({ "age": 35, "salary": 4000 }),
    );
    assert_eq!(result, EvaluationResult::passed("Both conditions passed for AND"));
}

#[test]
fn test_simple_and_reports_failed_condition() {
    let result = eval(
        "age > 30 AND salary < 5000",
        json!({ "age": 35, "salary": 6000 }),
    );
    assert_eq!(result, EvaluationResult::failed("Condition failed: salary < 5000"));
}

#[test]
fn test_nested_rule_with_strings() {
    let rule = "((age > 30 AND department = 'Sales') OR (age < 25 AND department = 'Marketing')) AND (salary > 50000 OR experience > 5)";

    let result = eval(
        rule,
        json!({ "age": 35, "department": "Sales", "salary": 60000, "experience": 3 }),
    );
    assert!(result.success);

    let result = eval(
        rule,
        json!({ "age": 28, "department": "Sales", "salary": 60000, "experience": 8 }),
    );
    assert_eq!(result, EvaluationResult::failed("Both conditions failed for OR"));
}

#[test]
fn test_and_right_failure_within_left_subtree() {
    let result = eval(
        "(age > 30 AND department = 'Sales') AND salary > 1000",
        json!({ "age": 40, "department": "Marketing", "salary": 2000 }),
    );
    assert_eq!(
        result,
        EvaluationResult::failed("Condition failed: department = Sales")
    );
}

#[test]
fn test_missing_attribute_fails_condition() {
    let result = eval("experience > 5", json!({ "age": 35 }));
    assert_eq!(result, EvaluationResult::failed("Condition failed: experience > 5"));
}

#[test]
fn test_numeric_string_literal_is_number() {
    // quotes are stripped, so '30' is the number 30
    let result = eval("age = '30'", json!({ "age": 30 }));
    assert!(result.success);
}

#[test]
fn test_string_field_against_number_literal() {
    assert!(eval("age > 30", json!({ "age": "45" })).success);
    assert!(!eval("age = 30", json!({ "age": "30" })).success);
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn test_document_and_tree_agree() {
    let ast = rulekit_parser::create_rule("age > 30 OR salary < 5000").unwrap();
    let document = serde_json::to_value(&ast).unwrap();
    let data = record(json!({ "age": 20, "salary": 4000 }));

    assert_eq!(
        Evaluator::evaluate_document(&document, &data),
        Evaluator::evaluate(&ast, &data)
    );
}

#[test]
fn test_document_with_unknown_type() {
    let document = json!({ "type": "group", "value": "AND", "left": null, "right": null });
    assert_eq!(
        Evaluator::evaluate_document(&document, &Record::new()),
        EvaluationResult::unknown_error()
    );
}

#[test]
fn test_document_operand_with_bad_condition() {
    let document = json!({ "type": "operand", "value": { "attribute": "age" } });
    assert_eq!(
        Evaluator::evaluate_document(&document, &Record::new()),
        EvaluationResult::unknown_error()
    );
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_record_rejects_non_object() {
    assert!(matches!(
        record_from_json(json!([1, 2, 3])),
        Err(RuntimeError::InvalidRecord(_))
    ));
}

#[test]
fn test_record_rejects_nested_values() {
    assert!(matches!(
        record_from_json(json!({ "age": 30, "tags": ["a"] })),
        Err(RuntimeError::UnsupportedValue { .. })
    ));
}
