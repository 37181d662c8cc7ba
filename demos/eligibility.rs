//! Eligibility Rules Example
//!
//! Creates, combines, edits and evaluates employee eligibility rules against
//! an in-memory repository.
//!
//! Run with: cargo run --example eligibility

use anyhow::Result;
use rulekit_sdk::{LogicalOperator, Record, RuleEngineBuilder, Value};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn employee(age: i64, department: &str, salary: i64, experience: i64) -> Record {
    let mut record = Record::new();
    record.insert("age".to_string(), Value::from(age));
    record.insert("department".to_string(), Value::from(department));
    record.insert("salary".to_string(), Value::from(salary));
    record.insert("experience".to_string(), Value::from(experience));
    record
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rulekit_sdk=info,rulekit_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    println!("=== Eligibility Rules Example ===\n");

    let engine = RuleEngineBuilder::new().build().await?;

    // Step 1: create a rule from a rule string
    let rule = engine
        .create_rule(
            "((age > 30 AND department = 'Sales') OR (age < 25 AND department = 'Marketing')) AND (salary > 50000 OR experience > 5)",
            Some("Bonus eligibility"),
        )
        .await?;
    println!("Created rule {}: {}", rule.id, rule.rule_name);

    let candidates = [
        ("Alice", employee(35, "Sales", 60000, 3)),
        ("Bob", employee(22, "Marketing", 30000, 6)),
        ("Carol", employee(28, "Sales", 70000, 10)),
    ];
    for (name, record) in &candidates {
        let result = engine.evaluate_rule(&rule.id, record).await?;
        println!("  {:<6} -> {:<5} ({})", name, result.success, result.message);
    }

    // Step 2: combine independent rules
    let combined = engine
        .combine_rules(
            &["age > 30", "salary < 50000", "department = 'Sales'"],
            &[LogicalOperator::And, LogicalOperator::Or],
        )
        .await?;
    println!("\nCombined rule: {}", combined.rule_name);
    println!("{}", serde_json::to_string_pretty(&combined.ast)?);

    // Step 3: edit the stored rules
    let modified = engine
        .modify_operator(&combined.id, LogicalOperator::And)
        .await?;
    println!("\nAfter operator change: {}", modified.rule_name);

    let modified = engine
        .modify_operand(&rule.id, "department", "Engineering")
        .await?;
    println!("After operand change: {}", modified.rule_name);

    // Step 4: evaluate a tree document against raw JSON data
    let document = serde_json::to_value(&modified.ast)?;
    let result = engine.evaluate_json(
        &document,
        json!({ "age": 40, "department": "Engineering", "salary": 80000, "experience": 12 }),
    )?;
    println!("\nJSON evaluation: {} ({})", result.success, result.message);

    println!("\nStored rules: {}", engine.list_rules().await?.len());
    Ok(())
}
