//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use rulekit_sdk::{Record, RuleEngine, RuleEngineBuilder, StorageConfig, Value};
use std::path::Path;

/// Engine backed by an in-memory repository
pub async fn memory_engine() -> RuleEngine {
    RuleEngineBuilder::new()
        .build()
        .await
        .expect("Failed to build engine")
}

/// Engine backed by a rule directory
pub async fn file_engine(dir: &Path) -> RuleEngine {
    RuleEngineBuilder::new()
        .with_storage(StorageConfig::file_system(dir))
        .build()
        .await
        .expect("Failed to build engine")
}

/// Builder for evaluation records
#[derive(Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.record.insert(field.to_string(), value.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// Employee record used across tests
pub fn employee(age: i64, department: &str, salary: i64, experience: i64) -> Record {
    RecordBuilder::new()
        .with("age", age)
        .with("department", department)
        .with("salary", salary)
        .with("experience", experience)
        .build()
}
