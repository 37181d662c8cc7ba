//! Rule engine facade
//!
//! Ties the parser, the tree operations, the evaluator and a repository
//! together into the rule-management workflows: create, combine, evaluate,
//! modify, list and delete.
//!
//! Edits load the stored rule, change its tree in place and save it back. The
//! engine does not lock rules; concurrent edits of one rule must be
//! serialized by the caller.

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use rulekit_core::{combine_with_max_depth, CoreError, LogicalOperator, Node, Rule, Value};
use rulekit_parser::{validate_rule_string, RuleParser};
use rulekit_repository::RuleRepository;
use rulekit_runtime::{record_from_json, EvaluationResult, Evaluator, Record};
use std::sync::Arc;
use tracing::{debug, info};

/// High-level rule engine
pub struct RuleEngine {
    config: EngineConfig,
    parser: RuleParser,
    repository: Arc<dyn RuleRepository>,
}

impl RuleEngine {
    /// Create an engine over an existing repository
    pub fn new(config: EngineConfig, repository: Arc<dyn RuleRepository>) -> Self {
        let parser = RuleParser::with_options(config.parser);
        Self {
            config,
            parser,
            repository,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<dyn RuleRepository> {
        &self.repository
    }

    /// Run the advisory pre-check on a rule string
    pub fn validate(&self, rule_string: &str) -> bool {
        validate_rule_string(rule_string)
    }

    /// Pre-check (when enabled) and parse a rule string into a tree
    pub fn parse(&self, rule_string: &str) -> Result<Node> {
        if self.config.validate_input && !self.validate(rule_string) {
            return Err(SdkError::InvalidRuleString(rule_string.to_string()));
        }
        Ok(self.parser.parse(rule_string)?)
    }

    /// Parse a rule string and store it
    pub async fn create_rule(&self, rule_string: &str, description: Option<&str>) -> Result<Rule> {
        let ast = self.parse(rule_string)?;

        let mut rule = Rule::new(rule_string, ast);
        rule.description = description.map(str::to_string);
        self.repository.save(&rule).await?;

        info!(rule_id = %rule.id, rule_name = %rule.rule_name, "Rule created");
        Ok(rule)
    }

    /// Parse several rule strings, fold them left to right with `operators`
    /// and store the result.
    ///
    /// The stored `rule_name` is the rule string rendered from the combined
    /// tree, so it reflects the left-deep grouping. The combined tree is held
    /// to the parser's `max_tree_depth`; a deeper result is rejected before
    /// anything is stored.
    pub async fn combine_rules(
        &self,
        rule_strings: &[&str],
        operators: &[LogicalOperator],
    ) -> Result<Rule> {
        if rule_strings.is_empty() {
            return Err(CoreError::NoRules.into());
        }
        if operators.len() != rule_strings.len() - 1 {
            return Err(CoreError::OperatorCountMismatch {
                rules: rule_strings.len(),
                operators: operators.len(),
            }
            .into());
        }

        let asts = rule_strings
            .iter()
            .map(|rule_string| self.parse(rule_string))
            .collect::<Result<Vec<_>>>()?;
        let combined =
            combine_with_max_depth(asts, operators, self.config.parser.max_tree_depth)?;

        let rule = Rule::new(combined.to_string(), combined);
        self.repository.save(&rule).await?;

        info!(
            rule_id = %rule.id,
            rules = rule_strings.len(),
            "Rules combined"
        );
        Ok(rule)
    }

    /// Evaluate a tree against a record
    pub fn evaluate(&self, ast: &Node, record: &Record) -> EvaluationResult {
        Evaluator::evaluate(ast, record)
    }

    /// Evaluate a stored rule against a record
    pub async fn evaluate_rule(&self, id: &str, record: &Record) -> Result<EvaluationResult> {
        let rule = self.repository.load(id).await?;
        let result = Evaluator::evaluate(&rule.ast, record);
        debug!(rule_id = %id, success = result.success, "Stored rule evaluated");
        Ok(result)
    }

    /// Evaluate a tree document against a JSON record.
    ///
    /// A malformed tree document is not an error; it evaluates to the
    /// unknown-error result. A record that is not an object of numbers and
    /// strings is an error.
    pub fn evaluate_json(
        &self,
        ast: &serde_json::Value,
        data: serde_json::Value,
    ) -> Result<EvaluationResult> {
        let record = record_from_json(data)?;
        Ok(Evaluator::evaluate_document(ast, &record))
    }

    /// Change the operator at the root of a stored rule.
    ///
    /// An operand root or an unchanged operator leaves the rule untouched.
    pub async fn modify_operator(&self, id: &str, operator: LogicalOperator) -> Result<Rule> {
        let mut rule = self.repository.load(id).await?;
        let before = rule.ast.clone();

        rule.ast.set_operator(operator);
        self.save_if_changed(&mut rule, &before).await?;

        info!(rule_id = %id, operator = %operator, "Rule operator modified");
        Ok(rule)
    }

    /// Overwrite the value of every operand on `attribute` in a stored rule.
    ///
    /// The value is stored as given. An attribute that does not occur leaves
    /// the rule untouched. Infinite and NaN numbers are refused.
    pub async fn modify_operand(
        &self,
        id: &str,
        attribute: &str,
        value: impl Into<Value>,
    ) -> Result<Rule> {
        let value = value.into();
        if !value.is_finite() {
            return Err(CoreError::NonFiniteNumber(value.to_string()).into());
        }

        let mut rule = self.repository.load(id).await?;
        let before = rule.ast.clone();

        rule.ast.set_operand_value(attribute, value);
        self.save_if_changed(&mut rule, &before).await?;

        info!(rule_id = %id, attribute = %attribute, "Rule operand modified");
        Ok(rule)
    }

    /// Load a stored rule
    pub async fn get_rule(&self, id: &str) -> Result<Rule> {
        Ok(self.repository.load(id).await?)
    }

    /// All stored rules, oldest first
    pub async fn list_rules(&self) -> Result<Vec<Rule>> {
        Ok(self.repository.list().await?)
    }

    /// Delete a stored rule
    pub async fn delete_rule(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await?;
        info!(rule_id = %id, "Rule deleted");
        Ok(())
    }

    /// Re-render the display string and persist when the tree changed
    async fn save_if_changed(&self, rule: &mut Rule, before: &Node) -> Result<()> {
        if rule.ast == *before {
            debug!(rule_id = %rule.id, "Edit left rule unchanged");
            return Ok(());
        }

        rule.rule_name = rule.ast.to_string();
        rule.touch();
        self.repository.save(rule).await?;
        Ok(())
    }
}
