// Validation errors

use crate::Rule;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Error raised when a rule is constructed with unusable parameters.
///
/// Rules validate their parameters eagerly, so a misconfigured rule fails at
/// construction rather than during a later `validate` pass.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Numeric or length bounds that cannot describe a range.
    #[error("invalid bounds for {rule} rule: {detail}")]
    InvalidBounds {
        rule: &'static str,
        detail: String,
    },

    /// A pattern that failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// One recorded failure: the field, the offending value, the rule that
/// rejected it, and the resolved message.
#[derive(Debug, Clone)]
pub struct FailedRule {
    /// Field name that failed validation.
    pub field: String,

    /// The value the rule saw; `None` when the field was absent.
    pub value: Option<Value>,

    /// The rule that rejected the value.
    pub rule: Arc<dyn Rule>,

    /// Resolved message: the custom override when one was attached,
    /// otherwise the rule's default.
    pub message: String,
}

/// Aggregate result of a failed `validate` pass.
///
/// Holds one [`FailedRule`] per failing (field, rule) pair, in the order they
/// were recorded: field registration order, then rule attachment order within
/// a field. Built fresh for each `validate` call and never reused.
#[derive(Debug, Clone, Default)]
pub struct ValidationError {
    failed_rules: Vec<FailedRule>,
}

impl ValidationError {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failure. `message` overrides the rule's default when given.
    pub fn add_failed_rule(
        &mut self,
        field: impl Into<String>,
        value: Option<Value>,
        rule: Arc<dyn Rule>,
        message: Option<String>,
    ) {
        let field = field.into();
        let message = message.unwrap_or_else(|| rule.message(&field));

        self.failed_rules.push(FailedRule {
            field,
            value,
            rule,
            message,
        });
    }

    /// Whether any failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.failed_rules.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.failed_rules.len()
    }

    /// One message per failure, in recorded order.
    pub fn messages(&self) -> Vec<String> {
        self.failed_rules
            .iter()
            .map(|failure| failure.message.clone())
            .collect()
    }

    /// The structured failure records, in recorded order.
    pub fn failed_rules(&self) -> &[FailedRule] {
        &self.failed_rules
    }

    /// Failures recorded for a specific field.
    pub fn field_errors(&self, field: &str) -> Vec<&FailedRule> {
        self.failed_rules
            .iter()
            .filter(|failure| failure.field == field)
            .collect()
    }

    /// Convert to a JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.failed_rules.iter().map(|failure| {
                serde_json::json!({
                    "field": failure.field,
                    "constraint": failure.rule.name(),
                    "message": failure.message,
                    "value": failure.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failed_rules {
            writeln!(f, "{}", failure.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Required;
    use serde_json::json;

    #[test]
    fn test_default_message_comes_from_rule() {
        let mut error = ValidationError::new();
        error.add_failed_rule("name", None, Arc::new(Required), None);

        assert_eq!(error.messages(), vec!["name is required".to_string()]);
    }

    #[test]
    fn test_explicit_message_wins() {
        let mut error = ValidationError::new();
        error.add_failed_rule(
            "name",
            None,
            Arc::new(Required),
            Some("please tell us your name".to_string()),
        );

        assert_eq!(error.messages(), vec!["please tell us your name".to_string()]);
    }

    #[test]
    fn test_field_errors_filter() {
        let mut error = ValidationError::new();
        error.add_failed_rule("name", None, Arc::new(Required), None);
        error.add_failed_rule("email", None, Arc::new(Required), None);
        error.add_failed_rule("name", Some(json!("x")), Arc::new(Required), None);

        assert_eq!(error.field_errors("name").len(), 2);
        assert_eq!(error.field_errors("email").len(), 1);
        assert!(error.field_errors("age").is_empty());
    }

    #[test]
    fn test_to_json_shape() {
        let mut error = ValidationError::new();
        error.add_failed_rule("age", Some(json!(15)), Arc::new(Required), None);

        let rendered = error.to_json();
        let errors = rendered["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["field"], "age");
        assert_eq!(errors[0]["constraint"], "required");
        assert_eq!(errors[0]["value"], json!(15));
    }

    #[test]
    fn test_display_lists_every_message() {
        let mut error = ValidationError::new();
        error.add_failed_rule("name", None, Arc::new(Required), None);
        error.add_failed_rule("email", None, Arc::new(Required), None);

        let rendered = error.to_string();
        assert!(rendered.contains("name is required"));
        assert!(rendered.contains("email is required"));
    }
}
