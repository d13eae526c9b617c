// Rule registration and record evaluation

use crate::{Record, Rule, ValidationError};
use indexmap::IndexMap;
use std::sync::Arc;

/// A rule attached to a field, with an optional message override.
#[derive(Debug, Clone)]
struct RuleEntry {
    rule: Arc<dyn Rule>,
    custom_message: Option<String>,
}

/// Executes validation rules against input records.
///
/// Rules attach to named fields with [`add_rule`](Self::add_rule); a field
/// may carry any number of rules, evaluated in attachment order. The field
/// map itself iterates in registration order, so the failures a `validate`
/// call reports come out in a deterministic order.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: IndexMap<String, Vec<RuleEntry>>,
}

impl Validator {
    /// Create a validator with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rule to a field, creating the field's rule list on first use.
    pub fn add_rule(&mut self, field: impl Into<String>, rule: impl Rule + 'static) -> &mut Self {
        self.push_entry(field.into(), Arc::new(rule), None)
    }

    /// Attach a rule whose failure message replaces the rule's default.
    pub fn add_rule_with_message(
        &mut self,
        field: impl Into<String>,
        rule: impl Rule + 'static,
        message: impl Into<String>,
    ) -> &mut Self {
        self.push_entry(field.into(), Arc::new(rule), Some(message.into()))
    }

    /// Attach an already-shared rule instance, reusing it across fields or
    /// validators without another allocation.
    pub fn add_shared_rule(
        &mut self,
        field: impl Into<String>,
        rule: Arc<dyn Rule>,
        custom_message: Option<String>,
    ) -> &mut Self {
        self.push_entry(field.into(), rule, custom_message)
    }

    fn push_entry(
        &mut self,
        field: String,
        rule: Arc<dyn Rule>,
        custom_message: Option<String>,
    ) -> &mut Self {
        self.rules.entry(field).or_default().push(RuleEntry {
            rule,
            custom_message,
        });
        self
    }

    /// Registered field names, in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Total number of attached rules across all fields.
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Evaluate every attached rule against `record`.
    ///
    /// Every registered field is visited, including fields absent from the
    /// record; their rules see `None`, so [`Required`](crate::Required) on a
    /// missing field fails rather than being skipped. Evaluation never stops
    /// at the first failure: the returned [`ValidationError`] carries one
    /// entry per failing (field, rule) pair, in field registration order and
    /// rule attachment order. Record properties with no attached rules are
    /// ignored.
    ///
    /// The failure message is the override given at registration when one
    /// exists, otherwise the rule's default for the field.
    pub fn validate(&self, record: &Record) -> Result<(), ValidationError> {
        let mut error = ValidationError::new();

        for (field, entries) in &self.rules {
            let value = record.get(field);

            for entry in entries {
                if entry.rule.execute(value, record) {
                    continue;
                }

                tracing::debug!(field = %field, constraint = entry.rule.name(), "rule failed");

                error.add_failed_rule(
                    field.clone(),
                    value.cloned(),
                    Arc::clone(&entry.rule),
                    entry.custom_message.clone(),
                );
            }
        }

        if error.is_empty() {
            tracing::trace!(fields = self.rules.len(), "validation passed");
            Ok(())
        } else {
            Err(error)
        }
    }
}
