// Built-in rules

use crate::{ConfigError, Record, Rule, ValueType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Common regex patterns
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Passes when the value is a number within `min..=max`.
#[derive(Debug, Clone)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Bounds must be ordered and not NaN.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if min.is_nan() || max.is_nan() {
            return Err(ConfigError::InvalidBounds {
                rule: "range",
                detail: "bounds must not be NaN".to_string(),
            });
        }

        if min > max {
            return Err(ConfigError::InvalidBounds {
                rule: "range",
                detail: format!("min {} exceeds max {}", min, max),
            });
        }

        Ok(Self { min, max })
    }
}

impl Rule for Range {
    fn execute(&self, value: Option<&Value>, _record: &Record) -> bool {
        match value.and_then(Value::as_f64) {
            Some(number) => number >= self.min && number <= self.max,
            None => false,
        }
    }

    fn message(&self, field: &str) -> String {
        format!("{} must be a number between {} and {}", field, self.min, self.max)
    }

    fn name(&self) -> &'static str {
        "range"
    }
}

/// Passes when the value is a string of `min..=max` characters.
#[derive(Debug, Clone)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidBounds {
                rule: "lengthRange",
                detail: format!("min {} exceeds max {}", min, max),
            });
        }

        Ok(Self { min, max })
    }
}

impl Rule for LengthRange {
    fn execute(&self, value: Option<&Value>, _record: &Record) -> bool {
        match value.and_then(Value::as_str) {
            Some(text) => {
                let length = text.chars().count();
                length >= self.min && length <= self.max
            }
            None => false,
        }
    }

    fn message(&self, field: &str) -> String {
        format!(
            "{} must be between {} and {} characters long",
            field, self.min, self.max
        )
    }

    fn name(&self) -> &'static str {
        "lengthRange"
    }
}

/// Passes when the value equals one of the allowed values.
#[derive(Debug, Clone)]
pub struct Membership {
    valid_values: Vec<Value>,
}

impl Membership {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            valid_values: values.into_iter().collect(),
        }
    }
}

impl Rule for Membership {
    fn execute(&self, value: Option<&Value>, _record: &Record) -> bool {
        match value {
            Some(value) => self.valid_values.iter().any(|candidate| candidate == value),
            None => false,
        }
    }

    fn message(&self, field: &str) -> String {
        let values = self
            .valid_values
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} must be one of the following values: {}", field, values)
    }

    fn name(&self) -> &'static str {
        "membership"
    }
}

/// Passes when the field is present in the record. A `null` value counts as
/// present; only an absent field fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn execute(&self, value: Option<&Value>, _record: &Record) -> bool {
        value.is_some()
    }

    fn message(&self, field: &str) -> String {
        format!("{} is required", field)
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Passes when the checked value equals the value of another field on the
/// same record. Fails when either side is absent.
#[derive(Debug, Clone)]
pub struct EqualsField {
    other_field: String,
}

impl EqualsField {
    pub fn new(other_field: impl Into<String>) -> Self {
        Self {
            other_field: other_field.into(),
        }
    }
}

impl Rule for EqualsField {
    fn execute(&self, value: Option<&Value>, record: &Record) -> bool {
        match (value, record.get(&self.other_field)) {
            (Some(value), Some(other)) => value == other,
            _ => false,
        }
    }

    fn message(&self, field: &str) -> String {
        format!("{} must match {}", field, self.other_field)
    }

    fn name(&self) -> &'static str {
        "equalsField"
    }
}

/// Passes when the value is a string matched by the pattern.
///
/// The pattern compiles at construction, so a malformed pattern is rejected
/// before any record is evaluated. A rule-level message set with
/// [`with_message`](Self::with_message) replaces the default for every use of
/// this instance; a message passed to
/// [`add_rule_with_message`](crate::Validator::add_rule_with_message) still
/// takes precedence over both.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    regex: Regex,
    custom_message: Option<String>,
    description: Option<&'static str>,
}

impl PatternMatch {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Wrap an already-compiled regex.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex,
            custom_message: None,
            description: None,
        }
    }

    /// Replace the default failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    fn preset(regex: &Regex, description: &'static str) -> Self {
        Self {
            regex: regex.clone(),
            custom_message: None,
            description: Some(description),
        }
    }

    /// Matches an email address.
    pub fn email() -> Self {
        Self::preset(&EMAIL_REGEX, "a valid email address")
    }

    /// Matches an http or https URL.
    pub fn url() -> Self {
        Self::preset(&URL_REGEX, "a valid URL")
    }

    /// Matches a hyphenated lowercase UUID.
    pub fn uuid() -> Self {
        Self::preset(&UUID_REGEX, "a valid UUID")
    }

    /// Matches letters only.
    pub fn alpha() -> Self {
        Self::preset(&ALPHA_REGEX, "letters only")
    }

    /// Matches letters and digits only.
    pub fn alphanumeric() -> Self {
        Self::preset(&ALPHANUMERIC_REGEX, "letters and numbers only")
    }

    /// Matches decimal digits only.
    pub fn numeric() -> Self {
        Self::preset(&NUMERIC_REGEX, "numbers only")
    }
}

impl Rule for PatternMatch {
    fn execute(&self, value: Option<&Value>, _record: &Record) -> bool {
        match value.and_then(Value::as_str) {
            Some(text) => self.regex.is_match(text),
            None => false,
        }
    }

    fn message(&self, field: &str) -> String {
        if let Some(message) = &self.custom_message {
            return message.clone();
        }

        match self.description {
            Some(description) => format!("{} must be {}", field, description),
            None => format!("{} does not match the expected pattern", field),
        }
    }

    fn name(&self) -> &'static str {
        "patternMatch"
    }
}

/// Passes when the value's JSON shape matches the expected [`ValueType`].
#[derive(Debug, Clone, Copy)]
pub struct TypeCheck {
    expected: ValueType,
}

impl TypeCheck {
    pub fn new(expected: ValueType) -> Self {
        Self { expected }
    }
}

impl Rule for TypeCheck {
    fn execute(&self, value: Option<&Value>, _record: &Record) -> bool {
        match value {
            Some(value) => self.expected.matches(value),
            None => false,
        }
    }

    fn message(&self, field: &str) -> String {
        format!("{} must be of type {}", field, self.expected)
    }

    fn name(&self) -> &'static str {
        "typeCheck"
    }
}
