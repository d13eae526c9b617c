// Core rule abstraction

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// An input record: field names mapped to arbitrary JSON values.
pub type Record = serde_json::Map<String, Value>;

/// A single validation rule: a predicate plus its default-message generator.
///
/// `execute` receives the checked field's value and the full record, so rules
/// can compare fields against each other. `value` is `None` when the field is
/// absent from the record; rules that need a concrete value fail on `None`
/// instead of panicking. Implementations must be pure: no mutation of the
/// record, no side effects, and a value shape the rule does not understand
/// makes it return `false` rather than abort the pass.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Evaluate the rule against a field value.
    fn execute(&self, value: Option<&Value>, record: &Record) -> bool;

    /// Default failure message for the named field.
    fn message(&self, field: &str) -> String;

    /// Constraint label used in structured error output.
    fn name(&self) -> &'static str;
}

/// JSON shape expected by a [`TypeCheck`](crate::TypeCheck) rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    /// Whether `value` has this shape.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueType::Null => value.is_null(),
            ValueType::Bool => value.is_boolean(),
            ValueType::Number => value.is_number(),
            ValueType::String => value.is_string(),
            ValueType::Array => value.is_array(),
            ValueType::Object => value.is_object(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_type_matches() {
        assert!(ValueType::Null.matches(&Value::Null));
        assert!(ValueType::Bool.matches(&json!(true)));
        assert!(ValueType::Number.matches(&json!(4.2)));
        assert!(ValueType::String.matches(&json!("text")));
        assert!(ValueType::Array.matches(&json!([1, 2])));
        assert!(ValueType::Object.matches(&json!({"a": 1})));

        assert!(!ValueType::String.matches(&json!(42)));
        assert!(!ValueType::Number.matches(&json!("42")));
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::String.to_string(), "string");
        assert_eq!(ValueType::Object.to_string(), "object");
    }
}
