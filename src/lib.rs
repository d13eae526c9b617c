//! Declarative field validation with aggregated errors
//!
//! Attach rules to named fields on a [`Validator`], then run whole records
//! through it. Every rule of every registered field is evaluated on each
//! pass, so a failed validation reports all violations at once instead of
//! stopping at the first one.
//!
//! # Examples
//!
//! ## Basic validation
//!
//! ```
//! use fieldcheck::{Range, Required, Validator};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator
//!     .add_rule("age", Range::new(1.0, 10.0)?)
//!     .add_rule("name", Required);
//!
//! let record = json!({ "age": 15 });
//! let error = validator.validate(record.as_object().unwrap()).unwrap_err();
//!
//! // Both failures surface in one pass: age is out of range and name is
//! // missing entirely.
//! assert_eq!(error.messages().len(), 2);
//! assert!(error.messages()[0].contains("age"));
//! assert!(error.messages()[1].contains("name"));
//! # Ok::<(), fieldcheck::ConfigError>(())
//! ```
//!
//! ## Custom messages and cross-field rules
//!
//! ```
//! use fieldcheck::{EqualsField, LengthRange, Validator};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator
//!     .add_rule_with_message("password", LengthRange::new(8, 64)?, "pick a longer password")
//!     .add_rule("confirm_password", EqualsField::new("password"));
//!
//! let record = json!({ "password": "short", "confirm_password": "shorter" });
//! let error = validator.validate(record.as_object().unwrap()).unwrap_err();
//!
//! assert_eq!(error.messages()[0], "pick a longer password");
//! assert_eq!(error.messages()[1], "confirm_password must match password");
//! # Ok::<(), fieldcheck::ConfigError>(())
//! ```
//!
//! ## Structured failure inspection
//!
//! ```
//! use fieldcheck::{Membership, Validator};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator.add_rule(
//!     "color",
//!     Membership::new([json!("red"), json!("green"), json!("blue")]),
//! );
//!
//! let record = json!({ "color": "purple" });
//! let error = validator.validate(record.as_object().unwrap()).unwrap_err();
//!
//! let failure = &error.failed_rules()[0];
//! assert_eq!(failure.field, "color");
//! assert_eq!(failure.value, Some(json!("purple")));
//! assert_eq!(failure.rule.name(), "membership");
//! ```

mod errors;
mod rules;
mod traits;
mod validator;

pub use errors::*;
pub use rules::*;
pub use traits::*;
pub use validator::*;
