//! Fluent field validation with error accumulation.
//!
//! A [`Validator`] wraps a mapping of field names to raw values, runs named rules
//! against it (required, length bounds, numeric ranges, patterns, enumerated sets,
//! date formats...) and records one [`ValidationError`] per failing rule and field.
//! Each module re-exports its public surface from here, so consumers can simply
//! depend on `field_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Rules
//!
//! ```
//! use field_rail::{fields, Validator};
//!
//! let mut validator = Validator::new(fields! {
//!     "username" => "ab",
//!     "email" => "x@y.com",
//!     "role" => "root",
//! });
//!
//! validator
//!     .required(["username", "email", "password"])
//!     .length("username", Some(3), Some(20))
//!     .email("email")
//!     .one_of("role", ["admin", "editor"]);
//!
//! assert_eq!(validator.errors().len(), 4);
//! ```
//!
//! ## Terminal Check
//!
//! ```
//! use field_rail::{fields, Validator};
//!
//! let mut validator = Validator::new(fields! { "qty" => "abc" });
//! validator.number(["qty"]).between("qty", Some(1), Some(10));
//!
//! // Only the first error is reported...
//! let failure = validator.is_valid().unwrap_err();
//! assert_eq!(failure.to_string(), "The field qty is not a valid number");
//!
//! // ...but every error is still there.
//! assert_eq!(failure.errors().len(), 2);
//! ```
//!
//! ## JSON Input
//!
//! ```
//! use field_rail::Validator;
//! use serde_json::json;
//!
//! let mut validator = Validator::from_json(json!({ "born": "2024-02-30 10:00:00" })).unwrap();
//! validator.date_time("born");
//!
//! assert_eq!(
//!     validator.errors()[0].to_string(),
//!     "The field born must be a valid date in the format (Y-m-d H:i:s)"
//! );
//! ```

/// Ergonomic macros for building field mappings
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Rule identifiers
pub mod rules;
/// Validation errors, error lists and message templates
pub mod types;
/// Validator and rule evaluation
pub mod validation;
/// Raw input values and field mappings
pub mod value;

pub use rules::{Rule, UnknownRule};
pub use types::{
    ErrorList, ErrorVec, MessageTemplates, Param, ParamVec, ValidationError, ValidationFailure,
};
pub use validation::*;
pub use value::{FieldValue, Fields};
