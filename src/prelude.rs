//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use field_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`]
//! - **Types**: [`Validator`], [`Fields`], [`FieldValue`], [`ValidationError`],
//!   [`ValidationFailure`], [`Rule`]
//!
//! # Examples
//!
//! ```
//! use field_rail::prelude::*;
//!
//! fn validate_signup(input: Fields) -> ValidationResult<Fields> {
//!     let mut validator = Validator::new(input);
//!     validator
//!         .required(["email", "password"])
//!         .email("email")
//!         .length("password", Some(8), None);
//!     validator.into_result()
//! }
//!
//! let result = validate_signup(fields! { "email" => "a@b.io", "password" => "hunter2" });
//! assert_eq!(result.unwrap_err().first().rule(), Rule::MinLength);
//! ```

// Macros
pub use crate::fields;

// Core types
pub use crate::rules::Rule;
pub use crate::types::{ValidationError, ValidationFailure};
pub use crate::validation::Validator;
pub use crate::value::{FieldValue, Fields};

/// Result alias for functions that hand back validated data.
pub type ValidationResult<T> = Result<T, ValidationFailure>;
