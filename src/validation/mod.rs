//! The rule engine.
//!
//! This module provides the [`Validator`] type, which runs named rules over a
//! [`Fields`](crate::Fields) mapping and accumulates one
//! [`ValidationError`](crate::ValidationError) per failing rule and field instead
//! of stopping at the first problem.
//!
//! # Key Components
//!
//! - [`Validator`] - Fluent, eager rule evaluation and the terminal `is_valid` check
//! - [`datetime`] - Strict parsing of `Y-m-d H:i:s`-style formats used by the
//!   `datetime` rule
//!
//! # Examples
//!
//! ```
//! use field_rail::{fields, Validator};
//!
//! let mut validator = Validator::new(fields! {
//!     "phone" => "01-02-03-04",
//!     "slug" => "My Slug",
//! });
//! validator.phone("phone").slug("slug");
//!
//! assert_eq!(validator.errors().len(), 1);
//! assert_eq!(validator.errors()[0].to_string(), "The field slug is not a valid slug");
//! ```
pub mod datetime;
pub mod validator;

pub use self::datetime::{parse_date_time, DateTimeParseError, DEFAULT_DATE_TIME_FORMAT};
pub use self::validator::*;
