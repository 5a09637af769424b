//! Error values produced by validation and the templates that render them.
//!
//! # Examples
//!
//! ```
//! use field_rail::{fields, MessageTemplates, Rule, Validator};
//!
//! let mut validator = Validator::new(fields! { "age" => 7 });
//! validator.between("age", Some(18), None);
//!
//! let error = &validator.errors()[0];
//! assert_eq!(error.to_string(), "The field age must be greater than 18");
//!
//! let french = MessageTemplates::french();
//! assert_eq!(error.render_with(&french), "Le champ age doit être supérieur à 18");
//!
//! let custom = MessageTemplates::default().with_template(Rule::Min, "%s: at least %d");
//! assert_eq!(error.render_with(&custom), "age: at least 18");
//! ```
use smallvec::SmallVec;

pub mod error_list;
pub mod failure;
pub mod templates;
pub mod validation_error;

pub use error_list::*;
pub use failure::*;
pub use templates::MessageTemplates;
pub use validation_error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for 1 element, the common case of a single failing rule.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Parameters of one error; no rule records more than two.
pub type ParamVec = SmallVec<[Param; 2]>;
