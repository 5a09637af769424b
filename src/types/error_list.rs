use core::ops::Deref;

use serde::Serialize;

use crate::rules::Rule;
use crate::types::validation_error::ValidationError;
use crate::types::ErrorVec;

/// Ordered, append-only list of validation errors.
///
/// Order follows rule invocation order, and argument order inside multi-key
/// rules such as [`required`](crate::Validator::required). Dereferences to a
/// slice, so indexing and slice iteration work directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorList {
    items: ErrorVec<ValidationError>,
}

impl ErrorList {
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, error: ValidationError) {
        self.items.push(error);
    }

    /// The first recorded error.
    #[inline]
    pub fn first(&self) -> Option<&ValidationError> {
        self.items.first()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.items
    }

    /// Errors recorded for `field`, in order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.items.iter().filter(move |error| error.field() == field)
    }

    /// Returns `true` when `rule` failed for `field` at least once.
    pub fn has_rule(&self, field: &str, rule: Rule) -> bool {
        self.for_field(field).any(|error| error.rule() == rule)
    }

    /// Rendered messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(ValidationError::render).collect()
    }

    /// JSON body suitable for an API error response.
    ///
    /// ```
    /// use field_rail::{fields, Validator};
    ///
    /// let mut validator = Validator::new(fields! {});
    /// validator.required(["email"]);
    ///
    /// let json = validator.errors().to_json();
    /// assert_eq!(json["errors"][0]["field"], "email");
    /// assert_eq!(json["errors"][0]["rule"], "required");
    /// assert_eq!(json["errors"][0]["message"], "The field email is required");
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.items.iter().map(|error| {
                serde_json::json!({
                    "field": error.field(),
                    "rule": error.rule(),
                    "params": error.params(),
                    "message": error.render(),
                })
            }).collect::<Vec<_>>()
        })
    }

    /// Consumes the list and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<ValidationError> {
        self.items
    }
}

impl Deref for ErrorList {
    type Target = [ValidationError];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl IntoIterator for ErrorList {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ValidationError;
    type IntoIter = core::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
