use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::rules::Rule;
use crate::types::templates::{MessageTemplates, DEFAULT_TEMPLATES};
use crate::types::ParamVec;

/// A rule parameter carried by a [`ValidationError`].
///
/// Bounds are integers and render through `%d`; formats and the serialized
/// `enum` candidate list are text and render through `%s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    Int(i64),
    Text(String),
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Int(n) => Display::fmt(n, f),
            Param::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<usize> for Param {
    fn from(value: usize) -> Self {
        Param::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

/// One failed rule for one field.
///
/// Errors are produced by [`Validator`](crate::Validator) rule methods and never
/// change afterwards. Rendering is a pure function of the error and a
/// [`MessageTemplates`] table; [`Display`] uses the built-in English table.
///
/// # Examples
///
/// ```
/// use field_rail::{fields, Rule, Validator};
///
/// let mut validator = Validator::new(fields! { "title" => "ab" });
/// validator.length("title", Some(3), None);
///
/// let error = &validator.errors()[0];
/// assert_eq!(error.field(), "title");
/// assert_eq!(error.rule(), Rule::MinLength);
/// assert_eq!(error.to_string(), "The field title must contain more than 3 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationError {
    field: String,
    rule: Rule,
    params: ParamVec,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, rule: Rule, params: ParamVec) -> Self {
        Self { field: field.into(), rule, params }
    }

    /// Name of the field that failed.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Rule that failed.
    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Rule parameters, in template order.
    #[inline]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Renders the message with the built-in English templates.
    pub fn render(&self) -> String {
        self.render_with(&DEFAULT_TEMPLATES)
    }

    /// Renders the message with a caller-supplied template table.
    pub fn render_with(&self, templates: &MessageTemplates) -> String {
        templates.render(self.rule, &self.field, &self.params)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for ValidationError {}
