//! Rule identifiers and the compiled patterns behind the format rules.
use core::fmt::{self, Display};
use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub(crate) static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z0-9]+-?)+$").unwrap());

pub(crate) static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([-_/ ]?[0-9]{2}){4}$").unwrap());

// Anchored at the start only: trailing garbage after a valid address still matches.
pub(crate) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\].,;:\s@"]+(\.[^<>()\[\].,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))"#,
    )
    .unwrap()
});

/// Identifies which rule produced a [`ValidationError`](crate::ValidationError).
///
/// The serialized form is the rule name used in message tables, e.g.
/// `"notEmpty"`, `"betweenLength"` or `"datetime"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Required,
    NotEmpty,
    Slug,
    MinLength,
    MaxLength,
    BetweenLength,
    Min,
    Max,
    Between,
    #[serde(rename = "datetime")]
    DateTime,
    Phone,
    Email,
    Number,
    Enum,
    Match,
}

impl Rule {
    /// Every rule, in message-table order.
    pub const ALL: [Rule; 15] = [
        Rule::Required,
        Rule::NotEmpty,
        Rule::Slug,
        Rule::MinLength,
        Rule::MaxLength,
        Rule::BetweenLength,
        Rule::Min,
        Rule::Max,
        Rule::Between,
        Rule::DateTime,
        Rule::Phone,
        Rule::Email,
        Rule::Number,
        Rule::Enum,
        Rule::Match,
    ];

    /// The rule name as it appears in message tables.
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::NotEmpty => "notEmpty",
            Rule::Slug => "slug",
            Rule::MinLength => "minLength",
            Rule::MaxLength => "maxLength",
            Rule::BetweenLength => "betweenLength",
            Rule::Min => "min",
            Rule::Max => "max",
            Rule::Between => "between",
            Rule::DateTime => "datetime",
            Rule::Phone => "phone",
            Rule::Email => "email",
            Rule::Number => "number",
            Rule::Enum => "enum",
            Rule::Match => "match",
        }
    }

    /// Built-in English message template.
    ///
    /// The first placeholder is always the field name; the remaining ones follow
    /// the order in which the rule records its parameters.
    pub const fn default_template(self) -> &'static str {
        match self {
            Rule::Required => "The field %s is required",
            Rule::NotEmpty => "The field %s cannot be empty",
            Rule::Slug => "The field %s is not a valid slug",
            Rule::MinLength => "The field %s must contain more than %d characters",
            Rule::MaxLength => "The field %s must contain less than %d characters",
            Rule::BetweenLength => "The field %s must contain between %d and %d characters",
            Rule::Min => "The field %s must be greater than %d",
            Rule::Max => "The field %s must be less than %d",
            Rule::Between => "The field %s must be between %d and %d",
            Rule::DateTime => "The field %s must be a valid date in the format (%s)",
            Rule::Phone => "The field %s is not a valid phone number",
            Rule::Email => "The field %s is not a valid email",
            Rule::Number => "The field %s is not a valid number",
            Rule::Enum => "The field %s must be one of %s",
            Rule::Match => "The field %s is not valid",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule(pub String);

impl Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown validation rule `{}`", self.0)
    }
}

impl std::error::Error for UnknownRule {}

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_owned()))
    }
}
