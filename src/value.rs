//! Raw input values and the field mapping a [`Validator`](crate::Validator) runs over.
//!
//! Inputs usually come from a decoded form or JSON body, so [`FieldValue`] mirrors
//! the loosely typed shapes found there: text, numbers, booleans, null and nested
//! collections. Rules coerce these values themselves; nothing here converts between
//! variants behind the caller's back.
//!
//! # Examples
//!
//! ```
//! use field_rail::{FieldValue, Fields};
//!
//! let fields: Fields = [("name", FieldValue::from("Ada")), ("age", FieldValue::from(36))]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(fields.value("name"), Some(&FieldValue::Text("Ada".into())));
//! assert!(fields.value("missing").is_none());
//! ```
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .unwrap()
});

/// A single raw input value.
///
/// The JSON shape is untagged: `null`, `true`, `42`, `4.2`, `"text"`, `[...]` and
/// `{...}` map onto the matching variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns `true` for an explicit null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the value counts as "empty".
    ///
    /// Empty means: `Null`, `false`, `0`, `0.0`, `""`, `"0"`, an empty list or an
    /// empty map. Whitespace-only text is *not* empty.
    ///
    /// ```
    /// use field_rail::FieldValue;
    ///
    /// assert!(FieldValue::from("0").is_empty());
    /// assert!(FieldValue::from(0.0).is_empty());
    /// assert!(!FieldValue::from(" ").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Text(s) => s.is_empty() || s == "0",
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }

    /// Coerces a scalar to text.
    ///
    /// `Null` and `false` become `""`, `true` becomes `"1"`, numbers use their
    /// shortest decimal form. Collections have no text form and return `None`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => Some(Cow::Borrowed("")),
            Self::Bool(true) => Some(Cow::Borrowed("1")),
            Self::Bool(false) => Some(Cow::Borrowed("")),
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::Float(n) => Some(Cow::Owned(n.to_string())),
            Self::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Returns `true` for integers, floats and numeric text.
    ///
    /// Numeric text is an optionally signed integer or decimal with an optional
    /// exponent, surrounded by optional ASCII whitespace (`" -1.5e3 "`).
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Int(_) | Self::Float(_) => true,
            Self::Text(s) => NUMERIC_REGEX.is_match(s),
            _ => false,
        }
    }

    /// Numeric view of the value, `None` when [`is_numeric`](Self::is_numeric) is false.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Text(s) if NUMERIC_REGEX.is_match(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Number of characters in the text form; collections report their element count.
    pub fn char_len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Map(entries) => entries.len(),
            other => other.as_text().map_or(0, |text| text.chars().count()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => {
                Self::Map(entries.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// The input mapping from field names to raw values.
///
/// A key that is absent and a key explicitly set to [`FieldValue::Null`] are both
/// treated as "no value" by [`value`](Self::value).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    values: BTreeMap<String, FieldValue>,
}

impl Fields {
    /// Creates an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Returns the stored value, including an explicit `Null`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Returns the value only when it is present and not null.
    #[inline]
    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consumes the mapping and returns the underlying map.
    #[inline]
    pub fn into_inner(self) -> BTreeMap<String, FieldValue> {
        self.values
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<BTreeMap<String, FieldValue>> for Fields {
    fn from(values: BTreeMap<String, FieldValue>) -> Self {
        Self { values }
    }
}

impl<V: Into<FieldValue>> From<HashMap<String, V>> for Fields {
    fn from(values: HashMap<String, V>) -> Self {
        values.into_iter().collect()
    }
}

impl TryFrom<serde_json::Value> for Fields {
    type Error = serde_json::Error;

    /// Accepts a JSON object; any other shape is rejected.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
