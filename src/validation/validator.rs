use core::cmp::Ordering;

use regex::Regex;
use smallvec::smallvec;

use crate::rules::{Rule, EMAIL_REGEX, PHONE_REGEX, SLUG_REGEX};
use crate::types::{ErrorList, ParamVec, ValidationError, ValidationFailure};
use crate::validation::datetime::{parse_date_time, DEFAULT_DATE_TIME_FORMAT};
use crate::value::{FieldValue, Fields};

static NULL: FieldValue = FieldValue::Null;

/// Fluent validator over one set of input fields.
///
/// Every rule method evaluates immediately, appends zero or more
/// [`ValidationError`]s and returns the validator again so calls can be chained.
/// Rules never stop the chain; only [`is_valid`](Self::is_valid) turns the
/// collected errors into a failure.
///
/// A validator is built for a single validation pass and then dropped.
///
/// # Missing values
///
/// Absent keys and explicit nulls are "no value". Rules treat them differently:
///
/// - [`required`](Self::required), [`not_empty`](Self::not_empty),
///   [`number`](Self::number) and [`between`](Self::between) flag them.
/// - [`slug`](Self::slug), [`phone`](Self::phone), [`email`](Self::email) and
///   [`matches`](Self::matches) skip them.
/// - [`length`](Self::length) and [`date_time`](Self::date_time) read them as
///   empty text.
/// - [`one_of`](Self::one_of) compares them as `Null` against the candidates.
///
/// # Examples
///
/// ```
/// use field_rail::{fields, Rule, Validator};
///
/// let mut validator = Validator::new(fields! {
///     "name" => "Ada",
///     "email" => "ada@example",
///     "age" => "forty",
/// });
///
/// validator
///     .required(["name", "email", "age"])
///     .email("email")
///     .between("age", Some(18), Some(130));
///
/// let rules: Vec<Rule> = validator.errors().iter().map(|e| e.rule()).collect();
/// assert_eq!(rules, [Rule::Email, Rule::Number]);
///
/// let failure = validator.is_valid().unwrap_err();
/// assert_eq!(failure.to_string(), "The field email is not a valid email");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    fields: Fields,
    errors: ErrorList,
}

impl Validator {
    /// Creates a validator over `fields`.
    pub fn new(fields: impl Into<Fields>) -> Self {
        Self { fields: fields.into(), errors: ErrorList::new() }
    }

    /// Creates a validator over a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when `value` is not an object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Fields::try_from(value).map(Self::new)
    }

    /// The fields under validation.
    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// The value of `key` when present and not null.
    #[inline]
    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.fields.value(key)
    }

    /// Flags every key whose value is absent or null.
    ///
    /// ```
    /// use field_rail::{fields, FieldValue, Validator};
    ///
    /// let mut validator = Validator::new(fields! { "a" => "x", "b" => FieldValue::Null });
    /// validator.required(["a", "b", "c"]);
    ///
    /// let fields: Vec<&str> = validator.errors().iter().map(|e| e.field()).collect();
    /// assert_eq!(fields, ["b", "c"]);
    /// ```
    pub fn required<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            let key = key.as_ref();
            if self.fields.value(key).is_none() {
                self.record(key, Rule::Required, ParamVec::new());
            }
        }
        self
    }

    /// Flags every key whose value is absent, null or empty.
    ///
    /// See [`FieldValue::is_empty`] for what counts as empty; notably `0` and
    /// `"0"` do.
    pub fn not_empty<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            let key = key.as_ref();
            if self.fields.value(key).map_or(true, FieldValue::is_empty) {
                self.record(key, Rule::NotEmpty, ParamVec::new());
            }
        }
        self
    }

    /// Checks the character length of `key`.
    ///
    /// Records `maxLength` when longer than `max`, `minLength` when shorter than
    /// `min`, and when both bounds are given and either is violated, an additional
    /// `betweenLength`. A single call can therefore record two errors.
    ///
    /// ```
    /// use field_rail::{fields, Rule, Validator};
    ///
    /// let mut validator = Validator::new(fields! { "code" => "ab" });
    /// validator.length("code", Some(3), Some(5));
    ///
    /// let rules: Vec<Rule> = validator.errors().iter().map(|e| e.rule()).collect();
    /// assert_eq!(rules, [Rule::MinLength, Rule::BetweenLength]);
    /// ```
    pub fn length(&mut self, key: &str, min: Option<usize>, max: Option<usize>) -> &mut Self {
        let len = self.raw(key).char_len();

        if let Some(max) = max {
            if len > max {
                self.record(key, Rule::MaxLength, smallvec![max.into()]);
            }
        }
        if let Some(min) = min {
            if len < min {
                self.record(key, Rule::MinLength, smallvec![min.into()]);
            }
        }
        if let (Some(min), Some(max)) = (min, max) {
            if len < min || len > max {
                self.record(key, Rule::BetweenLength, smallvec![min.into(), max.into()]);
            }
        }
        self
    }

    /// Checks `key` against [`DEFAULT_DATE_TIME_FORMAT`] (`Y-m-d H:i:s`).
    pub fn date_time(&mut self, key: &str) -> &mut Self {
        self.date_time_format(key, DEFAULT_DATE_TIME_FORMAT)
    }

    /// Checks that `key` parses strictly against `format`.
    ///
    /// See [`parse_date_time`] for the format letters. Parse errors, leftover
    /// input and impossible dates all record `datetime` with `format` as the
    /// parameter.
    ///
    /// ```
    /// use field_rail::{fields, Validator};
    ///
    /// let mut validator = Validator::new(fields! {
    ///     "born" => "1815-12-10",
    ///     "died" => "1852-11-31",
    /// });
    /// validator.date_time_format("born", "Y-m-d").date_time_format("died", "Y-m-d");
    ///
    /// assert_eq!(validator.errors().len(), 1);
    /// assert_eq!(validator.errors()[0].field(), "died");
    /// ```
    pub fn date_time_format(&mut self, key: &str, format: &str) -> &mut Self {
        let parsed = self
            .raw(key)
            .as_text()
            .is_some_and(|text| parse_date_time(&text, format).is_ok());
        if !parsed {
            self.record(key, Rule::DateTime, smallvec![format.into()]);
        }
        self
    }

    /// Checks that a present value is a lowercase slug such as `my-slug-1`.
    pub fn slug(&mut self, key: &str) -> &mut Self {
        self.check_pattern(key, &SLUG_REGEX, Rule::Slug)
    }

    /// Checks that a present value is 4 groups of 2 digits, each optionally
    /// preceded by one of `-`, `_`, `/` or a space (`01 02 03 04`, `01-02-03-04`).
    pub fn phone(&mut self, key: &str) -> &mut Self {
        self.check_pattern(key, &PHONE_REGEX, Rule::Phone)
    }

    /// Checks that a present value starts with an email address.
    ///
    /// The pattern is permissive: quoted local parts, dotted atoms, bracketed IPv4
    /// domains and dotted domains with a 2+ letter TLD are accepted, case
    /// insensitively. Only the start is anchored, so text following a valid
    /// address is not rejected.
    pub fn email(&mut self, key: &str) -> &mut Self {
        self.check_pattern(key, &EMAIL_REGEX, Rule::Email)
    }

    /// Flags every key whose value is absent or not numeric.
    ///
    /// Integers, floats and numeric text (`"-1.5"`, `" 42 "`, `"1e3"`) pass;
    /// booleans and collections do not.
    pub fn number<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            let key = key.as_ref();
            if !self.fields.value(key).is_some_and(FieldValue::is_numeric) {
                self.record(key, Rule::Number, ParamVec::new());
            }
        }
        self
    }

    /// Checks that `key` equals one of `values` (the `enum` rule).
    ///
    /// An empty candidate list disables the rule. Comparison is exact: `"1"` does
    /// not equal `1`. The recorded parameter is the JSON encoding of the
    /// candidates, written by `serde_json`: `/` and non-ASCII characters stay
    /// unescaped (`["a/b","é"]`).
    ///
    /// ```
    /// use field_rail::{fields, Validator};
    ///
    /// let mut validator = Validator::new(fields! { "size" => "xl" });
    /// validator.one_of("size", ["s", "m"]).one_of("size", Vec::<&str>::new());
    ///
    /// assert_eq!(validator.errors().len(), 1);
    /// assert_eq!(
    ///     validator.errors()[0].to_string(),
    ///     r#"The field size must be one of ["s","m"]"#
    /// );
    /// ```
    pub fn one_of<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<FieldValue>,
    {
        let candidates: Vec<FieldValue> = values.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            return self;
        }

        if !candidates.contains(self.raw(key)) {
            let encoded = serde_json::to_string(&candidates).unwrap_or_default();
            self.record(key, Rule::Enum, smallvec![encoded.into()]);
        }
        self
    }

    /// Checks that `key` is numeric and within the given bounds.
    ///
    /// Always runs [`number`](Self::number) first. For numeric values it then
    /// records `max` when above `max`, `min` when below `min`, and when both bounds
    /// are given with `min <= max` and either is violated, an additional `between`.
    /// Non-numeric values only get the `number` error.
    ///
    /// ```
    /// use field_rail::{fields, Rule, Validator};
    ///
    /// let mut validator = Validator::new(fields! { "qty" => 12, "page" => "two" });
    /// validator
    ///     .between("qty", Some(1), Some(10))
    ///     .between("page", Some(1), Some(10));
    ///
    /// let rules: Vec<Rule> = validator.errors().iter().map(|e| e.rule()).collect();
    /// assert_eq!(rules, [Rule::Max, Rule::Between, Rule::Number]);
    /// ```
    pub fn between(&mut self, key: &str, min: Option<i64>, max: Option<i64>) -> &mut Self {
        self.number([key]);

        let (above, below) = match self.fields.value(key) {
            Some(value) if value.as_number().is_some() => (
                max.and_then(|max| compare_to_bound(value, max)) == Some(Ordering::Greater),
                min.and_then(|min| compare_to_bound(value, min)) == Some(Ordering::Less),
            ),
            _ => return self,
        };

        if let Some(max) = max.filter(|_| above) {
            self.record(key, Rule::Max, smallvec![max.into()]);
        }
        if let Some(min) = min.filter(|_| below) {
            self.record(key, Rule::Min, smallvec![min.into()]);
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min <= max && (above || below) {
                self.record(key, Rule::Between, smallvec![min.into(), max.into()]);
            }
        }
        self
    }

    /// Checks that a present value contains a match for `pattern` (the `match` rule).
    ///
    /// The pattern uses [`regex`] syntax and is not anchored. A pattern that fails
    /// to compile records `match` for any present value.
    pub fn matches(&mut self, key: &str, pattern: &str) -> &mut Self {
        match Regex::new(pattern) {
            Ok(regex) => self.matches_regex(key, &regex),
            Err(error) => {
                log_invalid_pattern(key, pattern, &error);
                if self.fields.value(key).is_some() {
                    self.record(key, Rule::Match, ParamVec::new());
                }
                self
            }
        }
    }

    /// [`matches`](Self::matches) with a precompiled regex.
    pub fn matches_regex(&mut self, key: &str, regex: &Regex) -> &mut Self {
        self.check_pattern(key, regex, Rule::Match)
    }

    /// Every recorded error, in the order rules were called.
    #[inline]
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// Consumes the validator and returns its errors.
    #[inline]
    pub fn into_errors(self) -> ErrorList {
        self.errors
    }

    /// Terminal check.
    ///
    /// Returns `Ok(true)` when nothing failed. Otherwise returns a
    /// [`ValidationFailure`] whose message is the *first* recorded error only; the
    /// full list stays available through [`ValidationFailure::errors`] and
    /// [`errors`](Self::errors).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] when at least one rule failed.
    pub fn is_valid(&self) -> Result<bool, ValidationFailure> {
        match ValidationFailure::from_errors(self.errors.clone()) {
            None => Ok(true),
            Some(failure) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    error_count = failure.errors().len(),
                    first = %failure.first(),
                    "validation failed"
                );
                Err(failure)
            }
        }
    }

    /// Consumes the validator, handing back the fields when nothing failed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] when at least one rule failed.
    pub fn into_result(self) -> Result<Fields, ValidationFailure> {
        match ValidationFailure::from_errors(self.errors) {
            None => Ok(self.fields),
            Some(failure) => Err(failure),
        }
    }

    fn raw(&self, key: &str) -> &FieldValue {
        self.fields.get(key).unwrap_or(&NULL)
    }

    fn check_pattern(&mut self, key: &str, regex: &Regex, rule: Rule) -> &mut Self {
        let failed = self
            .fields
            .value(key)
            .is_some_and(|value| !value.as_text().is_some_and(|text| regex.is_match(&text)));
        if failed {
            self.record(key, rule, ParamVec::new());
        }
        self
    }

    fn record(&mut self, key: &str, rule: Rule, params: ParamVec) {
        #[cfg(feature = "tracing")]
        tracing::debug!(field = key, rule = rule.as_str(), "validation rule failed");
        self.errors.push(ValidationError::new(key, rule, params));
    }
}

impl From<Fields> for Validator {
    fn from(fields: Fields) -> Self {
        Self::new(fields)
    }
}

// Integers compare exactly; floats and decimal text go through `f64`.
fn compare_to_bound(value: &FieldValue, bound: i64) -> Option<Ordering> {
    let exact = match value {
        FieldValue::Int(n) => Some(*n),
        FieldValue::Text(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    match exact {
        Some(n) => Some(n.cmp(&bound)),
        None => value.as_number()?.partial_cmp(&(bound as f64)),
    }
}

#[cfg(feature = "tracing")]
fn log_invalid_pattern(key: &str, pattern: &str, error: &regex::Error) {
    tracing::warn!(field = key, pattern, %error, "match pattern does not compile");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn log_invalid_pattern(_key: &str, _pattern: &str, _error: &regex::Error) {}
