//! Ergonomic macros for building input mappings.
//!
//! - [`macro@crate::fields`] - Builds a [`Fields`](crate::Fields) mapping from
//!   `key => value` pairs, converting every value with `Into<FieldValue>`.
//!
//! # Examples
//!
//! ```
//! use field_rail::{fields, FieldValue};
//!
//! let fields = fields! {
//!     "title" => "Hello",
//!     "views" => 42,
//!     "draft" => false,
//!     "deleted_at" => FieldValue::Null,
//! };
//!
//! assert_eq!(fields.len(), 4);
//! assert!(fields.value("deleted_at").is_none());
//! ```

/// Builds a [`Fields`](crate::Fields) mapping from `key => value` pairs.
///
/// Keys are anything `Into<String>`, values anything
/// `Into<`[`FieldValue`](crate::FieldValue)`>`. A trailing comma is allowed and
/// `fields! {}` builds an empty mapping. Later duplicates replace earlier ones.
///
/// # Examples
///
/// ```
/// use field_rail::{fields, Validator};
///
/// let mut validator = Validator::new(fields! { "slug" => "hello-world" });
/// validator.slug("slug");
/// assert!(validator.is_valid().is_ok());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}
