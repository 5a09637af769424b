use core::fmt::{self, Display};

use crate::types::error_list::ErrorList;
use crate::types::validation_error::ValidationError;

/// Terminal failure returned by [`Validator::is_valid`](crate::Validator::is_valid).
///
/// The failure is *about* the first recorded error: [`Display`] renders only that
/// one and [`source`](std::error::Error::source) points at it. The complete list is
/// still carried along for callers that want every message.
///
/// With the alternate flag (`{:#}`) every error is listed, one per line:
///
/// ```text
/// The field name is required
///   - The field name is required
///   - The field age is not a valid number
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    errors: ErrorList,
}

impl ValidationFailure {
    /// Returns `None` when `errors` is empty: an empty list is not a failure.
    pub(crate) fn from_errors(errors: ErrorList) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The first recorded error.
    #[inline]
    pub fn first(&self) -> &ValidationError {
        &self.errors[0]
    }

    /// Every recorded error, in order.
    #[inline]
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    #[inline]
    pub fn into_errors(self) -> ErrorList {
        self.errors
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.first(), f)?;
        if f.alternate() {
            for error in self.errors.iter() {
                write!(f, "\n  - {error}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.first())
    }
}
