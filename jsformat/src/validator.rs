//! The format validator capability.

use std::fmt;
use std::sync::Arc;

/// A named string predicate implementing one JSON Schema `format`.
///
/// Implementations must be total: `validate` returns `false` for anything
/// it cannot parse and never panics. They carry no mutable state, so one
/// instance can be shared across threads behind an `Arc`.
pub trait FormatValidator: Send + Sync {
    /// The format name this validator answers to, e.g. `"date-time"`.
    fn name(&self) -> &str;

    /// Whether `value` conforms to the format.
    fn validate(&self, value: &str) -> bool;
}

/// How validators are held by the registry and handed to callers.
pub type SharedValidator = Arc<dyn FormatValidator>;

impl fmt::Debug for dyn FormatValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatValidator")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// Adapts a closure into a [`FormatValidator`].
///
/// ```
/// use jsformat::{FormatFn, FormatValidator};
///
/// let v = FormatFn::new("ends-with-42", |s| s.ends_with("42"));
/// assert_eq!(v.name(), "ends-with-42");
/// assert!(v.validate("answer=42"));
/// assert!(!v.validate("answer=43"));
/// ```
pub struct FormatFn<F> {
    name: String,
    check: F,
}

impl<F> FormatFn<F> {
    /// Wrap `check` under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync,
    {
        Self {
            name: name.into(),
            check,
        }
    }
}

impl<F> FormatValidator for FormatFn<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

impl<F> fmt::Debug for FormatFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
