//! Error types for format registration.
//!
//! Validation itself never errors; a value that does not conform is simply
//! `false`. These errors only cover misuse of the registry API.

use thiserror::Error;

/// Errors from [`FormatRegistry::register`](crate::FormatRegistry::register).
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// The validator's name is empty or whitespace-only.
    #[error("Invalid format name '{name}': {cause}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Human-readable description of the problem.
        cause: &'static str,
    },
}

/// A string that is not one of the built-in format names.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown built-in format '{0}'")]
pub struct UnknownFormat(pub String);
