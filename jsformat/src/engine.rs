//! Glue for the `jsonschema` crate's validation engine.

use jsonschema::ValidationOptions;

use crate::registry::FormatRegistry;

/// Install every validator currently in `registry` as a `jsonschema` custom
/// format and enable format assertion.
///
/// The options capture a snapshot: validators registered afterwards are not
/// seen by validators built from the returned options.
///
/// ```
/// use jsformat::{FormatRegistry, engine};
/// use serde_json::json;
///
/// let registry = FormatRegistry::with_builtins();
/// let schema = json!({"type": "string", "format": "ipv6"});
/// let validator = engine::install(&registry, jsonschema::options())
///     .build(&schema)
///     .unwrap();
/// assert!(validator.is_valid(&json!("2001:0db8:0000:0000:0000:ff00:0042:8329")));
/// ```
#[must_use]
pub fn install(registry: &FormatRegistry, options: ValidationOptions) -> ValidationOptions {
    registry
        .snapshot()
        .into_iter()
        .fold(options.should_validate_formats(true), |options, validator| {
            let name = validator.name().to_owned();
            options.with_format(name, move |value: &str| validator.validate(value))
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::validator::FormatFn;
    use serde_json::json;

    #[test]
    fn test_custom_format_reaches_engine() {
        let registry = FormatRegistry::new();
        registry
            .register(FormatFn::new("ends-with-42", |s| s.ends_with("42")))
            .unwrap();

        let schema = json!({"type": "string", "format": "ends-with-42"});
        let validator = install(&registry, jsonschema::options())
            .build(&schema)
            .unwrap();

        assert!(validator.is_valid(&json!("Hello42")));
        assert!(!validator.is_valid(&json!("Hello43")));
    }

    #[test]
    fn test_builtin_date_reaches_engine() {
        let registry = FormatRegistry::with_builtins();
        let schema = json!({"format": "date"});
        let validator = install(&registry, jsonschema::options())
            .build(&schema)
            .unwrap();

        assert!(validator.is_valid(&json!("2024-02-29")));
        assert!(!validator.is_valid(&json!("2023-02-29")));
        assert!(validator.is_valid(&json!(17)));
    }
}
