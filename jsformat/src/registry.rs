//! Name-to-validator mapping consumed by a schema engine.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::builtin::builtin_validators;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::validator::{FormatValidator, SharedValidator};

/// Registered validators keyed by their exact, case-sensitive name.
///
/// Registration replaces any validator already registered under the same
/// name. Reads take a shared lock and writes an exclusive one, so a
/// concurrent [`lookup`](Self::lookup) never sees a half-applied update.
///
/// ```
/// use jsformat::{FormatFn, FormatRegistry};
///
/// let registry = FormatRegistry::with_builtins();
/// assert_eq!(registry.validate("ipv4", "10.0.0.1"), Some(true));
/// assert_eq!(registry.validate("ipv4", "10.0.0"), Some(false));
/// assert_eq!(registry.validate("color", "red"), None);
///
/// registry.register(FormatFn::new("color", |s| s == "red")).unwrap();
/// assert_eq!(registry.validate("color", "red"), Some(true));
/// ```
pub struct FormatRegistry {
    validators: RwLock<HashMap<String, SharedValidator>>,
}

impl FormatRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: RwLock::new(HashMap::new()),
        }
    }

    /// A registry holding the ten built-in validators with default options.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// A registry holding the ten built-in validators built from `config`.
    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        let map = builtin_validators(config)
            .into_iter()
            .map(|v| (v.name().to_owned(), v))
            .collect();
        Self {
            validators: RwLock::new(map),
        }
    }

    // Every write is a single insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, SharedValidator>> {
        self.validators
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, SharedValidator>> {
        self.validators
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `validator` under its own name.
    ///
    /// Returns the validator it replaced, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] if the name is empty or
    /// whitespace-only.
    pub fn register<V>(&self, validator: V) -> Result<Option<SharedValidator>, RegistryError>
    where
        V: FormatValidator + 'static,
    {
        self.register_arc(Arc::new(validator))
    }

    /// Register an already shared validator under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] if the name is empty or
    /// whitespace-only.
    pub fn register_arc(
        &self,
        validator: SharedValidator,
    ) -> Result<Option<SharedValidator>, RegistryError> {
        let name = validator.name().to_owned();
        check_name(&name)?;

        let replaced = self.write().insert(name.clone(), validator);
        if replaced.is_some() {
            debug!(format = %name, "replaced registered format validator");
        } else {
            debug!(format = %name, "registered format validator");
        }
        Ok(replaced)
    }

    /// The validator registered under exactly `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SharedValidator> {
        self.read().get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Run the validator registered under `name` on `value`.
    ///
    /// `None` means no validator is registered; a schema engine treats an
    /// unknown format as no constraint.
    #[must_use]
    pub fn validate(&self, name: &str, value: &str) -> Option<bool> {
        // Clone the Arc out so the lock is not held during validation.
        let validator = self.lookup(name)?;
        Some(validator.validate(value))
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// A point-in-time copy of every registered validator, sorted by name.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SharedValidator> {
        let mut validators: Vec<_> = self.read().values().cloned().collect();
        validators.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        validators
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.names())
            .finish()
    }
}

fn check_name(name: &str) -> Result<(), RegistryError> {
    let cause = if name.is_empty() {
        "name must not be empty"
    } else if name.trim().is_empty() {
        "name must not be blank"
    } else {
        return Ok(());
    };
    Err(RegistryError::InvalidName {
        name: name.to_owned(),
        cause,
    })
}
