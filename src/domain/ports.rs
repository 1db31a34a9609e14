use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::error::ConfigError;

/// Read-only view over a string-to-string environment mapping
///
/// This is the seam the loader reads through: the live process
/// environment in production, an injected map in tests or when a host
/// process wants to resolve settings for somebody else.
pub trait Environment {
    /// Look up `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` when the key is set (an empty string is a value)
    /// * `Ok(None)` when the key is absent
    /// * `Err(ConfigError)` when the key is set but cannot be read
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.get(key).cloned())
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.get(key).cloned())
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).var(key)
    }
}
