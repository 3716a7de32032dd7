//! Keyed instance registry.
//!
//! A [`Registry`] keeps at most one instance of a type per string key and
//! hands out references to it. It replaces global singleton and multiton
//! patterns with an explicit value the caller owns and passes where needed,
//! so tests can construct isolated registries and nothing hides in process
//! statics.
//!
//! ```
//! use acorn::registry::Registry;
//!
//! let mut pool: Registry<Vec<u8>> = Registry::new();
//! pool.get_or_forge("first", || vec![1, 2, 3]);
//!
//! // The forge closure does not run again for an existing key
//! let existing = pool.get_or_forge("first", || unreachable!());
//! assert_eq!(existing, &[1, 2, 3]);
//! ```

use indexmap::IndexMap;
use tracing::debug;

/// A keyed pool of lazily constructed instances.
///
/// Instances are created on first request through a forge closure and kept
/// until removed or the registry is dropped. Keys iterate in first-forge
/// order.
#[derive(Debug, Clone, Default)]
pub struct Registry<T> {
    instances: IndexMap<String, T>,
}

impl<T> Registry<T> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            instances: IndexMap::new(),
        }
    }

    /// Returns the instance for `key`, forging it first if absent.
    ///
    /// The forge closure runs at most once per key for the lifetime of the
    /// entry.
    pub fn get_or_forge(&mut self, key: impl Into<String>, forge: impl FnOnce() -> T) -> &T {
        let key = key.into();
        self.instances.entry(key.clone()).or_insert_with(|| {
            debug!(key = %key, "Forging new registry instance");
            forge()
        })
    }

    /// Mutable variant of [`get_or_forge`](Registry::get_or_forge)
    pub fn get_or_forge_mut(
        &mut self,
        key: impl Into<String>,
        forge: impl FnOnce() -> T,
    ) -> &mut T {
        let key = key.into();
        self.instances.entry(key.clone()).or_insert_with(|| {
            debug!(key = %key, "Forging new registry instance");
            forge()
        })
    }

    /// Forges a fresh instance for `key` unconditionally, returning the
    /// instance it replaced if any.
    pub fn forge_replace(&mut self, key: impl Into<String>, forge: impl FnOnce() -> T) -> Option<T> {
        let key = key.into();
        debug!(key = %key, "Replacing registry instance");
        self.instances.insert(key, forge())
    }

    /// Returns the instance for `key` without forging
    pub fn get(&self, key: &str) -> Option<&T> {
        self.instances.get(key)
    }

    /// Returns the instance for `key` mutably, without forging
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.instances.get_mut(key)
    }

    /// Returns true when an instance exists for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.instances.contains_key(key)
    }

    /// Removes and returns the instance for `key`.
    ///
    /// The next [`get_or_forge`](Registry::get_or_forge) for the key forges a
    /// new instance.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let removed = self.instances.shift_remove(key);
        if removed.is_some() {
            debug!(key = %key, "Removed registry instance");
        }
        removed
    }

    /// Drops every instance
    pub fn clear(&mut self) {
        debug!(count = self.instances.len(), "Clearing registry");
        self.instances.clear();
    }

    /// Number of live instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns true when the registry holds no instances
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Keys of live instances in first-forge order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.instances.keys()
    }

    /// Iterates over key/instance pairs in first-forge order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.instances.iter()
    }
}
