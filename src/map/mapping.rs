//! Capability traits for code that is generic over maps.
//!
//! [`Mapping`] is the read-only capability set shared by `ImmutableMap`,
//! the std maps and `IndexMap`, so an `ImmutableMap` can be passed
//! anywhere a read-only mapping is expected.
//!
//! [`MappingMut`] is the write seam. The mutable maps accept writes through
//! it, while `ImmutableMap` rejects every write with
//! [`ImmutableWriteError`] and keeps its contents.
//!
//! # Examples
//!
//! ```rust
//! use immutable_map::map::{ImmutableMap, MappingMut};
//! use std::collections::HashMap;
//!
//! fn record<M: MappingMut<&'static str, i32>>(target: &mut M) -> bool {
//!     target.try_set("seen", 1).is_ok()
//! }
//!
//! let mut plain: HashMap<&str, i32> = HashMap::new();
//! assert!(record(&mut plain));
//!
//! let mut frozen: ImmutableMap<&str, i32> = ImmutableMap::empty();
//! assert!(!record(&mut frozen));
//! assert!(frozen.is_empty());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use super::ImmutableMap;
use crate::error::ImmutableWriteError;

/// Read-only access to a key-value container.
///
/// Implementors must return a value from [`Mapping::get`] for every key
/// yielded by [`Mapping::iter_keys`]; `ImmutableMap::try_from_lookup`
/// reports a violation as `InvalidSourceError::MissingKey`.
pub trait Mapping<K, V> {
    /// Returns the value for `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Enumerates the keys.
    fn iter_keys(&self) -> Box<dyn Iterator<Item = &K> + '_>;
}

/// Write access to a key-value container that may refuse writes.
pub trait MappingMut<K, V>: Mapping<K, V> {
    /// Sets `key` to `value`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ImmutableWriteError`] if the container is immutable.
    fn try_set(&mut self, key: K, value: V) -> Result<Option<V>, ImmutableWriteError>;

    /// Deletes `key`, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`ImmutableWriteError`] if the container is immutable.
    fn try_delete(&mut self, key: &K) -> Result<Option<V>, ImmutableWriteError>;

    /// Deletes every entry.
    ///
    /// # Errors
    ///
    /// Returns [`ImmutableWriteError`] if the container is immutable.
    fn try_clear(&mut self) -> Result<(), ImmutableWriteError>;
}

// =============================================================================
// ImmutableMap
// =============================================================================

impl<K: Hash + Eq, V, S: BuildHasher> Mapping<K, V> for ImmutableMap<K, V, S> {
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter_keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(Self::iter_keys(self))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MappingMut<K, V> for ImmutableMap<K, V, S> {
    fn try_set(&mut self, _key: K, _value: V) -> Result<Option<V>, ImmutableWriteError> {
        Err(ImmutableWriteError {
            operation: "try_set",
        })
    }

    fn try_delete(&mut self, _key: &K) -> Result<Option<V>, ImmutableWriteError> {
        Err(ImmutableWriteError {
            operation: "try_delete",
        })
    }

    fn try_clear(&mut self) -> Result<(), ImmutableWriteError> {
        Err(ImmutableWriteError {
            operation: "try_clear",
        })
    }
}

// =============================================================================
// Standard Maps
// =============================================================================

impl<K: Hash + Eq, V, S: BuildHasher> Mapping<K, V> for HashMap<K, V, S> {
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter_keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.keys())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MappingMut<K, V> for HashMap<K, V, S> {
    fn try_set(&mut self, key: K, value: V) -> Result<Option<V>, ImmutableWriteError> {
        Ok(self.insert(key, value))
    }

    fn try_delete(&mut self, key: &K) -> Result<Option<V>, ImmutableWriteError> {
        Ok(self.remove(key))
    }

    fn try_clear(&mut self) -> Result<(), ImmutableWriteError> {
        self.clear();
        Ok(())
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter_keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.keys())
    }
}

impl<K: Ord, V> MappingMut<K, V> for BTreeMap<K, V> {
    fn try_set(&mut self, key: K, value: V) -> Result<Option<V>, ImmutableWriteError> {
        Ok(self.insert(key, value))
    }

    fn try_delete(&mut self, key: &K) -> Result<Option<V>, ImmutableWriteError> {
        Ok(self.remove(key))
    }

    fn try_clear(&mut self) -> Result<(), ImmutableWriteError> {
        self.clear();
        Ok(())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Mapping<K, V> for IndexMap<K, V, S> {
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter_keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.keys())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MappingMut<K, V> for IndexMap<K, V, S> {
    fn try_set(&mut self, key: K, value: V) -> Result<Option<V>, ImmutableWriteError> {
        Ok(self.insert(key, value))
    }

    /// Removes the key while keeping the remaining entries in order.
    fn try_delete(&mut self, key: &K) -> Result<Option<V>, ImmutableWriteError> {
        Ok(self.shift_remove(key))
    }

    fn try_clear(&mut self) -> Result<(), ImmutableWriteError> {
        self.clear();
        Ok(())
    }
}
