//! Read-only views over the contents of an [`ImmutableMap`].
//!
//! Views borrow the map and project its keys, values or pairs. Since the
//! map never changes, a view always agrees with the map it came from.
//!
//! [`KeysView`] and [`ItemsView`] behave like sets: they support
//! membership, subset and disjointness checks, and compare equal
//! regardless of order. [`ValuesView`] may hold duplicates, so it only
//! offers a linear membership test.
//!
//! # Examples
//!
//! ```rust
//! use immutable_map::map::ImmutableMap;
//!
//! let map = ImmutableMap::new([("a", 1), ("b", 2)]);
//! let other = ImmutableMap::new([("b", 20), ("a", 10)]);
//!
//! assert!(map.keys().contains("a"));
//! assert!(map.values().contains(&2));
//! assert!(map.items().contains("b", &2));
//!
//! // Key views compare as sets
//! assert_eq!(map.keys(), other.keys());
//! assert_ne!(map.items(), other.items());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{
    DefaultBuildHasher, ImmutableMap, ImmutableMapIterator, ImmutableMapKeys, ImmutableMapValues,
};

// =============================================================================
// KeysView
// =============================================================================

/// A read-only, set-like view over the keys of an [`ImmutableMap`].
pub struct KeysView<'a, K, V, S = DefaultBuildHasher> {
    map: &'a ImmutableMap<K, V, S>,
}

impl<'a, K, V, S> KeysView<'a, K, V, S> {
    pub(super) const fn new(map: &'a ImmutableMap<K, V, S>) -> Self {
        Self { map }
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the keys in insertion order.
    ///
    /// Each call starts over from the first key.
    #[inline]
    pub fn iter(&self) -> ImmutableMapKeys<'a, K, V> {
        self.map.iter_keys()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeysView<'_, K, V, S> {
    /// Returns `true` if `key` is one of the keys.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns `true` if no key is shared with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let left = ImmutableMap::new([(1, "a"), (2, "b")]);
    /// let right = ImmutableMap::new([(3, 'c')]);
    /// assert!(left.keys().is_disjoint(&right.keys()));
    /// ```
    pub fn is_disjoint<V2, S2: BuildHasher>(&self, other: &KeysView<'_, K, V2, S2>) -> bool {
        if self.len() <= other.len() {
            self.iter().all(|key| !other.contains(key))
        } else {
            other.iter().all(|key| !self.contains(key))
        }
    }

    /// Returns `true` if every key is also a key of `other`.
    pub fn is_subset<V2, S2: BuildHasher>(&self, other: &KeysView<'_, K, V2, S2>) -> bool {
        self.len() <= other.len() && self.iter().all(|key| other.contains(key))
    }

    /// Returns `true` if every key of `other` is also a key here.
    pub fn is_superset<V2, S2: BuildHasher>(&self, other: &KeysView<'_, K, V2, S2>) -> bool {
        other.is_subset(self)
    }
}

impl<K, V, S> Clone for KeysView<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for KeysView<'_, K, V, S> {}

impl<'a, K, V, S> IntoIterator for KeysView<'a, K, V, S> {
    type Item = &'a K;
    type IntoIter = ImmutableMapKeys<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &KeysView<'a, K, V, S> {
    type Item = &'a K;
    type IntoIter = ImmutableMapKeys<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, V2, S, S2> PartialEq<KeysView<'_, K, V2, S2>> for KeysView<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
    S2: BuildHasher,
{
    /// Set equality of the keys.
    fn eq(&self, other: &KeysView<'_, K, V2, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Eq for KeysView<'_, K, V, S> {}

impl<K: fmt::Debug, V, S> fmt::Debug for KeysView<'_, K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("KeysView(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

// =============================================================================
// ValuesView
// =============================================================================

/// A read-only view over the values of an [`ImmutableMap`].
pub struct ValuesView<'a, K, V, S = DefaultBuildHasher> {
    map: &'a ImmutableMap<K, V, S>,
}

impl<'a, K, V, S> ValuesView<'a, K, V, S> {
    pub(super) const fn new(map: &'a ImmutableMap<K, V, S>) -> Self {
        Self { map }
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the values in insertion order.
    #[inline]
    pub fn iter(&self) -> ImmutableMapValues<'a, K, V> {
        self.map.iter_values()
    }

    /// Returns `true` if some entry holds `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }
}

impl<K, V, S> Clone for ValuesView<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for ValuesView<'_, K, V, S> {}

impl<'a, K, V, S> IntoIterator for ValuesView<'a, K, V, S> {
    type Item = &'a V;
    type IntoIter = ImmutableMapValues<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &ValuesView<'a, K, V, S> {
    type Item = &'a V;
    type IntoIter = ImmutableMapValues<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V: fmt::Debug, S> fmt::Debug for ValuesView<'_, K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ValuesView(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

// =============================================================================
// ItemsView
// =============================================================================

/// A read-only, set-like view over the key-value pairs of an [`ImmutableMap`].
pub struct ItemsView<'a, K, V, S = DefaultBuildHasher> {
    map: &'a ImmutableMap<K, V, S>,
}

impl<'a, K, V, S> ItemsView<'a, K, V, S> {
    pub(super) const fn new(map: &'a ImmutableMap<K, V, S>) -> Self {
        Self { map }
    }

    /// Returns the number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> ImmutableMapIterator<'a, K, V> {
        self.map.iter()
    }
}

impl<K: Hash + Eq, V: PartialEq, S: BuildHasher> ItemsView<'_, K, V, S> {
    /// Returns `true` if the map holds `value` under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("a", 1)]);
    /// assert!(map.items().contains("a", &1));
    /// assert!(!map.items().contains("a", &2));
    /// ```
    pub fn contains<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key) == Some(value)
    }

    /// Returns `true` if no pair is shared with `other`.
    pub fn is_disjoint<S2: BuildHasher>(&self, other: &ItemsView<'_, K, V, S2>) -> bool {
        self.iter().all(|(key, value)| !other.contains(key, value))
    }

    /// Returns `true` if every pair is also a pair of `other`.
    pub fn is_subset<S2: BuildHasher>(&self, other: &ItemsView<'_, K, V, S2>) -> bool {
        self.len() <= other.len() && self.iter().all(|(key, value)| other.contains(key, value))
    }

    /// Returns `true` if every pair of `other` is also a pair here.
    pub fn is_superset<S2: BuildHasher>(&self, other: &ItemsView<'_, K, V, S2>) -> bool {
        other.is_subset(self)
    }
}

impl<K, V, S> Clone for ItemsView<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for ItemsView<'_, K, V, S> {}

impl<'a, K, V, S> IntoIterator for ItemsView<'a, K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = ImmutableMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &ItemsView<'a, K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = ImmutableMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S, S2> PartialEq<ItemsView<'_, K, V, S2>> for ItemsView<'_, K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    /// Set equality of the pairs.
    fn eq(&self, other: &ItemsView<'_, K, V, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for ItemsView<'_, K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ItemsView<'_, K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ItemsView(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}
