//! The immutable, insertion-ordered map.
//!
//! This module provides [`ImmutableMap`], a map that is populated exactly
//! once at construction and is read-only for the rest of its lifetime.
//!
//! # Overview
//!
//! Entries live in an insertion-ordered hash table owned through a
//! reference-counted handle:
//!
//! - O(1) get, `contains_key`, `len` and hash
//! - O(n) iteration, equality and conversion to a mutable map
//! - O(1) copy (a copy is another handle to the same entries)
//!
//! # Identity Hashing
//!
//! `ImmutableMap` implements [`Hash`] from the identity of its shared entry
//! table, not from its contents. Hashing is therefore O(1) and does not
//! require `K` or `V` to be hashable as a whole, but two equal maps built
//! separately are not guaranteed to hash equally. Handles produced by
//! [`ImmutableMap::copy`] or `clone` share an identity and always hash
//! equally. Code that needs content-based hashing should hash
//! [`ImmutableMap::iter`] itself.
//!
//! # Examples
//!
//! ```rust
//! use immutable_map::map::ImmutableMap;
//! use std::collections::HashSet;
//!
//! let map = ImmutableMap::new([("K", "V")]);
//! assert_eq!(map["K"], "V");
//! assert_eq!(map.get("Q"), None);
//! assert_eq!(map.get_or("Q", &"D"), &"D");
//!
//! // Maps can be set members
//! let mut set = HashSet::new();
//! set.insert(map.clone());
//! assert!(set.contains(&map));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::{FromIterator, FusedIterator, Rev};
use std::ops::Index;

use indexmap::IndexMap;

use super::source::{collect_lookup, collect_pairs};
use super::views::{ItemsView, KeysView, ValuesView};
use super::{DefaultBuildHasher, Mapping, ReferenceCounter, TryIntoPair};
use crate::error::{InvalidSourceError, KeyNotFoundError};

// =============================================================================
// ImmutableMap Definition
// =============================================================================

/// An immutable, hashable map that preserves insertion order.
///
/// `ImmutableMap` is built once from a source of key-value pairs and never
/// changes afterwards. It has no `&mut self` methods and implements neither
/// `IndexMut` nor `Extend`, so every handle observes the same contents for
/// the whole lifetime of the map.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(n)       |
/// | `get`          | O(1)       |
/// | `contains_key` | O(1)       |
/// | `len`          | O(1)       |
/// | `copy`         | O(1)       |
/// | `hash`         | O(1)       |
/// | `eq`           | O(n)       |
/// | `to_hash_map`  | O(n)       |
///
/// # Construction
///
/// Duplicate keys follow last-write-wins: the later value is kept, while
/// the key stays at the position of its first occurrence.
///
/// ```rust
/// use immutable_map::map::ImmutableMap;
///
/// let map = ImmutableMap::new([("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(map.get("a"), Some(&3));
/// assert_eq!(map.len(), 2);
///
/// let keys: Vec<&&str> = map.iter_keys().collect();
/// assert_eq!(keys, vec![&"a", &"b"]);
/// ```
///
/// # Hashing
///
/// The [`Hash`] implementation is identity-based. Two content-equal maps
/// built separately compare equal but may hash differently; this departs
/// from the usual `Hash`/`Eq` agreement. See the [module docs](self).
///
/// # Immutability
///
/// None of the usual ways to change a map compile:
///
/// ```compile_fail,E0594
/// use immutable_map::map::ImmutableMap;
///
/// let mut map: ImmutableMap<String, i32> = ImmutableMap::new([("a".to_string(), 1)]);
/// map["a"] = 2;
/// ```
///
/// ```compile_fail,E0599
/// use immutable_map::map::ImmutableMap;
///
/// let mut map: ImmutableMap<&str, i32> = ImmutableMap::new([("a", 1)]);
/// map.insert("b", 2);
/// ```
///
/// ```compile_fail,E0599
/// use immutable_map::map::ImmutableMap;
///
/// let mut map: ImmutableMap<&str, Vec<i32>> = ImmutableMap::new([("a", vec![1])]);
/// if let Some(values) = map.get_mut("a") {
///     values.push(2);
/// }
/// ```
///
/// ```compile_fail,E0599
/// use immutable_map::map::ImmutableMap;
///
/// let mut map: ImmutableMap<&str, i32> = ImmutableMap::new([("a", 1)]);
/// map.extend([("b", 2)]);
/// ```
///
/// ```compile_fail,E0308
/// use immutable_map::map::ImmutableMap;
///
/// let map: ImmutableMap<&str, Vec<i32>> = ImmutableMap::new([("a", vec![1])]);
/// let values: &mut Vec<i32> = map.get("a").unwrap();
/// values.push(2);
/// ```
///
/// Generic code that needs a write path goes through
/// [`MappingMut`](crate::map::MappingMut), which rejects every write on an
/// `ImmutableMap` at runtime.
pub struct ImmutableMap<K, V, S = DefaultBuildHasher> {
    /// Shared entry table, written only while the map is being built
    entries: ReferenceCounter<IndexMap<K, V, S>>,
}

impl<K: Hash + Eq, V> ImmutableMap<K, V> {
    /// Creates a map from key-value pairs using the default hasher.
    ///
    /// Any `IntoIterator` of pairs works, including std maps, `IndexMap`,
    /// arrays and vectors of tuples.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new(vec![("one".to_string(), 1), ("two".to_string(), 2)]);
    /// assert_eq!(map.get("two"), Some(&2));
    /// ```
    #[must_use]
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_hasher(source, DefaultBuildHasher::default())
    }

    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map: ImmutableMap<String, i32> = ImmutableMap::empty();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a map from a sequence whose elements may not be pairs.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSourceError::NotAPair`] for the first element that
    /// does not hold exactly a key and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map: ImmutableMap<&str, &str> =
    ///     ImmutableMap::try_new(vec![vec!["a", "1"], vec!["b", "2"]]).unwrap();
    /// assert_eq!(map.get("b"), Some(&"2"));
    ///
    /// assert!(ImmutableMap::<&str, &str>::try_new(vec![vec!["c"]]).is_err());
    /// ```
    pub fn try_new<I>(source: I) -> Result<Self, InvalidSourceError>
    where
        I: IntoIterator,
        I::Item: TryIntoPair<K, V>,
    {
        Self::try_with_hasher(source, DefaultBuildHasher::default())
    }

    /// Creates a map from a source that can enumerate its keys and look
    /// each of them up.
    ///
    /// Keys and values are cloned, so the source stays with the caller and
    /// later changes to it do not affect the map.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSourceError::MissingKey`] if the source enumerates a
    /// key it cannot return a value for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    /// use std::collections::HashMap;
    ///
    /// let source: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
    /// let map: ImmutableMap<&str, i32> = ImmutableMap::try_from_lookup(&source).unwrap();
    /// assert_eq!(map, source);
    /// ```
    pub fn try_from_lookup<M>(source: &M) -> Result<Self, InvalidSourceError>
    where
        M: Mapping<K, V> + ?Sized,
        K: Clone,
        V: Clone,
    {
        collect_lookup(source, DefaultBuildHasher::default()).map(Self::from_entries)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ImmutableMap<K, V, S> {
    /// Creates a map from key-value pairs with an explicit hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    /// use std::hash::RandomState;
    ///
    /// let map = ImmutableMap::with_hasher([(1, "one")], RandomState::new());
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    #[must_use]
    pub fn with_hasher<I>(source: I, hasher: S) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iterator = source.into_iter();
        let (lower_bound, _) = iterator.size_hint();
        let mut entries = IndexMap::with_capacity_and_hasher(lower_bound, hasher);
        for (key, value) in iterator {
            entries.insert(key, value);
        }
        Self::from_entries(entries)
    }

    /// Fallible counterpart of [`ImmutableMap::with_hasher`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSourceError::NotAPair`] for the first element that
    /// is not a key-value pair.
    pub fn try_with_hasher<I>(source: I, hasher: S) -> Result<Self, InvalidSourceError>
    where
        I: IntoIterator,
        I::Item: TryIntoPair<K, V>,
    {
        collect_pairs(source, hasher).map(Self::from_entries)
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// This is the lenient lookup; see [`ImmutableMap::try_get`] for the
    /// strict one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("key".to_string(), 42)]);
    /// assert_eq!(map.get("key"), Some(&42));
    /// assert_eq!(map.get("other"), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] carrying the key's `Debug` rendering if
    /// the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([(1, "one")]);
    /// assert_eq!(map.try_get(&1), Ok(&"one"));
    /// assert_eq!(map.try_get(&2).unwrap_err().key, "2");
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.entries.get(key).ok_or_else(|| KeyNotFoundError {
            key: format!("{key:?}"),
        })
    }

    /// Returns the value for `key`, or `default` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("K", "V")]);
    /// assert_eq!(map.get_or("K", &"D"), &"V");
    /// assert_eq!(map.get_or("Q", &"D"), &"D");
    /// ```
    #[inline]
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns the stored key and its value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_key_value(key)
    }

    /// Returns the insertion position of `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("x", 1), ("y", 2)]);
    /// assert_eq!(map.index_of("y"), Some(1));
    /// assert_eq!(map.index_of("z"), None);
    /// ```
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_index_of(key)
    }

    /// Returns `true` if the map contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("a", 1)]);
    /// assert!(map.contains_key("a"));
    /// assert!(!map.contains_key("b"));
    /// ```
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Compares the map with any sequence that might be interpretable as
    /// key-value pairs.
    ///
    /// `other` is converted with last-write-wins. If the conversion fails,
    /// the result is `false` rather than an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([(1, 10), (2, 20)]);
    /// assert!(map.equals(vec![vec![2, 20], vec![1, 10]]));
    /// assert!(!map.equals(vec![vec![1, 10, 100]]));
    /// assert!(map.equals([(1, 0), (1, 10), (2, 20)]));
    /// ```
    pub fn equals<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: TryIntoPair<K, V>,
        V: PartialEq,
    {
        ImmutableMap::<K, V>::try_new(other)
            .is_ok_and(|converted| *self.entries == *converted.entries)
    }

    /// Returns a fresh, mutable `HashMap` holding clones of the entries.
    ///
    /// Changes to the returned map never reach this map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("a", 1)]);
    /// let mut plain = map.to_hash_map();
    /// plain.insert("b", 2);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns a fresh, mutable `IndexMap` holding clones of the entries in
    /// insertion order.
    #[must_use]
    pub fn to_index_map(&self) -> IndexMap<K, V, S>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        (*self.entries).clone()
    }

    /// Returns `true` if both maps hold the same pairs.
    fn same_entries<V2, S2>(&self, other: &IndexMap<K, V2, S2>) -> bool
    where
        V: PartialEq<V2>,
        S2: BuildHasher,
    {
        *self.entries == *other
    }

    /// Returns `true` if the pairs, read with last-write-wins, match this map.
    fn same_pairs<'a, I>(&self, pairs: I) -> bool
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: 'a,
        V: PartialEq + 'a,
    {
        let mut last_values: HashMap<&K, &V> = HashMap::new();
        for (key, value) in pairs {
            last_values.insert(key, value);
        }
        last_values.len() == self.len()
            && last_values
                .into_iter()
                .all(|(key, value)| self.get(key) == Some(value))
    }
}

impl<K, V, S> ImmutableMap<K, V, S> {
    /// Wraps a fully built entry table.
    fn from_entries(entries: IndexMap<K, V, S>) -> Self {
        Self {
            entries: ReferenceCounter::new(entries),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over key-value pairs in insertion order.
    ///
    /// Every call starts again from the first entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("x", 1), ("y", 2)]);
    /// let pairs: Vec<(&&str, &i32)> = map.iter().collect();
    /// assert_eq!(pairs, vec![(&"x", &1), (&"y", &2)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ImmutableMapIterator<'_, K, V> {
        ImmutableMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over keys in insertion order.
    #[inline]
    pub fn iter_keys(&self) -> ImmutableMapKeys<'_, K, V> {
        ImmutableMapKeys {
            inner: self.entries.keys(),
        }
    }

    /// Returns an iterator over values in insertion order.
    #[inline]
    pub fn iter_values(&self) -> ImmutableMapValues<'_, K, V> {
        ImmutableMapValues {
            inner: self.entries.values(),
        }
    }

    /// Returns an iterator over keys in reverse insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("x", 1), ("y", 2), ("z", 3)]);
    /// let keys: Vec<&&str> = map.reversed().collect();
    /// assert_eq!(keys, vec![&"z", &"y", &"x"]);
    /// ```
    #[inline]
    pub fn reversed(&self) -> Rev<ImmutableMapKeys<'_, K, V>> {
        self.iter_keys().rev()
    }

    /// Returns a read-only view over the keys.
    #[inline]
    pub const fn keys(&self) -> KeysView<'_, K, V, S> {
        KeysView::new(self)
    }

    /// Returns a read-only view over the values.
    #[inline]
    pub const fn values(&self) -> ValuesView<'_, K, V, S> {
        ValuesView::new(self)
    }

    /// Returns a read-only view over the key-value pairs.
    #[inline]
    pub const fn items(&self) -> ItemsView<'_, K, V, S> {
        ItemsView::new(self)
    }

    /// Returns the entry at insertion position `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("x", 1), ("y", 2)]);
    /// assert_eq!(map.get_index(1), Some((&"y", &2)));
    /// assert_eq!(map.get_index(2), None);
    /// ```
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get_index(index)
    }

    /// Returns the first inserted entry.
    #[inline]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first()
    }

    /// Returns the last inserted entry.
    #[inline]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last()
    }

    /// Returns the hasher of the entry table.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.entries.hasher()
    }

    /// Returns the identity of this map.
    ///
    /// The identity is the address of the shared entry table. It is stable
    /// for the lifetime of the map, shared by every copy, and is what
    /// [`Hash`] feeds to the hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("a", 1)]);
    /// assert_eq!(map.identity(), map.copy().identity());
    ///
    /// let twin = ImmutableMap::new([("a", 1)]);
    /// assert_eq!(map, twin);
    /// assert_ne!(map.identity(), twin.identity());
    /// ```
    #[inline]
    pub fn identity(&self) -> usize {
        ReferenceCounter::as_ptr(&self.entries).addr()
    }

    /// Returns `true` if both handles refer to the same map.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&this.entries, &other.entries)
    }

    /// Returns this same map.
    ///
    /// The entries are immutable, so copying hands out another handle to
    /// them instead of duplicating anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_map::map::ImmutableMap;
    ///
    /// let map = ImmutableMap::new([("a", vec![1, 2])]);
    /// assert!(ImmutableMap::ptr_eq(&map, &map.copy()));
    /// ```
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns this same map.
    ///
    /// Values are not cloned recursively, even if they are themselves
    /// mutable types; the result is a handle to the same entries.
    #[inline]
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the entries of an [`ImmutableMap`] in insertion order.
pub struct ImmutableMapIterator<'a, K, V> {
    inner: indexmap::map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for ImmutableMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ImmutableMapIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for ImmutableMapIterator<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ImmutableMapIterator<'_, K, V> {}

impl<K, V> Clone for ImmutableMapIterator<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An iterator over the keys of an [`ImmutableMap`] in insertion order.
pub struct ImmutableMapKeys<'a, K, V> {
    inner: indexmap::map::Keys<'a, K, V>,
}

impl<'a, K, V> Iterator for ImmutableMapKeys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ImmutableMapKeys<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for ImmutableMapKeys<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ImmutableMapKeys<'_, K, V> {}

impl<K, V> Clone for ImmutableMapKeys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An iterator over the values of an [`ImmutableMap`] in insertion order.
pub struct ImmutableMapValues<'a, K, V> {
    inner: indexmap::map::Values<'a, K, V>,
}

impl<'a, K, V> Iterator for ImmutableMapValues<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ImmutableMapValues<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for ImmutableMapValues<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ImmutableMapValues<'_, K, V> {}

impl<K, V> Clone for ImmutableMapValues<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the entries of an [`ImmutableMap`].
///
/// Entries are moved out when the consumed handle was the only one, and
/// cloned otherwise.
pub struct ImmutableMapIntoIterator<K, V> {
    inner: indexmap::map::IntoIter<K, V>,
}

impl<K, V> Iterator for ImmutableMapIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ImmutableMapIntoIterator<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for ImmutableMapIntoIterator<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ImmutableMapIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S> Clone for ImmutableMap<K, V, S> {
    /// Returns another handle to the same entries.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: ReferenceCounter::clone(&self.entries),
        }
    }
}

impl<K, V, S: Default> Default for ImmutableMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self::from_entries(IndexMap::with_hasher(S::default()))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for ImmutableMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::with_hasher(iter, S::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> From<HashMap<K, V, S>> for ImmutableMap<K, V> {
    fn from(source: HashMap<K, V, S>) -> Self {
        Self::new(source)
    }
}

impl<K: Hash + Eq, V> From<BTreeMap<K, V>> for ImmutableMap<K, V> {
    fn from(source: BTreeMap<K, V>) -> Self {
        Self::new(source)
    }
}

impl<K, V, S> From<IndexMap<K, V, S>> for ImmutableMap<K, V, S> {
    /// Takes ownership of an already-built `IndexMap` without copying it.
    fn from(source: IndexMap<K, V, S>) -> Self {
        Self::from_entries(source)
    }
}

impl<K: Hash + Eq, V> From<Vec<(K, V)>> for ImmutableMap<K, V> {
    fn from(source: Vec<(K, V)>) -> Self {
        Self::new(source)
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for ImmutableMap<K, V> {
    fn from(source: [(K, V); N]) -> Self {
        Self::new(source)
    }
}

impl<'a, K, V, S> IntoIterator for &'a ImmutableMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = ImmutableMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Clone, V: Clone, S: Clone> IntoIterator for ImmutableMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = ImmutableMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        ImmutableMapIntoIterator {
            inner: ReferenceCounter::unwrap_or_clone(self.entries).into_iter(),
        }
    }
}

impl<K, Q, V, S> Index<&Q> for ImmutableMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent. Use [`ImmutableMap::try_get`] to get a
    /// [`KeyNotFoundError`] instead.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        &self.entries[key]
    }
}

impl<K, V, S> Hash for ImmutableMap<K, V, S> {
    /// Hashes the identity of the map, not its contents.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl<K, V, V2, S, S2> PartialEq<ImmutableMap<K, V2, S2>> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq<V2>,
    S: BuildHasher,
    S2: BuildHasher,
{
    /// Order-independent pair-set equality.
    fn eq(&self, other: &ImmutableMap<K, V2, S2>) -> bool {
        self.same_entries(&other.entries)
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for ImmutableMap<K, V, S> {}

impl<K, V, S, S2> PartialEq<HashMap<K, V, S2>> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && other
                .iter()
                .all(|(key, value)| self.get(key) == Some(value))
    }
}

impl<K, V, S, S2> PartialEq<ImmutableMap<K, V, S>> for HashMap<K, V, S2>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &ImmutableMap<K, V, S>) -> bool {
        other == self
    }
}

impl<K, V, S> PartialEq<BTreeMap<K, V>> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &BTreeMap<K, V>) -> bool {
        self.len() == other.len()
            && other
                .iter()
                .all(|(key, value)| self.get(key) == Some(value))
    }
}

impl<K, V, S> PartialEq<ImmutableMap<K, V, S>> for BTreeMap<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &ImmutableMap<K, V, S>) -> bool {
        other == self
    }
}

impl<K, V, S, S2> PartialEq<IndexMap<K, V, S2>> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &IndexMap<K, V, S2>) -> bool {
        self.same_entries(other)
    }
}

impl<K, V, S, S2> PartialEq<ImmutableMap<K, V, S>> for IndexMap<K, V, S2>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &ImmutableMap<K, V, S>) -> bool {
        other.same_entries(self)
    }
}

impl<K, V, S> PartialEq<[(K, V)]> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    /// Compares against the pairs read with last-write-wins.
    fn eq(&self, other: &[(K, V)]) -> bool {
        self.same_pairs(other.iter().map(|(key, value)| (key, value)))
    }
}

impl<K, V, S> PartialEq<Vec<(K, V)>> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Vec<(K, V)>) -> bool {
        *self == *other.as_slice()
    }
}

impl<K, V, S, const N: usize> PartialEq<[(K, V); N]> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &[(K, V); N]) -> bool {
        *self == *other.as_slice()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ImmutableMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ImmutableMap(")?;
        formatter.debug_map().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for ImmutableMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for ImmutableMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Caps a deserializer's length hint so a hostile input cannot force a huge allocation.
#[cfg(feature = "serde")]
fn cautious_capacity(hint: Option<usize>) -> usize {
    const MAX_PREALLOCATED_ENTRIES: usize = 4096;
    hint.unwrap_or(0).min(MAX_PREALLOCATED_ENTRIES)
}

#[cfg(feature = "serde")]
struct ImmutableMapVisitor<K, V, S> {
    marker: std::marker::PhantomData<fn() -> ImmutableMap<K, V, S>>,
}

#[cfg(feature = "serde")]
impl<K, V, S> ImmutableMapVisitor<K, V, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for ImmutableMapVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = ImmutableMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map or a sequence of key-value pairs")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries =
            IndexMap::with_capacity_and_hasher(cautious_capacity(access.size_hint()), S::default());
        while let Some((key, value)) = access.next_entry()? {
            entries.insert(key, value);
        }
        Ok(ImmutableMap::from_entries(entries))
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut entries =
            IndexMap::with_capacity_and_hasher(cautious_capacity(access.size_hint()), S::default());
        while let Some((key, value)) = access.next_element::<(K, V)>()? {
            entries.insert(key, value);
        }
        Ok(ImmutableMap::from_entries(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for ImmutableMap<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Pair sequences are only recognizable in self-describing formats
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(ImmutableMapVisitor::new())
        } else {
            deserializer.deserialize_map(ImmutableMapVisitor::new())
        }
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

/// A parallel iterator over the entries of an [`ImmutableMap`].
#[cfg(feature = "rayon")]
pub type ImmutableMapParallelRefIterator<'a, K, V> = indexmap::map::rayon::ParIter<'a, K, V>;

#[cfg(feature = "rayon")]
impl<'a, K: Sync, V: Sync, S> rayon::iter::IntoParallelIterator for &'a ImmutableMap<K, V, S> {
    type Iter = ImmutableMapParallelRefIterator<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_par_iter(self) -> Self::Iter {
        rayon::iter::IntoParallelIterator::into_par_iter(&*self.entries)
    }
}

// =============================================================================
// Tests
// =============================================================================
