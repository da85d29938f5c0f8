//! Construction sources for immutable maps.
//!
//! A map can be built from two shapes of source:
//!
//! - a sequence whose elements are key-value pairs ([`TryIntoPair`])
//! - an object that enumerates its keys and looks each one up
//!   ([`Mapping`](super::Mapping))
//!
//! Both are read with last-write-wins into a fresh entry table.

use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use super::Mapping;
use crate::error::InvalidSourceError;

/// An element of a construction sequence that may be a key-value pair.
///
/// Tuples are always pairs. Vectors and arrays are pairs only when they
/// hold exactly two items, the first being the key.
///
/// # Examples
///
/// ```rust
/// use immutable_map::map::TryIntoPair;
///
/// assert_eq!(("a", 1).try_into_pair(), Ok(("a", 1)));
/// assert_eq!(vec![1, 2].try_into_pair(), Ok((1, 2)));
/// assert_eq!(vec![1, 2, 3].try_into_pair(), Err(3));
/// assert_eq!([7].try_into_pair(), Err(1));
/// ```
pub trait TryIntoPair<K, V> {
    /// Splits the element into a key and a value.
    ///
    /// # Errors
    ///
    /// Returns the element's length when it does not hold exactly two items.
    fn try_into_pair(self) -> Result<(K, V), usize>;
}

impl<K, V> TryIntoPair<K, V> for (K, V) {
    #[inline]
    fn try_into_pair(self) -> Result<(K, V), usize> {
        Ok(self)
    }
}

impl<T> TryIntoPair<T, T> for Vec<T> {
    fn try_into_pair(self) -> Result<(T, T), usize> {
        let length = self.len();
        let mut items = self.into_iter();
        match (items.next(), items.next(), items.next()) {
            (Some(key), Some(value), None) => Ok((key, value)),
            _ => Err(length),
        }
    }
}

impl<T, const N: usize> TryIntoPair<T, T> for [T; N] {
    fn try_into_pair(self) -> Result<(T, T), usize> {
        let mut items = self.into_iter();
        match (items.next(), items.next(), items.next()) {
            (Some(key), Some(value), None) => Ok((key, value)),
            _ => Err(N),
        }
    }
}

/// Reads a pair sequence into a fresh entry table.
pub(super) fn collect_pairs<I, K, V, S>(
    source: I,
    hasher: S,
) -> Result<IndexMap<K, V, S>, InvalidSourceError>
where
    I: IntoIterator,
    I::Item: TryIntoPair<K, V>,
    K: Hash + Eq,
    S: BuildHasher,
{
    let iterator = source.into_iter();
    let (lower_bound, _) = iterator.size_hint();
    let mut entries = IndexMap::with_capacity_and_hasher(lower_bound, hasher);
    for (index, element) in iterator.enumerate() {
        let (key, value) = element
            .try_into_pair()
            .map_err(|length| InvalidSourceError::NotAPair { index, length })?;
        entries.insert(key, value);
    }
    Ok(entries)
}

/// Copies a lookup-capable source into a fresh entry table.
pub(super) fn collect_lookup<M, K, V, S>(
    source: &M,
    hasher: S,
) -> Result<IndexMap<K, V, S>, InvalidSourceError>
where
    M: Mapping<K, V> + ?Sized,
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    let mut entries = IndexMap::with_capacity_and_hasher(source.len(), hasher);
    for (index, key) in source.iter_keys().enumerate() {
        let value = source
            .get(key)
            .ok_or(InvalidSourceError::MissingKey { index })?;
        entries.insert(key.clone(), value.clone());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::RandomState;

    /// Advertises one key more than it can look up.
    struct Overpromising {
        keys: Vec<&'static str>,
    }

    impl Mapping<&'static str, i32> for Overpromising {
        fn get(&self, key: &&'static str) -> Option<&i32> {
            (*key == "a").then_some(&1)
        }

        fn len(&self) -> usize {
            self.keys.len()
        }

        fn iter_keys(&self) -> Box<dyn Iterator<Item = &&'static str> + '_> {
            Box::new(self.keys.iter())
        }
    }

    #[rstest]
    #[case(vec![], Err(0))]
    #[case(vec![1], Err(1))]
    #[case(vec![1, 2], Ok((1, 2)))]
    #[case(vec![1, 2, 3], Err(3))]
    fn test_vec_try_into_pair(#[case] element: Vec<i32>, #[case] expected: Result<(i32, i32), usize>) {
        assert_eq!(element.try_into_pair(), expected);
    }

    #[rstest]
    fn test_array_try_into_pair() {
        assert_eq!(["k", "v"].try_into_pair(), Ok(("k", "v")));
        assert_eq!(["k", "v", "w"].try_into_pair(), Err(3));
    }

    #[rstest]
    fn test_collect_pairs_reports_first_bad_index() {
        let source = vec![vec![1, 2], vec![3, 4], vec![5], vec![6, 7, 8]];
        let result = collect_pairs(source, RandomState::new());
        assert_eq!(
            result.map(|entries| entries.len()),
            Err(InvalidSourceError::NotAPair {
                index: 2,
                length: 1
            })
        );
    }

    #[rstest]
    fn test_collect_lookup_reports_missing_key() {
        let source = Overpromising {
            keys: vec!["a", "b"],
        };
        let result = collect_lookup(&source, RandomState::new());
        assert_eq!(
            result.map(|entries| entries.len()),
            Err(InvalidSourceError::MissingKey { index: 1 })
        );
    }

    #[rstest]
    fn test_collect_lookup_copies_in_source_order() {
        let source = Overpromising { keys: vec!["a"] };
        let entries = collect_lookup(&source, RandomState::new()).unwrap();
        assert_eq!(entries.get_index(0), Some((&"a", &1)));
    }
}
