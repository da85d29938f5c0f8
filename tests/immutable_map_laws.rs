//! Property-based tests for ImmutableMap.
//!
//! This module verifies that ImmutableMap agrees with standard dictionary
//! construction and keeps its contracts for arbitrary inputs using proptest.

use immutable_map::map::{ImmutableMap, MappingMut};
use indexmap::IndexMap;
use proptest::prelude::*;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,4}".prop_map(|s| s)
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    any::<i32>()
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), arbitrary_value()), 0..50)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction Law: ImmutableMap(s).to_hash_map() == dict(s)
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_matches_plain_map(entries in arbitrary_entries()) {
        let expected: HashMap<String, i32> = entries.iter().cloned().collect();
        let map = ImmutableMap::new(entries);

        prop_assert_eq!(map.len(), expected.len());
        prop_assert_eq!(map.to_hash_map(), expected);
    }
}

// =============================================================================
// Order Law: keys follow first occurrence order in the source
// =============================================================================

proptest! {
    #[test]
    fn prop_keys_follow_first_occurrence(entries in arbitrary_entries()) {
        let mut expected: Vec<&String> = Vec::new();
        for (key, _) in &entries {
            if !expected.contains(&key) {
                expected.push(key);
            }
        }
        let map = ImmutableMap::new(entries.clone());
        let keys: Vec<&String> = map.iter_keys().collect();
        let reversed: Vec<&String> = map.reversed().collect();
        let mut expected_reversed = expected.clone();
        expected_reversed.reverse();

        prop_assert_eq!(keys, expected);
        prop_assert_eq!(reversed, expected_reversed);
    }
}

// =============================================================================
// Lookup Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_lookup_agrees_with_membership(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        default in arbitrary_value()
    ) {
        let map = ImmutableMap::new(entries);

        if map.contains_key(&key) {
            let strict = map.try_get(&key);
            prop_assert!(strict.is_ok());
            prop_assert_eq!(map.get(&key), strict.ok());
            prop_assert_eq!(Some(map.get_or(&key, &default)), map.get(&key));
        } else {
            prop_assert!(map.try_get(&key).is_err());
            prop_assert_eq!(map.get(&key), None);
            prop_assert_eq!(map.get_or(&key, &default), &default);
        }
    }
}

// =============================================================================
// Equality Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_order(entries in arbitrary_entries()) {
        let plain: IndexMap<String, i32> = entries.into_iter().collect();
        let mut reversed_pairs: Vec<(String, i32)> = plain.clone().into_iter().collect();
        reversed_pairs.reverse();

        let forward = ImmutableMap::from(plain.clone());
        let backward = ImmutableMap::new(reversed_pairs.clone());

        prop_assert_eq!(&forward, &backward);
        prop_assert!(forward == plain);
        prop_assert!(forward == reversed_pairs);
    }

    #[test]
    fn prop_equality_agrees_with_plain_maps(
        left in arbitrary_entries(),
        right in arbitrary_entries()
    ) {
        let left_plain: HashMap<String, i32> = left.iter().cloned().collect();
        let right_plain: HashMap<String, i32> = right.iter().cloned().collect();
        let left_map = ImmutableMap::new(left);
        let right_map = ImmutableMap::new(right);

        prop_assert_eq!(left_map == right_map, left_plain == right_plain);
    }

    #[test]
    fn prop_equals_never_fails_on_bad_sources(
        entries in prop::collection::vec((any::<i8>(), any::<i8>()), 0..10),
        extra in prop::collection::vec(any::<i8>(), 3..6)
    ) {
        let map = ImmutableMap::new(entries.clone());
        let mut sequences: Vec<Vec<i8>> = entries
            .into_iter()
            .map(|(key, value)| vec![key, value])
            .collect();
        prop_assert!(map.equals(sequences.clone()));

        sequences.push(extra);
        prop_assert!(!map.equals(sequences));
    }
}

// =============================================================================
// Identity Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_copy_is_identity(entries in arbitrary_entries()) {
        let map = ImmutableMap::new(entries);

        prop_assert!(ImmutableMap::ptr_eq(&map, &map.copy()));
        prop_assert!(ImmutableMap::ptr_eq(&map, &map.deep_copy()));
        prop_assert_eq!(hash_of(&map), hash_of(&map.copy()));
        prop_assert_eq!(hash_of(&map), hash_of(&map));
    }

    #[test]
    fn prop_rejected_writes_leave_contents(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let mut map = ImmutableMap::new(entries);
        let before = map.to_hash_map();

        prop_assert!(map.try_set(key.clone(), value).is_err());
        prop_assert!(map.try_delete(&key).is_err());
        prop_assert!(map.try_clear().is_err());
        prop_assert_eq!(map.to_hash_map(), before);
    }
}

// =============================================================================
// View Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_views_agree_with_map(entries in arbitrary_entries()) {
        let map = ImmutableMap::new(entries);
        let keys = map.keys();
        let values = map.values();
        let items = map.items();

        prop_assert_eq!(keys.len(), map.len());
        prop_assert_eq!(values.len(), map.len());
        prop_assert_eq!(items.len(), map.len());

        for (key, value) in &map {
            prop_assert!(keys.contains(key));
            prop_assert!(values.contains(value));
            prop_assert!(items.contains(key, value));
        }

        let zipped: Vec<(&String, &i32)> = keys.iter().zip(values.iter()).collect();
        let paired: Vec<(&String, &i32)> = items.iter().collect();
        prop_assert_eq!(zipped, paired);
    }
}
