#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! These tests verify that ImmutableMap serializes as a map in insertion
//! order and deserializes from either construction shape.

use immutable_map::map::ImmutableMap;
use rstest::rstest;

#[rstest]
fn test_json_roundtrip() {
    let map = ImmutableMap::new([
        ("one".to_string(), 1),
        ("two".to_string(), 2),
        ("three".to_string(), 3),
    ]);
    let json = serde_json::to_string(&map).unwrap();
    let restored: ImmutableMap<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(map, restored);
}

#[rstest]
fn test_bincode_roundtrip() {
    let map = ImmutableMap::new([
        ("zeta".to_string(), 26),
        ("alpha".to_string(), 1),
        ("mu".to_string(), 12),
    ]);
    let bytes = bincode::serialize(&map).unwrap();
    let restored: ImmutableMap<String, i32> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(restored, map);
    let keys: Vec<&str> = restored.iter_keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mu"]);
}

#[rstest]
fn test_bincode_empty_roundtrip() {
    let map: ImmutableMap<u64, Vec<u8>> = ImmutableMap::empty();
    let bytes = bincode::serialize(&map).unwrap();
    let restored: ImmutableMap<u64, Vec<u8>> = bincode::deserialize(&bytes).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_serializes_in_insertion_order() {
    let map = ImmutableMap::new([("z", 26), ("a", 1)]);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"z":26,"a":1}"#);
}

#[rstest]
fn test_deserializes_from_object_keeping_order() {
    let map: ImmutableMap<String, i32> =
        serde_json::from_str(r#"{"b": 2, "a": 1, "b": 3}"#).unwrap();
    let keys: Vec<&str> = map.iter_keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(map.get("b"), Some(&3));
}

#[rstest]
fn test_deserializes_from_pair_sequence() {
    let map: ImmutableMap<i32, String> =
        serde_json::from_str(r#"[[1, "one"], [2, "two"], [1, "uno"]]"#).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&1).map(String::as_str), Some("uno"));
}

#[rstest]
fn test_rejects_non_pair_elements() {
    let result: Result<ImmutableMap<i32, i32>, _> = serde_json::from_str("[[1, 2, 3]]");
    assert!(result.is_err());
}

#[rstest]
fn test_rejects_scalars() {
    let result: Result<ImmutableMap<String, i32>, _> = serde_json::from_str("42");
    assert!(result.is_err());
}

#[rstest]
fn test_nested_maps() {
    let inner = ImmutableMap::new([("x".to_string(), 1)]);
    let outer = ImmutableMap::new([("inner".to_string(), inner)]);
    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, r#"{"inner":{"x":1}}"#);

    let restored: ImmutableMap<String, ImmutableMap<String, i32>> =
        serde_json::from_str(&json).unwrap();
    assert_eq!(restored, outer);
}
