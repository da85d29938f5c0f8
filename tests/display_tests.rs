//! Integration tests for Display and Debug implementations.
//!
//! This module tests that ImmutableMap and its views render their
//! contents in insertion order with consistent formatting.

use immutable_map::error::{ImmutableMapError, InvalidSourceError};
use immutable_map::map::ImmutableMap;

// =============================================================================
// ImmutableMap Display Tests
// =============================================================================

#[test]
fn test_immutable_map_empty_display() {
    let map: ImmutableMap<i32, String> = ImmutableMap::empty();
    assert_eq!(format!("{}", map), "{}");
}

#[test]
fn test_immutable_map_single_display() {
    let map = ImmutableMap::new([(1, "one")]);
    assert_eq!(format!("{}", map), "{1: one}");
}

#[test]
fn test_immutable_map_insertion_order_display() {
    let map = ImmutableMap::new([("b", 2), ("a", 1), ("c", 3)]);
    assert_eq!(format!("{}", map), "{b: 2, a: 1, c: 3}");
}

#[test]
fn test_immutable_map_nested_display() {
    let inner = ImmutableMap::new([("x", 1)]);
    let outer = ImmutableMap::new([("inner", inner)]);
    assert_eq!(format!("{}", outer), "{inner: {x: 1}}");
}

// =============================================================================
// ImmutableMap Debug Tests
// =============================================================================

#[test]
fn test_immutable_map_debug() {
    let map = ImmutableMap::new([("K".to_string(), "V".to_string())]);
    assert_eq!(format!("{:?}", map), "ImmutableMap({\"K\": \"V\"})");
}

#[test]
fn test_immutable_map_empty_debug() {
    let map: ImmutableMap<i32, i32> = ImmutableMap::empty();
    assert_eq!(format!("{:?}", map), "ImmutableMap({})");
}

// =============================================================================
// Error Display Tests
// =============================================================================

#[test]
fn test_invalid_source_from_construction_display() {
    let error = ImmutableMap::<i32, i32>::try_new(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(
        format!("{}", ImmutableMapError::from(error)),
        "dictionary update sequence element #1 has length 1; 2 is required"
    );
}

#[test]
fn test_key_not_found_from_lookup_display() {
    let map = ImmutableMap::new([("a".to_string(), 1)]);
    let error = map.try_get("missing").unwrap_err();
    assert_eq!(format!("{}", error), "key not found: \"missing\"");
}

#[test]
fn test_invalid_source_debug() {
    let error = InvalidSourceError::MissingKey { index: 2 };
    assert_eq!(format!("{:?}", error), "MissingKey { index: 2 }");
}
