//! Immutable, insertion-ordered maps.
//!
//! This module provides [`ImmutableMap`], a mapping that is built once and
//! can never be changed afterwards:
//!
//! - [`ImmutableMap`]: the map itself, with lookup, iteration and equality
//! - [`KeysView`], [`ValuesView`], [`ItemsView`]: read-only projections
//! - [`TryIntoPair`]: elements that may or may not be key-value pairs
//! - [`Mapping`] / [`MappingMut`]: capability traits for generic code
//!
//! # Immutability
//!
//! `ImmutableMap` exposes no method that takes `&mut self`. The entries are
//! stored behind a reference-counted handle, so cloning a map hands out
//! another handle to the same entries instead of copying them.
//!
//! # Examples
//!
//! ```rust
//! use immutable_map::map::ImmutableMap;
//!
//! let map = ImmutableMap::new([("x", 1), ("y", 2), ("z", 3)]);
//! assert_eq!(map.get("y"), Some(&2));
//!
//! let keys: Vec<&&str> = map.keys().iter().collect();
//! assert_eq!(keys, vec![&"x", &"y", &"z"]);
//!
//! let reversed: Vec<&&str> = map.reversed().collect();
//! assert_eq!(reversed, vec![&"z", &"y", &"x"]);
//!
//! // Copying hands back the very same instance
//! let copied = map.copy();
//! assert!(ImmutableMap::ptr_eq(&map, &copied));
//! ```
//!
//! ## Building from a lookup-capable source
//!
//! ```rust
//! use immutable_map::map::ImmutableMap;
//! use std::collections::BTreeMap;
//!
//! let mut source = BTreeMap::new();
//! source.insert(2, "two");
//! source.insert(1, "one");
//!
//! let map: ImmutableMap<i32, &str> = ImmutableMap::try_from_lookup(&source).unwrap();
//! source.insert(3, "three");
//!
//! // Later changes to the source never reach the map
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&3), None);
//! assert_eq!(map, vec![(1, "one"), (2, "two")]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets maps be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is cheaper but confines the map to one thread.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Default Hasher Type Alias
// =============================================================================

/// Hasher used for the entry table when no hasher is given explicitly.
///
/// - `fxhash` feature: `rustc_hash::FxBuildHasher`
/// - `ahash` feature (without `fxhash`): `ahash::RandomState`
/// - otherwise: `std::hash::RandomState`
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// Hasher used for the entry table when no hasher is given explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// Hasher used for the entry table when no hasher is given explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::hash::RandomState;

mod immutable_map;
mod macros;
mod mapping;
mod source;
mod views;

pub use immutable_map::ImmutableMap;
pub use immutable_map::ImmutableMapIntoIterator;
pub use immutable_map::ImmutableMapIterator;
pub use immutable_map::ImmutableMapKeys;
pub use immutable_map::ImmutableMapValues;
pub use mapping::Mapping;
pub use mapping::MappingMut;
pub use source::TryIntoPair;
pub use views::ItemsView;
pub use views::KeysView;
pub use views::ValuesView;

#[cfg(feature = "rayon")]
pub use immutable_map::ImmutableMapParallelRefIterator;

// =============================================================================
// Thread Safety Assertions
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableMap<String, i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableMap<String, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
