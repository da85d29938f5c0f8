//! # immutable-map
//!
//! An immutable, hashable map that preserves insertion order.
//!
//! ## Overview
//!
//! [`ImmutableMap`] is built once from a mapping or a sequence of key-value
//! pairs and never changes afterwards. Because no holder of a map can ever
//! change it, maps can be shared by reference across threads, used as keys
//! of other maps, and placed in sets.
//!
//! - **Construction**: last-write-wins from pairs, maps, or any
//!   lookup-capable [`Mapping`](map::Mapping)
//! - **Read-only mapping API**: `get`, `try_get`, `contains_key`, `len`,
//!   iteration in insertion order, keys/values/items views
//! - **Equality**: order-independent, against other maps and pair sequences
//! - **Identity hashing**: O(1) [`Hash`] based on the map's identity
//! - **Copying**: `copy`/`deep_copy`/`clone` hand back the same instance
//!
//! ## Feature Flags
//!
//! - `arc` (default): share entries through `Arc`, making maps `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` support
//! - `rayon`: parallel iteration over `&ImmutableMap` (implies `arc`)
//! - `fxhash`: use `rustc-hash` as the default hasher
//! - `ahash`: use `ahash` as the default hasher
//! - `full`: `arc`, `serde` and `rayon`
//!
//! ## Example
//!
//! ```rust
//! use immutable_map::prelude::*;
//! use std::collections::HashMap;
//!
//! let map = ImmutableMap::new([("x", 1), ("y", 2), ("z", 3)]);
//!
//! assert_eq!(map.get("y"), Some(&2));
//! assert_eq!(map.get_or("w", &0), &0);
//! assert!(map.try_get("w").is_err());
//!
//! // Equality ignores order
//! let plain: HashMap<&str, i32> = [("z", 3), ("x", 1), ("y", 2)].into_iter().collect();
//! assert_eq!(map, plain);
//!
//! // Maps can key other maps
//! let mut index = HashMap::new();
//! index.insert(map.clone(), "first");
//! assert_eq!(index.get(&map), Some(&"first"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the map, its capability traits and the error types.
///
/// # Usage
///
/// ```rust
/// use immutable_map::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::immutable_map;
    pub use crate::map::*;
}

pub mod error;
pub mod map;

pub use map::ImmutableMap;
