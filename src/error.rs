//! Error types for immutable maps.
//!
//! This module provides the errors that can occur when building or reading
//! an [`ImmutableMap`](crate::map::ImmutableMap), and when generic code
//! tries to write through the [`MappingMut`](crate::map::MappingMut) seam.

/// The construction source could not be interpreted as a mapping.
///
/// A source is valid when every element is a key-value pair, or when it
/// can enumerate its keys and return a value for each of them.
///
/// # Examples
///
/// ```rust
/// use immutable_map::ImmutableMap;
/// use immutable_map::error::InvalidSourceError;
///
/// let source = vec![vec![1, 2], vec![3, 4, 5]];
/// let error = ImmutableMap::<i32, i32>::try_new(source).unwrap_err();
/// assert_eq!(error, InvalidSourceError::NotAPair { index: 1, length: 3 });
/// assert_eq!(
///     format!("{error}"),
///     "dictionary update sequence element #1 has length 3; 2 is required"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSourceError {
    /// The element at `index` is a sequence that does not hold exactly two items.
    NotAPair {
        /// Position of the offending element in the source.
        index: usize,
        /// Number of items the element actually holds.
        length: usize,
    },
    /// The key at `index` was enumerated by the source but could not be looked up.
    MissingKey {
        /// Position of the key in the source's key enumeration.
        index: usize,
    },
}

impl std::fmt::Display for InvalidSourceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAPair { index, length } => write!(
                formatter,
                "dictionary update sequence element #{index} has length {length}; 2 is required"
            ),
            Self::MissingKey { index } => write!(
                formatter,
                "source enumerated key #{index} but has no value for it"
            ),
        }
    }
}

impl std::error::Error for InvalidSourceError {}

/// A strict lookup was made for a key the map does not contain.
///
/// The key is kept in its `Debug` rendering so the error does not borrow
/// from, or require cloning of, the caller's key.
///
/// # Examples
///
/// ```rust
/// use immutable_map::ImmutableMap;
///
/// let map = ImmutableMap::new([("K", "V")]);
/// let error = map.try_get("Q").unwrap_err();
/// assert_eq!(error.key, "\"Q\"");
/// assert_eq!(format!("{error}"), "key not found: \"Q\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFoundError {
    /// The missing key, rendered with `Debug`.
    pub key: String,
}

impl std::fmt::Display for KeyNotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "key not found: {}", self.key)
    }
}

impl std::error::Error for KeyNotFoundError {}

/// A write was attempted on an immutable map.
///
/// `ImmutableMap` has no mutating methods, so this error only appears when
/// generic code written against [`MappingMut`](crate::map::MappingMut)
/// receives an immutable map. The map is left untouched.
///
/// # Examples
///
/// ```rust
/// use immutable_map::error::ImmutableWriteError;
///
/// let error = ImmutableWriteError { operation: "try_insert" };
/// assert_eq!(
///     format!("{error}"),
///     "ImmutableMap::try_insert: an immutable map cannot be modified"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmutableWriteError {
    /// The name of the rejected operation.
    pub operation: &'static str,
}

impl std::fmt::Display for ImmutableWriteError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "ImmutableMap::{}: an immutable map cannot be modified",
            self.operation
        )
    }
}

impl std::error::Error for ImmutableWriteError {}

/// Represents every error an immutable map can report.
///
/// Each variant wraps one of the specific error types, and `From`
/// conversions let `?` lift them into this enum.
///
/// # Examples
///
/// ```rust
/// use immutable_map::ImmutableMap;
/// use immutable_map::error::ImmutableMapError;
///
/// fn lookup(pairs: Vec<Vec<i32>>, key: i32) -> Result<i32, ImmutableMapError> {
///     let map: ImmutableMap<i32, i32> = ImmutableMap::try_new(pairs)?;
///     Ok(*map.try_get(&key)?)
/// }
///
/// assert_eq!(lookup(vec![vec![1, 10]], 1), Ok(10));
/// assert!(matches!(
///     lookup(vec![vec![1, 10]], 2),
///     Err(ImmutableMapError::KeyNotFound(_))
/// ));
/// assert!(matches!(
///     lookup(vec![vec![1]], 1),
///     Err(ImmutableMapError::InvalidSource(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImmutableMapError {
    /// The construction source was not mapping-like.
    InvalidSource(InvalidSourceError),
    /// A strict lookup missed.
    KeyNotFound(KeyNotFoundError),
    /// A write was attempted.
    ImmutableWrite(ImmutableWriteError),
}

impl std::fmt::Display for ImmutableMapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSource(error) => write!(formatter, "{error}"),
            Self::KeyNotFound(error) => write!(formatter, "{error}"),
            Self::ImmutableWrite(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ImmutableMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSource(error) => Some(error),
            Self::KeyNotFound(error) => Some(error),
            Self::ImmutableWrite(error) => Some(error),
        }
    }
}

impl From<InvalidSourceError> for ImmutableMapError {
    fn from(error: InvalidSourceError) -> Self {
        Self::InvalidSource(error)
    }
}

impl From<KeyNotFoundError> for ImmutableMapError {
    fn from(error: KeyNotFoundError) -> Self {
        Self::KeyNotFound(error)
    }
}

impl From<ImmutableWriteError> for ImmutableMapError {
    fn from(error: ImmutableWriteError) -> Self {
        Self::ImmutableWrite(error)
    }
}
