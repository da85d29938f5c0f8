//! The `immutable_map!` literal macro.

/// Builds an [`ImmutableMap`](crate::map::ImmutableMap) from `key => value`
/// pairs.
///
/// Pairs are inserted in order, so a repeated key keeps its first position
/// and its last value.
///
/// # Examples
///
/// ```rust
/// use immutable_map::immutable_map;
/// use immutable_map::map::ImmutableMap;
///
/// let map = immutable_map! {
///     "x" => 1,
///     "y" => 2,
///     "x" => 3,
/// };
/// assert_eq!(map.get("x"), Some(&3));
/// assert_eq!(map.len(), 2);
///
/// let empty: ImmutableMap<&str, i32> = immutable_map! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! immutable_map {
    () => {
        $crate::map::ImmutableMap::empty()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::map::ImmutableMap::new([$(($key, $value)),+])
    };
}
