//! Stateless helpers that map a sequence into a set, list, or map.
//!
//! Each helper makes a single synchronous pass over the input, applies
//! the supplied function to every element, and materializes the
//! results. The input is consumed by value; nothing outside the result
//! is mutated.
//!
//! - [`map_to_set`]: collect into a [`HashSet`], merging duplicate
//!   results.
//! - [`map_to_list`]: collect into a [`Vec`], preserving input order
//!   and duplicates.
//! - [`list_to_map`] / [`list_to_map_with`]: build a key/value
//!   [`HashMap`], failing with [`DuplicateKeyError`] instead of
//!   silently overwriting when two elements produce the same key.
//!
//! Failures raised by the supplied functions are not caught or
//! translated; they propagate to the caller with any later elements
//! left unvisited.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Applies `transform` to every element and collects the results into
/// a set.
///
/// Duplicate results under `Eq`/`Hash` are merged; the iteration order
/// of the returned set is unspecified.
///
/// # Examples
///
/// ```rust
/// use lamargs::collect::map_to_set;
///
/// let distinct = map_to_set([1, 2, 2, 3], |value| value);
/// assert_eq!(distinct.len(), 3);
/// assert!(distinct.contains(&2));
/// ```
pub fn map_to_set<I, R, F>(input: I, transform: F) -> HashSet<R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
    R: Eq + Hash,
{
    input.into_iter().map(transform).collect()
}

/// Applies `transform` to every element and collects the results into
/// an ordered list.
///
/// Input order is preserved and duplicate results are retained.
///
/// # Examples
///
/// ```rust
/// use lamargs::collect::map_to_list;
///
/// let doubled = map_to_list([1, 2, 3], |value| value * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map_to_list<I, R, F>(input: I, transform: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    input.into_iter().map(transform).collect()
}

/// Builds a map from `key_of(element)` to the element itself.
///
/// Equivalent to [`list_to_map_with`] with the identity value
/// projection. Fails with [`DuplicateKeyError`] on the first key
/// produced twice.
///
/// # Examples
///
/// ```rust
/// use lamargs::collect::list_to_map;
///
/// let by_id = list_to_map([(1, "x"), (2, "y")], |entry| entry.0).unwrap();
/// assert_eq!(by_id[&2], (2, "y"));
///
/// let collision = list_to_map([(1, "x"), (1, "y")], |entry| entry.0);
/// assert_eq!(collision.unwrap_err().key, 1);
/// ```
///
/// # Errors
///
/// Returns [`DuplicateKeyError`] when two elements map to the same key.
pub fn list_to_map<I, K, F>(input: I, key_of: F) -> Result<HashMap<K, I::Item>, DuplicateKeyError<K>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    list_to_map_with(input, key_of, |element| element)
}

/// Builds a map from `key_of(element)` to `value_of(element)`.
///
/// Elements are visited in input order; the first element whose key
/// collides with an already-inserted one aborts the build, and the
/// offending key is carried in the error. There is no silent
/// overwrite.
///
/// # Examples
///
/// ```rust
/// use lamargs::collect::list_to_map_with;
///
/// let names = list_to_map_with(
///     [(1, "x"), (2, "y")],
///     |entry| entry.0,
///     |entry| entry.1,
/// )
/// .unwrap();
/// assert_eq!(names[&1], "x");
/// ```
///
/// # Errors
///
/// Returns [`DuplicateKeyError`] when two elements map to the same key.
pub fn list_to_map_with<I, K, V, KF, VF>(
    input: I,
    mut key_of: KF,
    mut value_of: VF,
) -> Result<HashMap<K, V>, DuplicateKeyError<K>>
where
    I: IntoIterator,
    K: Eq + Hash,
    KF: FnMut(&I::Item) -> K,
    VF: FnMut(I::Item) -> V,
{
    let elements = input.into_iter();
    let mut map = HashMap::with_capacity(elements.size_hint().0);
    for element in elements {
        let key = key_of(&element);
        if map.contains_key(&key) {
            return Err(DuplicateKeyError { key });
        }
        map.insert(key, value_of(element));
    }
    Ok(map)
}

/// Two input elements produced the same map key.
///
/// Returned by [`list_to_map`] and [`list_to_map_with`]; carries the
/// key that collided.
///
/// # Examples
///
/// ```rust
/// use lamargs::collect::DuplicateKeyError;
///
/// let error = DuplicateKeyError { key: 7 };
/// assert_eq!(format!("{error}"), "duplicate key 7 while building map");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuplicateKeyError<K> {
    /// The key produced by more than one input element.
    pub key: K,
}

impl<K: fmt::Debug> fmt::Display for DuplicateKeyError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "duplicate key {:?} while building map", self.key)
    }
}

impl<K: fmt::Debug> std::error::Error for DuplicateKeyError<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_to_set_merges_duplicates() {
        let distinct = map_to_set([1, 2, 2, 3], |value| value);
        assert_eq!(distinct, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn map_to_list_keeps_order_and_duplicates() {
        let copied = map_to_list(["b", "a", "b"], str::to_owned);
        assert_eq!(copied, vec!["b", "a", "b"]);
    }

    #[test]
    fn list_to_map_rejects_duplicate_keys() {
        let result = list_to_map([(1, "x"), (1, "y")], |entry| entry.0);
        assert_eq!(result, Err(DuplicateKeyError { key: 1 }));
    }
}
