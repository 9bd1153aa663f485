//! Property-based tests for the collection mapping helpers.

#![cfg(feature = "collect")]

use lamargs::collect::{list_to_map, map_to_list, map_to_set};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// The set of mapped results never exceeds the input length and
    /// contains exactly the distinct results.
    #[test]
    fn prop_map_to_set_contains_distinct_results(values in proptest::collection::vec(any::<i16>(), 0..32)) {
        let distinct = map_to_set(values.clone(), i32::from);

        let expected: HashSet<i32> = values.iter().copied().map(i32::from).collect();
        prop_assert!(distinct.len() <= values.len());
        prop_assert_eq!(distinct, expected);
    }

    /// `map_to_list` is order- and length-preserving.
    #[test]
    fn prop_map_to_list_preserves_order(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let doubled = map_to_list(values.clone(), |value: i32| value.wrapping_mul(2));

        prop_assert_eq!(doubled.len(), values.len());
        for (input, output) in values.iter().zip(&doubled) {
            prop_assert_eq!(input.wrapping_mul(2), *output);
        }
    }

    /// With unique keys, `list_to_map` succeeds and maps every element
    /// under its own key.
    #[test]
    fn prop_list_to_map_with_unique_keys_keeps_every_element(
        values in proptest::collection::hash_set(any::<i32>(), 0..32),
    ) {
        let values: Vec<i32> = values.into_iter().collect();
        let map = list_to_map(values.clone(), |value| *value).unwrap();

        prop_assert_eq!(map.len(), values.len());
        for value in &values {
            prop_assert_eq!(map[value], *value);
        }
    }

    /// Any repeated key makes `list_to_map` fail with the offending key.
    #[test]
    fn prop_list_to_map_rejects_any_repeated_key(value in any::<i32>()) {
        let result = list_to_map([value, value], |element| *element);

        prop_assert_eq!(result.unwrap_err().key, value);
    }
}
