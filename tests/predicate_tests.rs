//! Unit tests for predicate composition and equality testing.

#![cfg(feature = "combinator")]

use lamargs::combinator::{Predicate, predicate};
use rstest::rstest;
use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex};

// =============================================================================
// and / or / negate
// =============================================================================

#[test]
fn test_and_is_true_only_when_both_are() {
    let positive = predicate::from_fn(|value: &i32| *value > 0);
    let even = predicate::from_fn(|value: &i32| value % 2 == 0);
    let both = positive.and(even);

    assert!(both.test(&4));
    assert!(!both.test(&3));
    assert!(!both.test(&-4));
}

#[test]
fn test_or_is_false_only_when_both_are() {
    let negative = predicate::from_fn(|value: &i32| *value < 0);
    let zero = predicate::from_fn(|value: &i32| *value == 0);
    let either = negative.or(zero);

    assert!(either.test(&-1));
    assert!(either.test(&0));
    assert!(!either.test(&1));
}

#[test]
fn test_negate_inverts_result() {
    let positive = predicate::from_fn(|value: &i32| *value > 0);

    assert!(positive.negate().test(&-1));
    assert!(!positive.negate().test(&1));
}

#[test]
fn test_and_short_circuits_on_false_first_operand() {
    let evaluated = RefCell::new(false);
    let tracking = predicate::from_fn(|_: &i32| {
        *evaluated.borrow_mut() = true;
        true
    });

    assert!(!predicate::never().and(tracking).test(&0));
    assert!(!*evaluated.borrow());
}

#[test]
fn test_or_short_circuits_on_true_first_operand() {
    let evaluated = RefCell::new(false);
    let tracking = predicate::from_fn(|_: &i32| {
        *evaluated.borrow_mut() = true;
        false
    });

    assert!(predicate::always().or(tracking).test(&0));
    assert!(!*evaluated.borrow());
}

#[test]
fn test_failure_in_first_operand_prevents_second() {
    let second_ran = Arc::new(Mutex::new(false));
    let witness = Arc::clone(&second_ran);

    let failing = predicate::from_fn(|_: &i32| -> bool { panic!("first operand failure") });
    let tracking = predicate::from_fn(move |_: &i32| {
        *witness.lock().unwrap() = true;
        true
    });
    let combined = failing.and(tracking);

    let outcome = catch_unwind(AssertUnwindSafe(|| combined.test(&0)));

    assert!(outcome.is_err());
    assert!(!*second_ran.lock().unwrap());
}

// =============================================================================
// multi_and / multi_or fold identities
// =============================================================================

#[rstest]
#[case(0)]
#[case(-17)]
#[case(i32::MAX)]
fn test_multi_and_with_zero_predicates_is_always_true(#[case] probe: i32) {
    assert!(predicate::multi_and(Vec::<predicate::Always>::new()).test(&probe));
}

#[rstest]
#[case(0)]
#[case(-17)]
#[case(i32::MAX)]
fn test_multi_or_with_zero_predicates_is_always_false(#[case] probe: i32) {
    assert!(!predicate::multi_or(Vec::<predicate::Always>::new()).test(&probe));
}

#[test]
fn test_multi_and_folds_left_to_right() {
    let order = RefCell::new(Vec::new());
    let stages: Vec<Box<dyn Predicate<i32> + '_>> = vec![
        Box::new(predicate::from_fn(|_: &i32| {
            order.borrow_mut().push(1);
            true
        })),
        Box::new(predicate::from_fn(|_: &i32| {
            order.borrow_mut().push(2);
            false
        })),
        Box::new(predicate::from_fn(|_: &i32| {
            order.borrow_mut().push(3);
            true
        })),
    ];

    // The false second stage decides the result; the third never runs.
    assert!(!predicate::multi_and(stages).test(&0));
    assert_eq!(*order.borrow(), vec![1, 2]);
}

#[test]
fn test_multi_or_stops_at_first_true_stage() {
    let order = RefCell::new(Vec::new());
    let stages: Vec<Box<dyn Predicate<i32> + '_>> = vec![
        Box::new(predicate::from_fn(|_: &i32| {
            order.borrow_mut().push(1);
            false
        })),
        Box::new(predicate::from_fn(|_: &i32| {
            order.borrow_mut().push(2);
            true
        })),
        Box::new(predicate::from_fn(|_: &i32| {
            order.borrow_mut().push(3);
            false
        })),
    ];

    assert!(predicate::multi_or(stages).test(&0));
    assert_eq!(*order.borrow(), vec![1, 2]);
}

// =============================================================================
// is_equal
// =============================================================================

#[rstest]
#[case(5, true)]
#[case(6, false)]
#[case(-5, false)]
fn test_is_equal_single_target(#[case] probe: i32, #[case] expected: bool) {
    assert_eq!(predicate::is_equal(vec![5]).test(&probe), expected);
}

#[rstest]
#[case(5)]
#[case(6)]
#[case(0)]
fn test_is_equal_with_distinct_targets_matches_nothing(#[case] probe: i32) {
    // All-match semantics: no value equals both 5 and 6.
    assert!(!predicate::is_equal(vec![5, 6]).test(&probe));
}

#[test]
fn test_is_equal_with_repeated_target_still_matches() {
    let five = predicate::is_equal(vec![5, 5]);

    assert!(five.test(&5));
    assert!(!five.test(&6));
}

#[test]
fn test_is_equal_with_absent_targets_matches_only_absent_value() {
    let absent: predicate::IsEqual<i32> = predicate::is_equal(None);

    assert!(absent.test(&None));
    assert!(!absent.test(&Some(5)));
}

#[test]
fn test_is_equal_with_absent_targets_rejects_every_plain_value() {
    let absent: predicate::IsEqual<i32> = predicate::is_equal(None);

    assert!(!absent.test(&5));
    assert!(!absent.test(&0));
}

#[test]
fn test_is_equal_with_present_targets_on_optional_values() {
    let five = predicate::is_equal(vec![5]);

    assert!(five.test(&Some(5)));
    assert!(!five.test(&Some(6)));
    assert!(!five.test(&None::<i32>));
}

#[test]
fn test_is_equal_composes_with_other_predicates() {
    let five_or_six = predicate::is_equal(vec![5]).or(predicate::from_fn(|value: &i32| *value == 6));

    assert!(five_or_six.test(&5));
    assert!(five_or_six.test(&6));
    assert!(!five_or_six.test(&7));
}
