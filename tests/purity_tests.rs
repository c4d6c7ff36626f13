//! Tests contrasting in-place mutation with a pure transformation.

#![cfg(feature = "purity")]

use lambda_lessons::LessonError;
use lambda_lessons::purity::{append_pure, mutate_in_place};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn test_append_pure_leaves_input() {
    let numbers2 = vec![1, 2, 3, 4, 5];

    let numbers3 = append_pure(&numbers2).unwrap();

    assert_eq!(numbers2, vec![1, 2, 3, 4, 5]);
    assert_eq!(numbers3, vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_mutate_in_place_changes_caller_vector() {
    let mut numbers1 = vec![1, 2, 3, 4, 5];

    mutate_in_place(&mut numbers1).unwrap();

    assert_eq!(numbers1, vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_empty_input_fails_both_ways() {
    assert!(matches!(
        append_pure(&[]),
        Err(LessonError::Index { length: 0, .. })
    ));
    assert!(matches!(
        mutate_in_place(&mut Vec::new()),
        Err(LessonError::Index { length: 0, .. })
    ));
}

#[rstest]
fn test_append_pure_at_max_is_overflow() {
    let numbers = [i64::MAX];

    assert_eq!(
        append_pure(&numbers),
        Err(LessonError::Overflow {
            operation: "append_pure"
        })
    );
    assert_eq!(numbers, [i64::MAX]);
}

proptest! {
    #[test]
    fn prop_pure_and_impure_agree(numbers in prop::collection::vec(-1000_i64..1000, 1..32)) {
        let original = numbers.clone();
        let mut mutated = numbers.clone();

        let extended = append_pure(&numbers).unwrap();
        mutate_in_place(&mut mutated).unwrap();

        prop_assert_eq!(&numbers, &original);
        prop_assert_eq!(extended, mutated);
    }
}
