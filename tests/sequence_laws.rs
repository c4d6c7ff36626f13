#![cfg(feature = "sequence")]
//! Property-based tests for `map` and `reduce`.
//!
//! - **Identity**: `map(s, |x| *x) == s`
//! - **Composition**: `map(map(s, g), f) == map(s, |x| f(&g(x)))`
//! - **Sum**: `sum(s) == s.iter().sum()` for non-empty `s`

use lambda_lessons::LessonError;
use lambda_lessons::sequence::{map, offset, reduce, sum};
use proptest::prelude::*;
use rstest::rstest;

proptest! {
    #[test]
    fn prop_map_identity(numbers in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(map(&numbers, |number| *number), numbers);
    }

    #[test]
    fn prop_map_composition(numbers in prop::collection::vec(-1000_i64..1000, 0..64)) {
        let double = |number: &i64| number * 2;
        let plus_one = |number: &i64| number + 1;

        let two_passes = map(&map(&numbers, double), plus_one);
        let one_pass = map(&numbers, |number| plus_one(&double(number)));

        prop_assert_eq!(two_passes, one_pass);
    }

    #[test]
    fn prop_sum_matches_iterator_sum(numbers in prop::collection::vec(-1000_i64..1000, 1..64)) {
        prop_assert_eq!(sum(&numbers), Ok(numbers.iter().sum::<i64>()));
    }

    #[test]
    fn prop_offset_preserves_length(
        numbers in prop::collection::vec(-1000_i64..1000, 0..64),
        by in -1000_i64..1000,
    ) {
        let shifted = offset(&numbers, by).unwrap();

        prop_assert_eq!(shifted.len(), numbers.len());
        prop_assert!(shifted.iter().zip(&numbers).all(|(after, before)| *after == before + by));
    }
}

#[rstest]
fn test_sum_zero_to_twenty() {
    let numbers: Vec<i64> = (0..=20).collect();

    assert_eq!(reduce(|total, number| total + number, &numbers), Ok(210));
}

#[rstest]
fn test_offset_zero_to_twenty() {
    let numbers: Vec<i64> = (0..=20).collect();

    assert_eq!(offset(&numbers, 10), Ok((10..=30).collect::<Vec<i64>>()));
}

#[rstest]
fn test_offset_overflow_is_error() {
    assert_eq!(
        offset(&[0, i64::MAX - 1], 2),
        Err(LessonError::Overflow { operation: "offset" })
    );
}

#[rstest]
fn test_sum_overflow_is_error() {
    assert_eq!(
        sum(&[i64::MAX, i64::MAX]),
        Err(LessonError::Overflow { operation: "sum" })
    );
}

#[rstest]
fn test_reduce_empty_is_error() {
    let result = reduce(|total: String, word: &String| total + word, &[]);

    assert_eq!(result, Err(LessonError::EmptyInput { operation: "reduce" }));
}

#[rstest]
fn test_reduce_builds_strings() {
    let words = ["fold".to_string(), "ed".to_string()];

    assert_eq!(reduce(|total, word| total + word, &words), Ok("folded".to_string()));
}
