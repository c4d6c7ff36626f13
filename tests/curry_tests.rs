//! Tests for currying.

#![cfg(feature = "curry")]

use lambda_lessons::curry::{add, curry_add};
use lambda_lessons::curry2;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn test_curry_add_five_five() {
    assert_eq!(curry_add(5)(5), 10);
}

#[rstest]
fn test_curry_add_calls_are_independent() {
    let add_five = curry_add(5);

    assert_eq!(add_five(1), 6);
    assert_eq!(add_five(100), 105);
    assert_eq!(add_five(1), 6);
}

#[rstest]
fn test_curry2_with_non_copy_first_argument() {
    let join = curry2!(|separator: String, words: Vec<&str>| words.join(separator.as_str()));
    let with_comma = join(", ".to_string());

    assert_eq!(with_comma(vec!["a", "b"]), "a, b");
    assert_eq!(with_comma(vec!["c"]), "c");
}

#[rstest]
fn test_curry2_clones_first_argument_per_call() {
    let push_onto = curry2!(|mut numbers: Vec<i64>, number: i64| {
        numbers.push(number);
        numbers
    });
    let extend_base = push_onto(vec![1, 2]);

    assert_eq!(extend_base(3), vec![1, 2, 3]);
    assert_eq!(extend_base(4), vec![1, 2, 4]);
}

proptest! {
    #[test]
    fn prop_curry_add_equivalent_to_add(
        first in -10_000_i64..10_000,
        second in -10_000_i64..10_000,
    ) {
        prop_assert_eq!(curry_add(first)(second), add(first, second));
    }

    #[test]
    fn prop_curry2_equivalent_to_add(
        first in -10_000_i64..10_000,
        second in -10_000_i64..10_000,
    ) {
        let curried = curry2!(add);

        prop_assert_eq!(curried(first)(second), add(first, second));
    }
}
