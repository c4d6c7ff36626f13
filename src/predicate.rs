//! Predicates and the closures that build them.
//!
//! A predicate is any `Fn(&T) -> bool`. The filter factories here return
//! closures that capture their threshold by value with `move`, so the
//! threshold is fixed the moment the filter is created.
//!
//! # Examples
//!
//! ```
//! use lambda_lessons::predicate::{all_match, make_less_than_filter};
//!
//! let numbers: Vec<i64> = (1..=10).collect();
//!
//! assert!(!all_match(&numbers, make_less_than_filter(5)));
//! assert!(all_match(&numbers, make_less_than_filter(11)));
//! ```

/// Returns `true` if every element satisfies `predicate`.
///
/// Elements are tested in order and the search stops at the first element
/// that fails. An empty slice satisfies every predicate.
///
/// # Examples
///
/// ```
/// use lambda_lessons::predicate::all_match;
///
/// let numbers = [2, 4, 6];
/// assert!(all_match(&numbers, |number| number % 2 == 0));
/// assert!(all_match(&[] as &[i64], |_| false));
/// ```
pub fn all_match<T, P>(items: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    for item in items {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// Creates a predicate that tests `item < max`.
///
/// `max` is moved into the closure, so later changes to the caller's
/// variables cannot affect the filter.
///
/// # Examples
///
/// ```
/// use lambda_lessons::predicate::make_less_than_filter;
///
/// let below_five = make_less_than_filter(5);
/// assert!(below_five(&4));
/// assert!(!below_five(&5));
/// ```
pub fn make_less_than_filter<T>(max: T) -> impl Fn(&T) -> bool
where
    T: PartialOrd,
{
    move |item| *item < max
}

/// Creates a less-than predicate that reports its captured threshold on
/// every call.
///
/// `observer` receives the threshold before each comparison. This makes the
/// captured state visible from the outside: the demo prints it, tests can
/// count the calls.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use lambda_lessons::predicate::{all_match, make_observed_less_than_filter};
///
/// let seen = RefCell::new(Vec::new());
/// let below_three = make_observed_less_than_filter(3, |max| seen.borrow_mut().push(*max));
///
/// assert!(!all_match(&[1, 2, 3, 4], &below_three));
/// assert_eq!(*seen.borrow(), vec![3, 3, 3]);
/// ```
pub fn make_observed_less_than_filter<T, O>(max: T, observer: O) -> impl Fn(&T) -> bool
where
    T: PartialOrd + std::fmt::Debug,
    O: Fn(&T),
{
    move |item| {
        tracing::trace!(threshold = ?max, item = ?item, "evaluating less-than filter");
        observer(&max);
        *item < max
    }
}
