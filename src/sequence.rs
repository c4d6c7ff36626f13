//! `map` and `reduce` over slices, and the helpers built on top of them.
//!
//! # Laws
//!
//! - **Identity**: `map(items, |x| *x) == items`
//! - **Length**: `map(items, f).len() == items.len()`
//! - **Left fold**: `reduce(f, [a, b, c]) == f(f(a, &b), &c)`

use crate::error::LessonError;

/// Applies `function` to every element, preserving order and length.
///
/// The input is only borrowed, so it is still available afterwards.
///
/// # Examples
///
/// ```
/// use lambda_lessons::sequence::map;
///
/// let numbers = [1, 2, 3];
/// assert_eq!(map(&numbers, |number| number * number), vec![1, 4, 9]);
/// assert_eq!(numbers, [1, 2, 3]);
/// ```
pub fn map<T, U, F>(items: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut results = Vec::with_capacity(items.len());
    for item in items {
        results.push(function(item));
    }
    results
}

/// Folds `items` from the left, seeding the accumulator with the first
/// element.
///
/// # Errors
///
/// Returns [`LessonError::EmptyInput`] if `items` is empty, since there is
/// no first element to start from.
///
/// # Examples
///
/// ```
/// use lambda_lessons::sequence::reduce;
///
/// let numbers: Vec<i64> = (0..=20).collect();
/// assert_eq!(reduce(|total, number| total + number, &numbers), Ok(210));
/// assert!(reduce(|total: i64, number| total + number, &[]).is_err());
/// ```
pub fn reduce<T, F>(mut function: F, items: &[T]) -> Result<T, LessonError>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (first, rest) = items
        .split_first()
        .ok_or(LessonError::EmptyInput { operation: "reduce" })?;
    tracing::trace!(length = items.len(), "reducing sequence");

    Ok(rest
        .iter()
        .fold(first.clone(), |accumulator, item| function(accumulator, item)))
}

/// Sums `items` from the left, the way `reduce` with `+` would, but with
/// checked addition.
///
/// # Errors
///
/// Returns [`LessonError::EmptyInput`] if `items` is empty and
/// [`LessonError::Overflow`] if a partial sum does not fit in an `i64`.
pub fn sum(items: &[i64]) -> Result<i64, LessonError> {
    let (first, rest) = items
        .split_first()
        .ok_or(LessonError::EmptyInput { operation: "sum" })?;
    rest.iter().try_fold(*first, |total, number| {
        total
            .checked_add(*number)
            .ok_or(LessonError::Overflow { operation: "sum" })
    })
}

/// Adds `by` to every element with [`map`].
///
/// # Errors
///
/// Returns [`LessonError::Overflow`] if any shifted element does not fit in
/// an `i64`.
///
/// ```
/// use lambda_lessons::sequence::offset;
///
/// assert_eq!(offset(&[0, 1, 2], 10), Ok(vec![10, 11, 12]));
/// assert!(offset(&[i64::MAX], 1).is_err());
/// ```
pub fn offset(items: &[i64], by: i64) -> Result<Vec<i64>, LessonError> {
    map(items, |number| {
        number
            .checked_add(by)
            .ok_or(LessonError::Overflow { operation: "offset" })
    })
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_squares() {
        let numbers: Vec<i64> = (1..=10).collect();

        assert_eq!(
            map(&numbers, |number| number * number),
            vec![1, 4, 9, 16, 25, 36, 49, 64, 81, 100]
        );
    }

    #[rstest]
    fn test_reduce_single_element_returns_it() {
        assert_eq!(reduce(|_, _: &i64| unreachable!(), &[7_i64]), Ok(7));
    }

    #[rstest]
    fn test_reduce_is_left_associative() {
        let result = reduce(|left: i64, right| left - right, &[10, 3, 2]);

        assert_eq!(result, Ok(5));
    }

    #[rstest]
    fn test_sum_empty_is_error() {
        assert_eq!(sum(&[]), Err(LessonError::EmptyInput { operation: "sum" }));
    }

    #[rstest]
    fn test_sum_overflow_is_error() {
        assert_eq!(
            sum(&[i64::MAX, 1, -1]),
            Err(LessonError::Overflow { operation: "sum" })
        );
    }
}
