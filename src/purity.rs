//! The same operation written twice: once mutating its argument, once
//! returning a new value.
//!
//! ```
//! use lambda_lessons::purity::{append_pure, mutate_in_place};
//!
//! let mut numbers = vec![1, 2, 3];
//! mutate_in_place(&mut numbers)?;
//! assert_eq!(numbers, [1, 2, 3, 4]);
//!
//! let original = vec![1, 2, 3];
//! let extended = append_pure(&original)?;
//! assert_eq!(original, [1, 2, 3]);
//! assert_eq!(extended, [1, 2, 3, 4]);
//! # Ok::<(), lambda_lessons::LessonError>(())
//! ```
//!
//! The signatures already tell the story: `mutate_in_place` needs
//! `&mut Vec<i64>`, while `append_pure` only borrows a slice and cannot
//! change it.

use crate::error::LessonError;

/// Appends `last + 1` to `numbers`, changing the caller's vector.
///
/// # Errors
///
/// Returns [`LessonError::Index`] if `numbers` is empty and
/// [`LessonError::Overflow`] if the last element is `i64::MAX`; the vector
/// is left untouched in both cases.
pub fn mutate_in_place(numbers: &mut Vec<i64>) -> Result<(), LessonError> {
    let next = successor_of_last(numbers, "mutate_in_place")?;
    numbers.push(next);
    Ok(())
}

/// Returns a copy of `numbers` with `last + 1` appended.
///
/// # Errors
///
/// Returns [`LessonError::Index`] if `numbers` is empty and
/// [`LessonError::Overflow`] if the last element is `i64::MAX`.
pub fn append_pure(numbers: &[i64]) -> Result<Vec<i64>, LessonError> {
    let next = successor_of_last(numbers, "append_pure")?;
    let mut extended = Vec::with_capacity(numbers.len() + 1);
    extended.extend_from_slice(numbers);
    extended.push(next);
    Ok(extended)
}

fn successor_of_last(numbers: &[i64], operation: &'static str) -> Result<i64, LessonError> {
    let last = numbers
        .last()
        .ok_or(LessonError::last_of_empty(operation))?;
    last.checked_add(1)
        .ok_or(LessonError::Overflow { operation })
}
