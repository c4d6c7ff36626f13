//! Error type shared by every lesson.
//!
//! None of the lessons recover from an error. Each failure is returned to the
//! caller with `?` and, in the demo binaries, ends the run with a non-zero
//! exit status.

use thiserror::Error;

/// Represents the ways a lesson operation can fail.
///
/// # Examples
///
/// ```rust
/// use lambda_lessons::LessonError;
///
/// let error = LessonError::EmptyInput { operation: "reduce" };
/// assert_eq!(
///     error.to_string(),
///     "reduce: expected at least one element, got an empty input"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LessonError {
    /// The operation needs at least one element.
    #[error("{operation}: expected at least one element, got an empty input")]
    EmptyInput {
        /// Name of the operation that failed.
        operation: &'static str,
    },

    /// An element was read past the bounds of a sequence.
    #[error("{operation}: index {index} is out of range for length {length}")]
    Index {
        /// Name of the operation that failed.
        operation: &'static str,
        /// The index that was requested.
        index: isize,
        /// Length of the sequence at the time of the access.
        length: usize,
    },

    /// An operand of the wrong kind was passed.
    #[error("{operation}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the operation that failed.
        operation: &'static str,
        /// The kind of value the operation accepts.
        expected: &'static str,
        /// The kind of value that was actually passed.
        found: &'static str,
    },

    /// A named override was unknown or carried an unusable value.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: String,
        /// Why the argument was rejected.
        reason: String,
    },

    /// An integer result does not fit in an `i64`.
    #[error("{operation}: integer overflow")]
    Overflow {
        /// Name of the operation that failed.
        operation: &'static str,
    },

    /// A value with a zero denominator was evaluated.
    #[error("cannot evaluate {numerator}/0: division by zero")]
    Division {
        /// Numerator of the value being evaluated.
        numerator: i64,
    },
}

impl LessonError {
    /// Creates a [`LessonError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(name: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a [`LessonError::Index`] for reading the last element of an
    /// empty sequence.
    #[must_use]
    pub const fn last_of_empty(operation: &'static str) -> Self {
        Self::Index {
            operation,
            index: -1,
            length: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_input_display() {
        let error = LessonError::EmptyInput { operation: "argmax" };

        assert_eq!(
            error.to_string(),
            "argmax: expected at least one element, got an empty input"
        );
    }

    #[rstest]
    fn test_last_of_empty_display() {
        let error = LessonError::last_of_empty("append_pure");

        assert_eq!(
            error.to_string(),
            "append_pure: index -1 is out of range for length 0"
        );
    }

    #[rstest]
    fn test_type_mismatch_display() {
        let error = LessonError::TypeMismatch {
            operation: "Fraction::try_multiply",
            expected: "fraction",
            found: "integer",
        };

        assert_eq!(
            error.to_string(),
            "Fraction::try_multiply: expected fraction, found integer"
        );
    }

    #[rstest]
    fn test_invalid_argument_display() {
        let error = LessonError::invalid_argument("scale", "unknown field");

        assert_eq!(error.to_string(), "invalid argument `scale`: unknown field");
    }

    #[rstest]
    fn test_division_display() {
        let error = LessonError::Division { numerator: 3 };

        assert_eq!(error.to_string(), "cannot evaluate 3/0: division by zero");
    }

    #[rstest]
    fn test_overflow_display() {
        let error = LessonError::Overflow { operation: "append_pure" };

        assert_eq!(error.to_string(), "append_pure: integer overflow");
    }

    #[rstest]
    fn test_error_trait() {
        let error = LessonError::EmptyInput { operation: "reduce" };

        let _: &dyn std::error::Error = &error;
    }
}
