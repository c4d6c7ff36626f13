//! An immutable fraction.
//!
//! [`Fraction`] has no setters. Its fields are private and it is `Copy`, so
//! every "change" produces a new value and the original stays as it was:
//!
//! - multiplication returns a new fraction,
//! - [`Fraction::copy_with`] returns a new fraction with some fields replaced.
//!
//! Fractions are not normalised. Equality is structural, so `2/4 != 1/2`.
//!
//! # Examples
//!
//! ```
//! use lambda_lessons::fraction::{Fraction, FractionUpdate};
//!
//! let half = Fraction::new(1, 2);
//! let five_halves = half.copy_with(FractionUpdate::new().numerator(5));
//!
//! assert_eq!(five_halves, Fraction::new(5, 2));
//! assert_eq!(half, Fraction::new(1, 2));
//! assert_eq!(half * five_halves, Fraction::new(5, 4));
//! ```

use std::fmt;
use std::ops::Mul;

use crate::error::LessonError;

/// A numerator and a denominator that never change after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

static_assertions::assert_impl_all!(Fraction: Copy, Send, Sync);

impl Fraction {
    /// Creates a fraction.
    ///
    /// A zero denominator is accepted here; it only fails once the fraction
    /// is evaluated with [`Fraction::value`].
    #[must_use]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Evaluates the fraction as a float.
    ///
    /// # Errors
    ///
    /// Returns [`LessonError::Division`] if the denominator is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambda_lessons::fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(1, 2).value(), Ok(0.5));
    /// assert!(Fraction::new(1, 0).value().is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> Result<f64, LessonError> {
        if self.denominator == 0 {
            return Err(LessonError::Division {
                numerator: self.numerator,
            });
        }
        Ok(self.numerator as f64 / self.denominator as f64)
    }

    /// Returns a new fraction with the fields set in `update` replaced.
    ///
    /// Fields left unset in `update` are copied from `self`.
    #[must_use]
    pub const fn copy_with(&self, update: FractionUpdate) -> Self {
        Self {
            numerator: match update.numerator {
                Some(numerator) => numerator,
                None => self.numerator,
            },
            denominator: match update.denominator {
                Some(denominator) => denominator,
                None => self.denominator,
            },
        }
    }

    /// Returns a new fraction with fields replaced by name.
    ///
    /// Accepted names are `"numerator"` and `"denominator"`. Later overrides
    /// of the same name win. Any numeric [`Value`] is accepted as long as it
    /// is a whole number: `Value::Float(5.0)` works like `Value::Integer(5)`.
    ///
    /// Unknown names are rejected rather than skipped, so a misspelt field
    /// cannot go unnoticed.
    ///
    /// # Errors
    ///
    /// Returns [`LessonError::InvalidArgument`] if a name is unknown, its
    /// value is not a number, or it is a float with no exact `i64` form
    /// (fractional, infinite, `NaN` or out of range).
    ///
    /// # Examples
    ///
    /// ```
    /// use lambda_lessons::fraction::{Fraction, Value};
    ///
    /// let half = Fraction::new(1, 2);
    ///
    /// let copied = half.copy_with_overrides([("denominator", Value::Integer(3))]);
    /// assert_eq!(copied, Ok(Fraction::new(1, 3)));
    ///
    /// let from_float = half.copy_with_overrides([("numerator", Value::Float(5.0))]);
    /// assert_eq!(from_float, Ok(Fraction::new(5, 2)));
    ///
    /// let rejected = half.copy_with_overrides([("numerator", Value::Text("five".into()))]);
    /// assert!(rejected.is_err());
    /// ```
    pub fn copy_with_overrides<'a, I>(&self, overrides: I) -> Result<Self, LessonError>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut update = FractionUpdate::new();
        for (name, value) in overrides {
            let number = value.to_whole_number(name)?;
            update = match name {
                "numerator" => update.numerator(number),
                "denominator" => update.denominator(number),
                _ => return Err(LessonError::invalid_argument(name, "unknown field")),
            };
        }
        Ok(self.copy_with(update))
    }

    /// Multiplies two fractions, reporting overflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`LessonError::Overflow`] if either product does not fit in
    /// an `i64`.
    ///
    /// ```
    /// use lambda_lessons::fraction::Fraction;
    ///
    /// let half = Fraction::new(1, 2);
    /// assert_eq!(half.checked_mul(half), Ok(Fraction::new(1, 4)));
    /// assert!(Fraction::new(i64::MAX, 1).checked_mul(half).is_err());
    /// ```
    pub fn checked_mul(self, other: Self) -> Result<Self, LessonError> {
        let overflow = || LessonError::Overflow {
            operation: "Fraction::checked_mul",
        };
        Ok(Self::new(
            self.numerator
                .checked_mul(other.numerator)
                .ok_or_else(overflow)?,
            self.denominator
                .checked_mul(other.denominator)
                .ok_or_else(overflow)?,
        ))
    }

    /// Multiplies by a dynamically typed operand.
    ///
    /// # Errors
    ///
    /// Returns [`LessonError::TypeMismatch`] unless `other` holds a
    /// [`Fraction`], and [`LessonError::Overflow`] if the product does not
    /// fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambda_lessons::fraction::{Fraction, Value};
    ///
    /// let half = Fraction::new(1, 2);
    ///
    /// assert_eq!(half.try_multiply(&Value::Fraction(half)), Ok(Fraction::new(1, 4)));
    /// assert!(half.try_multiply(&Value::Integer(2)).is_err());
    /// ```
    pub fn try_multiply(&self, other: &Value) -> Result<Self, LessonError> {
        match other {
            Value::Fraction(fraction) => self.checked_mul(*fraction),
            _ => Err(LessonError::TypeMismatch {
                operation: "Fraction::try_multiply",
                expected: Value::FRACTION_KIND,
                found: other.kind(),
            }),
        }
    }
}

/// # Panics
///
/// Panics if either product does not fit in an `i64`. Use
/// [`Fraction::checked_mul`] to get an error instead.
impl Mul for Fraction {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        match self.checked_mul(other) {
            Ok(product) => product,
            Err(error) => panic!("{self} * {other}: {error}"),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.numerator, self.denominator)
    }
}

/// The fields to replace in [`Fraction::copy_with`].
///
/// ```
/// use lambda_lessons::fraction::{Fraction, FractionUpdate};
///
/// let update = FractionUpdate::new().denominator(8);
/// assert_eq!(Fraction::new(3, 4).copy_with(update), Fraction::new(3, 8));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FractionUpdate {
    numerator: Option<i64>,
    denominator: Option<i64>,
}

impl FractionUpdate {
    /// Creates an update that replaces nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numerator: None,
            denominator: None,
        }
    }

    /// Replaces the numerator.
    #[must_use]
    pub const fn numerator(mut self, numerator: i64) -> Self {
        self.numerator = Some(numerator);
        self
    }

    /// Replaces the denominator.
    #[must_use]
    pub const fn denominator(mut self, denominator: i64) -> Self {
        self.denominator = Some(denominator);
        self
    }
}

/// A dynamically typed operand, for operations that check the kind of their
/// input at run time.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A fraction.
    Fraction(Fraction),
    /// A piece of text.
    Text(String),
}

impl Value {
    const FRACTION_KIND: &'static str = "fraction";

    /// Returns a short name for the kind of value held.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Fraction(_) => Self::FRACTION_KIND,
            Self::Text(_) => "text",
        }
    }

    /// `2^63`: every whole float in `-2^63..2^63` converts to `i64` exactly.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    #[allow(clippy::cast_possible_truncation)]
    fn to_whole_number(&self, name: &str) -> Result<i64, LessonError> {
        match self {
            Self::Integer(number) => Ok(*number),
            Self::Float(number)
                if number.is_finite()
                    && number.fract() == 0.0
                    && (-Self::I64_BOUND..Self::I64_BOUND).contains(number) =>
            {
                Ok(*number as i64)
            }
            Self::Float(number) => Err(LessonError::InvalidArgument {
                name: name.to_string(),
                reason: format!("expected a whole number that fits in i64, found {number}"),
            }),
            other => Err(LessonError::InvalidArgument {
                name: name.to_string(),
                reason: format!("expected a number, found {}", other.kind()),
            }),
        }
    }
}

impl From<Fraction> for Value {
    fn from(fraction: Fraction) -> Self {
        Self::Fraction(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display() {
        assert_eq!(Fraction::new(1, 2).to_string(), "1/2");
        assert_eq!(Fraction::new(-3, 7).to_string(), "-3/7");
    }

    #[rstest]
    fn test_not_normalised() {
        assert_ne!(Fraction::new(2, 4), Fraction::new(1, 2));
    }

    #[rstest]
    fn test_later_override_wins() {
        let copied = Fraction::new(1, 2).copy_with_overrides([
            ("numerator", Value::Integer(3)),
            ("numerator", Value::Integer(4)),
        ]);

        assert_eq!(copied, Ok(Fraction::new(4, 2)));
    }

    #[rstest]
    fn test_unknown_override_is_rejected() {
        let result = Fraction::new(1, 2).copy_with_overrides([("scale", Value::Integer(2))]);

        assert_eq!(
            result,
            Err(LessonError::invalid_argument("scale", "unknown field"))
        );
    }
}
