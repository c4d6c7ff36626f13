//! A closure factory whose closures share one mutable cell.
//!
//! [`make_operator`] squares its argument once and hands back three closures
//! that all see the same square. Calling `incr` bumps the shared value, and
//! the next `add` or `mult` call observes the change.
//!
//! The shared state is an `Rc<Cell<i64>>`. Each closure owns a clone of the
//! `Rc`, so the cell lives as long as the longest-lived closure, and every
//! call to [`make_operator`] allocates a fresh cell.
//!
//! [`Operator`] is the same idea written as a named type.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::LessonError;

/// Creates `(add, mult, incr)` closures over a shared `n * n`.
///
/// - `add(item)` returns `n2 + item`
/// - `mult(item)` returns `n2 * item`
/// - `incr()` increments `n2`
///
/// # Panics
///
/// Panics if `n * n` does not fit in an `i64`, and the returned closures
/// panic when their result would overflow. See [`Operator::try_new`].
///
/// # Examples
///
/// ```
/// use lambda_lessons::closure::make_operator;
///
/// let (add, mult, incr) = make_operator(2);
/// assert_eq!(add(8), 12);
/// assert_eq!(mult(4), 16);
///
/// incr();
/// assert_eq!(add(8), 13);
/// assert_eq!(mult(4), 20);
/// ```
pub fn make_operator(n: i64) -> (impl Fn(i64) -> i64, impl Fn(i64) -> i64, impl Fn()) {
    Operator::new(n).into_closures()
}

/// Three operations over one shared squared value.
///
/// Clones share the cell, so `incr` through one clone is visible through all
/// of them. Use [`Operator::new`] for an independent cell.
///
/// # Examples
///
/// ```
/// use lambda_lessons::closure::Operator;
///
/// let operator = Operator::new(3);
/// let alias = operator.clone();
///
/// alias.incr();
/// assert_eq!(operator.squared(), 10);
/// assert_eq!(Operator::new(3).squared(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct Operator {
    squared: Rc<Cell<i64>>,
}

impl Operator {
    /// Creates an operator over `n * n`.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` does not fit in an `i64`.
    #[must_use]
    pub fn new(n: i64) -> Self {
        match Self::try_new(n) {
            Ok(operator) => operator,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an operator over `n * n`.
    ///
    /// # Errors
    ///
    /// Returns [`LessonError::Overflow`] if `n * n` does not fit in an `i64`.
    pub fn try_new(n: i64) -> Result<Self, LessonError> {
        let squared = n
            .checked_mul(n)
            .ok_or(LessonError::Overflow { operation: "Operator::new" })?;
        tracing::debug!(n, squared, "creating operator");
        Ok(Self {
            squared: Rc::new(Cell::new(squared)),
        })
    }

    /// Returns the current value of the shared cell.
    #[must_use]
    pub fn squared(&self) -> i64 {
        self.squared.get()
    }

    /// Returns `squared + item`.
    ///
    /// # Panics
    ///
    /// Panics if the sum does not fit in an `i64`.
    #[must_use]
    pub fn add(&self, item: i64) -> i64 {
        or_overflow(self.squared.get().checked_add(item), "Operator::add")
    }

    /// Returns `squared * item`.
    ///
    /// # Panics
    ///
    /// Panics if the product does not fit in an `i64`.
    #[must_use]
    pub fn mult(&self, item: i64) -> i64 {
        or_overflow(self.squared.get().checked_mul(item), "Operator::mult")
    }

    /// Increments the shared cell by one.
    ///
    /// # Panics
    ///
    /// Panics if the cell already holds `i64::MAX`; the cell is unchanged.
    pub fn incr(&self) {
        let incremented = or_overflow(self.squared.get().checked_add(1), "Operator::incr");
        self.squared.set(incremented);
        tracing::trace!(squared = incremented, "operator incremented");
    }

    /// Splits the operator into its `(add, mult, incr)` closures.
    ///
    /// The closures keep sharing the cell with each other and with any
    /// remaining clones of `self`.
    pub fn into_closures(self) -> (impl Fn(i64) -> i64, impl Fn(i64) -> i64, impl Fn()) {
        let for_add = self.clone();
        let for_mult = self.clone();
        (
            move |item| for_add.add(item),
            move |item| for_mult.mult(item),
            move || self.incr(),
        )
    }
}

fn or_overflow(result: Option<i64>, operation: &'static str) -> i64 {
    match result {
        Some(value) => value,
        None => panic!("{}", LessonError::Overflow { operation }),
    }
}
