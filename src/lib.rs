//! # lambda-lessons
//!
//! Small, self-contained lessons in functional programming for Rust.
//!
//! ## Overview
//!
//! Each module is one lesson. The lessons do not depend on each other apart
//! from the shared [`LessonError`] type:
//!
//! - **Predicates**: `all_match` and threshold filters built from closures
//! - **Sequences**: `map`, `reduce` and the small helpers built on them
//! - **Closures**: a factory whose closures share one mutable cell
//! - **Currying**: `curry_add` and the `curry2!` macro
//! - **Higher-order functions**: passing functions around as values
//! - **Immutability**: the `Fraction` value type
//! - **Purity**: in-place mutation next to a value-returning transformation
//! - **Grid**: a point grid searched with different scoring functions
//!
//! Every lesson has a matching binary under `src/bin/` that prints its
//! walkthrough to stdout.
//!
//! ## Feature Flags
//!
//! - `predicate`, `sequence`, `closure`, `curry`, `higher_order`,
//!   `fraction`, `purity`, `grid`: one flag per lesson
//! - `serde`: `Serialize`/`Deserialize` for `Fraction` and `Point`
//! - `demos`: the demo binaries and their logging setup
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use lambda_lessons::prelude::*;
//!
//! let numbers: Vec<i64> = (1..=10).collect();
//! assert!(all_match(&numbers, make_less_than_filter(11)));
//! assert_eq!(sum(&numbers), Ok(55));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every lesson enabled by the current feature set.
///
/// # Usage
///
/// ```rust
/// use lambda_lessons::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::LessonError;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "closure")]
    pub use crate::closure::*;

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "higher_order")]
    pub use crate::higher_order::*;

    #[cfg(feature = "fraction")]
    pub use crate::fraction::*;

    #[cfg(feature = "purity")]
    pub use crate::purity::*;

    #[cfg(feature = "grid")]
    pub use crate::grid::*;
}

pub mod error;

pub use error::LessonError;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "closure")]
pub mod closure;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "higher_order")]
pub mod higher_order;

#[cfg(feature = "fraction")]
pub mod fraction;

#[cfg(feature = "purity")]
pub mod purity;

#[cfg(feature = "grid")]
pub mod grid;

#[cfg(feature = "demos")]
pub mod demo;
