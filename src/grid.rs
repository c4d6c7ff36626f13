//! A square grid of points and a search for the best-scoring one.
//!
//! [`generate_points`] lays out `axis_len * axis_len` points around a centre.
//! [`argmax`] then picks a point by any scoring function, so the same grid
//! answers different questions depending on the function passed in.
//!
//! # Examples
//!
//! ```
//! use lambda_lessons::grid::{argmax, by_coordinates, GridSpec, Point};
//!
//! let points = GridSpec::default().points()?;
//!
//! let best = argmax(&points, by_coordinates(|x, y| x * 10 - y * 5))?;
//! assert_eq!(best, Point::new(2, -2));
//! # Ok::<(), lambda_lessons::LessonError>(())
//! ```

use std::fmt;

use crate::error::LessonError;

/// A point with integer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Size and centre of a grid.
///
/// The default is a 5 by 5 grid centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of points along each axis.
    pub axis_len: u32,
    /// Horizontal centre.
    pub center_x: i64,
    /// Vertical centre.
    pub center_y: i64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            axis_len: 5,
            center_x: 0,
            center_y: 0,
        }
    }
}

impl GridSpec {
    /// Generates the points of this grid. See [`generate_points`].
    ///
    /// # Errors
    ///
    /// Returns [`LessonError::Overflow`] if a coordinate does not fit in an
    /// `i64`.
    pub fn points(&self) -> Result<Vec<Point>, LessonError> {
        generate_points(self.axis_len, self.center_x, self.center_y)
    }
}

/// Generates `axis_len * axis_len` distinct points around
/// `(center_x, center_y)`.
///
/// Point `i` is
/// `((i / axis_len) + center_x - axis_len / 2, (i % axis_len) + center_y - axis_len / 2)`,
/// so the points come out column by column, starting at the lowest `x` and
/// `y`. For an even `axis_len` the grid reaches one unit further on the
/// negative side.
///
/// # Errors
///
/// Returns [`LessonError::Overflow`] if a coordinate of the grid does not
/// fit in an `i64`.
///
/// # Examples
///
/// ```
/// use lambda_lessons::grid::{generate_points, Point};
///
/// let points = generate_points(3, 10, 0)?;
///
/// assert_eq!(points.len(), 9);
/// assert_eq!(points[0], Point::new(9, -1));
/// assert_eq!(points[8], Point::new(11, 1));
/// # Ok::<(), lambda_lessons::LessonError>(())
/// ```
pub fn generate_points(
    axis_len: u32,
    center_x: i64,
    center_y: i64,
) -> Result<Vec<Point>, LessonError> {
    let length = i64::from(axis_len);
    let half = length / 2;
    let overflow = || LessonError::Overflow {
        operation: "generate_points",
    };

    let low_x = center_x.checked_sub(half).ok_or_else(overflow)?;
    let low_y = center_y.checked_sub(half).ok_or_else(overflow)?;
    if length > 0 {
        // Every coordinate lies between the low corner and this high corner.
        low_x.checked_add(length - 1).ok_or_else(overflow)?;
        low_y.checked_add(length - 1).ok_or_else(overflow)?;
    }

    let mut points = Vec::new();
    for column in 0..length {
        for row in 0..length {
            points.push(Point::new(low_x + column, low_y + row));
        }
    }
    tracing::debug!(axis_len, center_x, center_y, count = points.len(), "generated grid");
    Ok(points)
}

/// Returns the first element with the highest score.
///
/// Later elements only replace the current best when their score is strictly
/// greater, so ties go to the element seen first. Scores that do not compare
/// (such as `NaN`) never replace the current best.
///
/// # Errors
///
/// Returns [`LessonError::EmptyInput`] if `items` is empty.
///
/// # Examples
///
/// ```
/// use lambda_lessons::grid::argmax;
///
/// let words = ["pear", "fig", "plum", "kiwi"];
/// assert_eq!(argmax(&words, |word| word.len()), Ok("pear"));
/// ```
pub fn argmax<T, S, F>(items: &[T], mut score: F) -> Result<T, LessonError>
where
    T: Clone,
    S: PartialOrd,
    F: FnMut(&T) -> S,
{
    let (first, rest) = items
        .split_first()
        .ok_or(LessonError::EmptyInput { operation: "argmax" })?;

    let mut best = first;
    let mut best_score = score(first);
    for item in rest {
        let item_score = score(item);
        if item_score > best_score {
            best = item;
            best_score = item_score;
        }
    }
    Ok(best.clone())
}

/// Adapts a score over `(x, y)` into a score over [`Point`].
///
/// ```
/// use lambda_lessons::grid::{by_coordinates, Point};
///
/// let sum = by_coordinates(|x, y| x + y);
/// assert_eq!(sum(&Point::new(2, 3)), 5);
/// ```
pub fn by_coordinates<S, F>(score: F) -> impl Fn(&Point) -> S
where
    F: Fn(i64, i64) -> S,
{
    move |point| score(point.x, point.y)
}
