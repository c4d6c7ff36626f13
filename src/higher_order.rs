//! Functions as values: passing them in, returning them, composing them.

/// Calls `function` with no arguments and returns its result.
///
/// The function is passed by name, not called at the call site:
///
/// ```
/// use lambda_lessons::higher_order::do_function;
///
/// fn answer() -> i64 { 42 }
///
/// assert_eq!(do_function(answer), 42);
/// ```
pub fn do_function<R, F>(function: F) -> R
where
    F: FnOnce() -> R,
{
    function()
}

/// Applies `function` to `number`.
///
/// Works the same for named functions, standard library functions and
/// closures:
///
/// ```
/// use lambda_lessons::higher_order::{apply_to_number, plus3, square};
///
/// assert_eq!(apply_to_number(4.0, plus3), 7.0);
/// assert_eq!(apply_to_number(4.0, square), 16.0);
/// assert_eq!(apply_to_number(4.0, f64::sqrt), 2.0);
/// assert_eq!(apply_to_number(4.0, |number| number / 2.0), 2.0);
/// ```
pub fn apply_to_number<T, R, F>(number: T, function: F) -> R
where
    F: FnOnce(T) -> R,
{
    function(number)
}

/// Returns `number + 3`.
#[must_use]
pub const fn plus3(number: f64) -> f64 {
    number + 3.0
}

/// Returns `number * number`.
#[must_use]
pub const fn square(number: f64) -> f64 {
    number * number
}

/// Composes two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// # Laws
///
/// - **Left identity**: `compose(|x| x, f) == f`
/// - **Right identity**: `compose(f, |x| x) == f`
///
/// # Examples
///
/// ```
/// use lambda_lessons::higher_order::{compose, plus3, square};
///
/// let square_then_plus3 = compose(plus3, square);
/// assert_eq!(square_then_plus3(4.0), 19.0);
/// ```
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}
