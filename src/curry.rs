//! Currying: turning a two-argument function into a chain of one-argument
//! functions.
//!
//! ```text
//! add(a, b)          == a + b
//! curry_add(a)(b)    == a + b
//! curry2!(f)(a)(b)   == f(a, b)
//! ```

/// Adds two numbers.
///
/// # Panics
///
/// Panics on overflow; overflow checks stay on in release builds.
///
/// ```
/// use lambda_lessons::curry::add;
///
/// assert_eq!(add(5, 5), 10);
/// ```
#[must_use]
pub const fn add(first: i64, second: i64) -> i64 {
    first + second
}

/// Returns a function that adds `first` to its argument.
///
/// `first` is captured by value. The returned function holds no other state,
/// so it can be called any number of times with the same results.
///
/// # Panics
///
/// The returned function panics when [`add`] would.
///
/// # Examples
///
/// ```
/// use lambda_lessons::curry::curry_add;
///
/// assert_eq!(curry_add(5)(5), 10);
///
/// let add_five = curry_add(5);
/// assert_eq!(add_five(1), 6);
/// assert_eq!(add_five(-5), 0);
/// ```
pub fn curry_add(first: i64) -> impl Fn(i64) -> i64 {
    move |second| add(first, second)
}

/// Curries any two-argument function, the way [`curry_add`] curries
/// [`add`].
///
/// `curry2!(f)(a)` moves `a` into the returned closure, just as
/// `curry_add(a)` does, and hands a clone of it to `f` on every call. The
/// function itself sits behind an `Rc` so that every partial application
/// can share it. The first argument therefore only needs to be [`Clone`].
///
/// # Examples
///
/// ```
/// use lambda_lessons::curry::add;
/// use lambda_lessons::curry2;
///
/// let curried = curry2!(add);
/// assert_eq!(curried(5)(5), 10);
///
/// let greet = curry2!(|greeting: String, name: &str| format!("{greeting}, {name}"));
/// let hello = greet("Hello".to_string());
/// assert_eq!(hello("Rust"), "Hello, Rust");
/// assert_eq!(hello("world"), "Hello, world");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let shared = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&shared);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}
