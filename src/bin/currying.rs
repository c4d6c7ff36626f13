//! A two-argument function next to its curried forms.

use lambda_lessons::curry::{add, curry_add};
use lambda_lessons::curry2;
use lambda_lessons::demo::init_tracing;

fn main() {
    init_tracing();

    println!("Add: {}", add(5, 5));
    println!("Curry Add: {}", curry_add(5)(5));

    let curried = curry2!(add);
    println!("Curry2 Add: {}", curried(5)(5));
}
