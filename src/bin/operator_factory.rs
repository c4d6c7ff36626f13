//! Three closures sharing one mutable value.

use lambda_lessons::closure::make_operator;
use lambda_lessons::demo::init_tracing;

fn main() {
    init_tracing();

    let (add, mult, incr) = make_operator(2);
    println!("Add: {}", add(8));
    println!("Mult: {}", mult(4));

    incr();
    println!("Add after incr: {}", add(8));
    println!("Mult after incr: {}", mult(4));
}
