//! `all_match` with inline closures, then `map`.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::predicate::all_match;
use lambda_lessons::sequence::map;

fn main() {
    init_tracing();

    let numbers: Vec<i64> = (1..=10).collect();

    println!(
        "All numbers are even? {}",
        all_match(&numbers, |number| number % 2 == 0)
    );
    println!(
        "All numbers are less than 10? {}",
        all_match(&numbers, |number| *number <= 10)
    );
    println!(
        "Applying square to numbers: {:?}",
        map(&numbers, |number| number * number)
    );
}
