//! Filters built by a closure factory, applied with `all_match`.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::predicate::{all_match, make_less_than_filter};

fn main() {
    init_tracing();

    let numbers: Vec<i64> = (1..=10).collect();

    println!(
        "All numbers are less than 5? {}",
        all_match(&numbers, make_less_than_filter(5))
    );
    println!(
        "All numbers are less than 11? {}",
        all_match(&numbers, make_less_than_filter(11))
    );
}
