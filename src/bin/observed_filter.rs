//! Each filter remembers its own threshold. The observer prints it on every
//! call, so the output shows which captured value each filter is using.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::predicate::{all_match, make_observed_less_than_filter};

fn main() {
    init_tracing();

    let numbers: Vec<i64> = (1..=10).collect();
    let print_threshold = |max: &i64| println!("{max}");

    let filter5 = make_observed_less_than_filter(5, print_threshold);
    let filter11 = make_observed_less_than_filter(11, print_threshold);

    let below_five = all_match(&numbers, filter5);
    println!("All numbers are less than 5? {below_five}");
    let below_eleven = all_match(&numbers, filter11);
    println!("All numbers are less than 11? {below_eleven}");
}
