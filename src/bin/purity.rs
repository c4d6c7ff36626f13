//! Mutating a vector in place versus returning an extended copy.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::purity::{append_pure, mutate_in_place};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut numbers1 = vec![1, 2, 3, 4, 5];
    let numbers2 = vec![1, 2, 3, 4, 5];

    println!("Using a non-pure function:");
    println!("Numbers 1: {numbers1:?}");
    mutate_in_place(&mut numbers1)?;
    println!("Numbers 1: {numbers1:?}");

    println!("Using a pure function:");
    println!("Numbers 2: {numbers2:?}");
    let numbers3 = append_pure(&numbers2)?;
    println!("Numbers 2: {numbers2:?}");
    println!("Numbers 3: {numbers3:?}");
    Ok(())
}
