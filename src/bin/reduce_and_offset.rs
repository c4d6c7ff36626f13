//! Folding a range into one number, and shifting every element of it.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::sequence::{offset, reduce};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let numbers: Vec<i64> = (0..=20).collect();

    let summed = reduce(|total, number| total + number, &numbers)?;
    let shifted = offset(&numbers, 10)?;

    println!("Summed {summed}");
    println!("Offset {shifted:?}");
    Ok(())
}
