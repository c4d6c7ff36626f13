//! A fraction that cannot be changed, only copied.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::fraction::{Fraction, FractionUpdate};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let fraction1 = Fraction::new(1, 2);
    println!("Fraction 1: {fraction1}");
    println!("Fraction 1's Value: {}", fraction1.value()?);

    // The getter hands out a copy; changing it leaves the fraction alone.
    let mut numerator = fraction1.numerator();
    numerator += 4;
    println!("Copied numerator: {numerator}");
    println!("Fraction 1: {fraction1}");

    let fraction2 = fraction1.copy_with(FractionUpdate::new().numerator(numerator));
    println!("Fraction 2: {fraction2}");
    println!("Fraction 1: {fraction1}");

    println!("Fraction 1 x Fraction 2: {}", fraction1 * fraction2);
    println!("Fraction 1: {fraction1}");
    Ok(())
}
