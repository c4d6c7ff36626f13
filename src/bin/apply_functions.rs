//! Passing named functions, library functions and closures as arguments.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::higher_order::{apply_to_number, do_function, plus3, square};

fn print_hello() {
    println!("Hello!");
}

fn main() {
    init_tracing();

    do_function(print_hello);

    println!("Applying plus3: {}", apply_to_number(4.0, plus3));
    println!("Applying square: {}", apply_to_number(4.0, square));
    println!("Applying f64::sqrt: {}", apply_to_number(4.0, f64::sqrt));
    println!(
        "Applying anonymous lambda: {}",
        apply_to_number(4.0, |number: f64| number * std::f64::consts::PI)
    );
}
