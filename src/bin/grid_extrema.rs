//! One grid, three scoring functions, three different winners.

use lambda_lessons::demo::init_tracing;
use lambda_lessons::grid::{GridSpec, argmax, by_coordinates};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = GridSpec::default().points()?;

    let f = |x: i64, y: i64| x * 10 - y * 5;
    let g = |x: i64, y: i64| x + y;
    let h = |x: i64, _y: i64| x.pow(2);

    println!("Max f(x, y): {}", argmax(&points, by_coordinates(f))?);
    println!("Max g(x, y): {}", argmax(&points, by_coordinates(g))?);
    println!("Max h(x, y): {}", argmax(&points, by_coordinates(h))?);
    Ok(())
}
