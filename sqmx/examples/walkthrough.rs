//! Tour of the matrix engines on a small random matrix
//!
//! Run with `RUST_LOG=debug` to see the engines' own tracing.

use rand::{rngs::StdRng, SeedableRng};
use sqmx::{Angle, Axis, Direction, Matrix, Result, Rotation};
use std::time::Instant;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dimension = 5;
    let mut rng = StdRng::seed_from_u64(2024);
    let mut matrix: Matrix<i64> = Matrix::random(dimension, &mut rng)?;
    println!("Random {dimension}x{dimension} matrix:\n{matrix}");

    let start = Instant::now();
    let stack = matrix.determinant();
    let stack_time = start.elapsed();
    let start = Instant::now();
    let recursive = matrix.determinant_recursive();
    let recursive_time = start.elapsed();
    println!("Determinant: {stack} (stack {stack_time:?}, recursive {recursive_time:?})");

    println!("Row norm: {}, column norm: {}", matrix.norm(Axis::Row), matrix.norm(Axis::Column));
    println!("Sums between first two positives: {:?}", matrix.sums_between_positives());

    let block = matrix.largest_monotone_block(Axis::Row, true);
    println!("Longest ascending run: {block} = {}", matrix.view(block));

    let maximum = matrix.extremums(true);
    println!("Maximum found at {} position(s)", maximum.len());
    println!("Saddle points: {}", matrix.saddle_points().len());
    for position in matrix.sorted_local_extremums(false) {
        println!("Local minimum {} at {position}", matrix[position]);
    }

    matrix.rotate(Rotation::Clockwise, Angle::Deg90)?;
    println!("After a clockwise quarter turn:\n{matrix}");

    matrix.shift(Axis::Column, Direction::RightDown, 2);
    println!("After shifting columns right by 2:\n{matrix}");

    matrix.sort_by_line(Axis::Column, 0)?;
    println!("Rows ordered by column 0:\n{matrix}");

    matrix.sort_diagonals(|a, b| a.cmp(b));
    println!("Broken diagonals sorted:\n{matrix}");

    let minor = matrix.without_positions([matrix.position(0, 0)?])?;
    println!("Minor of (0,0):\n{minor}");

    let averages = matrix.with_row_fold(
        |row| row.average().unwrap_or(0),
        |cell, average| cell - average,
    );
    println!("Each cell minus its row average:\n{averages}");
    Ok(())
}
