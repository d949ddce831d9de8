//! Batch sorting example.
//!
//! Demonstrates the in-place batch adapter:
//! - The classic fixed sample, printed before and after sorting
//! - Diagnostics (pass, comparison, and swap counters)
//! - The opt-in early exit on already-sorted input

use bubble::prelude::*;

fn main() -> Result<(), SortError> {
    example_1_classic_sample()?;
    example_2_diagnostics()?;
    example_3_early_exit()?;

    Ok(())
}

fn print_line(label: &str, data: &[i32]) {
    print!("{label}: ");
    for value in data {
        print!("{value} ");
    }
    println!();
}

/// Example 1: the classic sample
fn example_1_classic_sample() -> Result<(), SortError> {
    let mut numbers = vec![64, 34, 25, 12, 22, 11, 90];

    print_line("Original array", &numbers);

    let sorter = Bubble::new().adapter(Batch).build()?;
    sorter.sort(&mut numbers);

    print_line("Sorted array", &numbers);
    println!();

    Ok(())
}

/// Example 2: diagnostics
fn example_2_diagnostics() -> Result<(), SortError> {
    let mut numbers = vec![5, 4, 3, 2, 1];

    let sorter = Bubble::new()
        .return_diagnostics()
        .adapter(Batch)
        .build()?;

    let report = sorter.sort(&mut numbers);
    println!("{report}");

    Ok(())
}

/// Example 3: early exit on sorted input
fn example_3_early_exit() -> Result<(), SortError> {
    let mut numbers = vec![1, 2, 3, 4, 5, 6, 7];

    let sorter = Bubble::new().early_exit().adapter(Batch).build()?;

    let report = sorter.sort(&mut numbers);
    println!(
        "Sorted input needed {} pass(es) with early exit enabled",
        report.passes
    );

    Ok(())
}
