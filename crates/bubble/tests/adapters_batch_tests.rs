//! Tests for the batch (in-place) adapter.
//!
//! These tests verify the core sort contract through the public API:
//! - Non-decreasing output order and multiset preservation
//! - Boundary cases (empty, singleton, already sorted)
//! - Pass, comparison, and swap accounting
//! - The opt-in early exit and the pass cap
//!
//! ## Test Organization
//!
//! 1. **Sort Contract** - Ordering, preservation, idempotence
//! 2. **Boundary Cases** - Empty, singleton, duplicates
//! 3. **Accounting** - Passes and diagnostics counters
//! 4. **Variants** - Early exit and pass cap behavior

use bubble::prelude::*;

// ============================================================================
// Sort Contract Tests
// ============================================================================

/// Test the classic sample sequence.
///
/// Verifies input [64, 34, 25, 12, 22, 11, 90] sorts to
/// [11, 12, 22, 25, 34, 64, 90].
#[test]
fn test_sort_classic_sample() {
    let mut data = vec![64, 34, 25, 12, 22, 11, 90];

    let report = Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
    assert_eq!(report.len, 7);
}

/// Test a fully reversed sequence.
///
/// Verifies input [5, 4, 3, 2, 1] sorts to [1, 2, 3, 4, 5].
#[test]
fn test_sort_reversed() {
    let mut data = vec![5, 4, 3, 2, 1];

    Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

/// Test that output is non-decreasing for arbitrary input.
#[test]
fn test_sort_non_decreasing() {
    let mut data = vec![7, -3, 12, 0, -3, 99, 5, 5, -40, 8];

    Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    assert!(
        data.windows(2).all(|w| w[0] <= w[1]),
        "Output should be non-decreasing"
    );
}

/// Test multiset preservation.
///
/// Verifies that no elements are lost, duplicated, or altered.
#[test]
fn test_sort_preserves_multiset() {
    let original = vec![9, 2, 2, 7, 0, 7, 7, -1];
    let mut data = original.clone();

    Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    let mut expected = original;
    expected.sort_unstable();
    assert_eq!(data, expected, "Sorted output should be a permutation of input");
}

/// Test idempotence.
///
/// Verifies that sorting an already-sorted sequence yields the identical
/// sequence, and that sorting twice equals sorting once.
#[test]
fn test_sort_idempotent() {
    let mut once = vec![4, 1, 3, 2];
    let sorter = Bubble::new().adapter(Batch).build().unwrap();

    sorter.sort(&mut once);
    let mut twice = once.clone();
    sorter.sort(&mut twice);

    assert_eq!(once, twice, "sort(sort(S)) should equal sort(S)");
}

// ============================================================================
// Boundary Case Tests
// ============================================================================

/// Test the empty sequence.
///
/// Verifies that an empty slice is a valid no-op with zero passes.
#[test]
fn test_sort_empty() {
    let mut data: Vec<i32> = vec![];

    let report = Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    assert!(data.is_empty());
    assert_eq!(report.passes, 0, "Empty input should need zero passes");
}

/// Test a singleton sequence.
///
/// Verifies that a single element is unchanged.
#[test]
fn test_sort_singleton() {
    let mut data = vec![42];

    let report = Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    assert_eq!(data, vec![42]);
    assert_eq!(report.passes, 1);
}

/// Test an already-sorted sequence with duplicates.
///
/// Verifies input [1, 1, 2, 2, 3] is unchanged.
#[test]
fn test_sort_sorted_duplicates() {
    let mut data = vec![1, 1, 2, 2, 3];

    Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    assert_eq!(data, vec![1, 1, 2, 2, 3]);
}

// ============================================================================
// Accounting Tests
// ============================================================================

/// Test the unconditional pass count.
///
/// Verifies that without early exit all n passes run, even on sorted input,
/// and the comparison count is n(n-1)/2.
#[test]
fn test_sort_runs_all_passes() {
    let mut data = vec![1, 2, 3, 4, 5, 6];

    let report = Bubble::new()
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut data);

    assert_eq!(report.passes, 6, "All n passes should run by default");
    assert!(!report.finished_early);

    let diag = report.diagnostics.unwrap();
    assert_eq!(diag.comparisons, 15, "Comparisons should be n(n-1)/2");
    assert_eq!(diag.swaps, 0, "Sorted input should need no swaps");
}

/// Test swap counting on a fully reversed sequence.
///
/// Verifies that the swap count equals the inversion count.
#[test]
fn test_sort_swap_count_reversed() {
    let mut data = vec![5, 4, 3, 2, 1];

    let report = Bubble::new()
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut data);

    let diag = report.diagnostics.unwrap();
    assert_eq!(diag.swaps, 10, "Reversed input of 5 has 10 inversions");
    assert_eq!(diag.comparisons, 10);
}

/// Test that diagnostics are absent unless requested.
#[test]
fn test_sort_diagnostics_opt_in() {
    let mut data = vec![2, 1];

    let report = Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    assert!(!report.has_diagnostics());
}

// ============================================================================
// Variant Tests
// ============================================================================

/// Test early exit on sorted input.
///
/// Verifies that exactly one pass runs when the input is already sorted.
#[test]
fn test_early_exit_sorted_input() {
    let mut data = vec![1, 2, 3, 4, 5, 6, 7];

    let report = Bubble::new()
        .early_exit()
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut data);

    assert_eq!(report.passes, 1, "Sorted input should need one pass");
    assert!(report.finished_early);
}

/// Test early exit does not change the result.
#[test]
fn test_early_exit_same_result() {
    let mut with_exit = vec![8, 3, 5, 1, 9, 2];
    let mut without_exit = with_exit.clone();

    Bubble::new()
        .early_exit()
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut with_exit);
    Bubble::new().adapter(Batch).build().unwrap().sort(&mut without_exit);

    assert_eq!(with_exit, without_exit);
}

/// Test the pass cap.
///
/// Verifies that after k passes the largest k elements occupy their final
/// positions.
#[test]
fn test_max_passes_partial_sort() {
    let mut data = vec![5, 4, 3, 2, 1];

    let report = Bubble::new()
        .max_passes(2)
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut data);

    assert_eq!(report.passes, 2);
    assert_eq!(&data[3..], &[4, 5], "Largest 2 elements should be placed");
}

/// Test a pass cap at or above n has no effect on the result.
#[test]
fn test_max_passes_generous_cap() {
    let mut data = vec![3, 1, 2];

    let report = Bubble::new()
        .max_passes(100)
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut data);

    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(report.passes, 3, "Pass budget should clamp to n");
}
