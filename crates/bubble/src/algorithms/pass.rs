//! Single bubble pass over an unsorted prefix.
//!
//! ## Purpose
//!
//! This module implements one pass of the bubble sort: a left-to-right sweep
//! of adjacent comparisons over the unsorted prefix, swapping each pair that
//! is out of order. The executor composes these passes into a full sort.
//!
//! ## Design notes
//!
//! * **Strict comparison**: Adjacent elements are exchanged only when the
//!   left one is strictly greater, so equal elements are never swapped and
//!   the sort is stable.
//! * **Predicate injection**: The comparison is a caller-supplied predicate,
//!   which lets the executor sort plain `PartialOrd` data and keyed pairs
//!   with the same pass.
//! * **In-place**: Swaps use O(1) scratch space via `slice::swap`.
//!
//! ## Invariants
//!
//! * After a pass with `limit` comparisons, the greatest element of
//!   `data[..=limit]` (under the predicate) occupies `data[limit]`.
//! * Exactly `limit` comparisons are performed, regardless of data order.
//!
//! ## Non-goals
//!
//! * This module does not decide how many passes to run (executor's job).
//! * This module does not validate the pass limit against the data length.

// ============================================================================
// Pass Outcome
// ============================================================================

/// Counters from a single bubble pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// Number of adjacent comparisons performed.
    pub comparisons: u64,

    /// Number of swaps performed.
    pub swaps: u64,
}

// ============================================================================
// Bubble Pass
// ============================================================================

/// Perform one bubble pass over `data[..=limit]`.
///
/// Compares adjacent pairs `(j, j + 1)` for `j` in `0..limit` and swaps each
/// pair for which `is_greater(&data[j], &data[j + 1])` holds. A `limit` of 0
/// is a no-op pass.
#[inline]
pub fn bubble_pass<T, F>(data: &mut [T], limit: usize, is_greater: &mut F) -> PassOutcome
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(
        limit == 0 || limit < data.len(),
        "bubble_pass: limit must stay within the slice"
    );

    let mut swaps = 0u64;
    for j in 0..limit {
        if is_greater(&data[j], &data[j + 1]) {
            data.swap(j, j + 1);
            swaps += 1;
        }
    }

    PassOutcome {
        comparisons: limit as u64,
        swaps,
    }
}
