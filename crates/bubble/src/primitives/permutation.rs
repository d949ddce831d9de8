//! Permutation utilities for index-mapped sorting.
//!
//! ## Purpose
//!
//! This module provides utilities for working with the index mapping produced
//! by the indexed adapter: validating that an index vector is a permutation
//! and mapping sorted-order values back to their original positions.
//!
//! ## Key concepts
//!
//! ### Sort-Process-Unsort Pattern
//! 1. **Sort**: Keys are sorted, producing an index mapping.
//! 2. **Process**: Downstream code operates on the sorted sequence.
//! 3. **Unsort**: Results are mapped back to original indices in O(n) time.
//!
//! ## Invariants
//!
//! * `indices[sorted_pos] = original_pos` for every sorted position.
//! * A valid index mapping is a permutation of `0..n`.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting or error reporting (the validator
//!   translates violations into `SortError`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Permutation Functions
// ============================================================================

/// Check that `indices` is a permutation of `0..indices.len()`.
///
/// Returns the position of the first out-of-range or repeated index, or
/// `None` if the vector is a valid permutation.
pub fn check_permutation(indices: &[usize]) -> Option<usize> {
    let n = indices.len();
    let mut seen = vec![false; n];

    for (position, &idx) in indices.iter().enumerate() {
        if idx >= n || seen[idx] {
            return Some(position);
        }
        seen[idx] = true;
    }

    None
}

/// Map sorted-order values back to the original input order in O(n) time.
///
/// The caller must ensure `indices` is a valid permutation with the same
/// length as `sorted_values` (see [`check_permutation`]).
#[inline]
pub fn unsort<T: Clone>(sorted_values: &[T], indices: &[usize]) -> Vec<T> {
    debug_assert_eq!(
        sorted_values.len(),
        indices.len(),
        "unsort: values and indices must have the same length"
    );

    let mut result = sorted_values.to_vec();

    // Map each sorted position back to its original position
    for (sorted_idx, &orig_idx) in indices.iter().enumerate() {
        result[orig_idx] = sorted_values[sorted_idx].clone();
    }

    result
}
