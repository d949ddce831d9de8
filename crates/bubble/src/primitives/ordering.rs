//! Key ordering for floating-point sort keys.
//!
//! ## Purpose
//!
//! This module defines the total order used by the indexed adapter to compare
//! floating-point keys. IEEE 754 comparison is only partial (`NaN` compares
//! unordered with everything), so a totalized ordering is needed for the sort
//! to produce a deterministic arrangement.
//!
//! ## Design notes
//!
//! * **NaN-last**: `NaN` keys order after every other key, including infinities.
//! * **Stable ties**: Mutually unordered keys compare `Equal`, so the sort
//!   never swaps them and their relative insertion order is preserved.
//! * **Infinities**: `-inf` and `+inf` order numerically like any other value.
//!
//! ## Invariants
//!
//! * The ordering is total: every pair of keys compares to exactly one of
//!   `Less`, `Equal`, or `Greater`.
//! * For finite keys the ordering agrees with `PartialOrd`.
//!
//! ## Non-goals
//!
//! * This module does not distinguish `-0.0` from `0.0`.
//! * This module does not perform sorting itself.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Ordering Functions
// ============================================================================

/// Total order over floating-point keys with `NaN` ordered last.
#[inline]
pub fn nan_last<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

/// Strict "greater than" under the NaN-last total order.
///
/// This is the swap predicate handed to the executor: adjacent keys are
/// exchanged only when the left key is strictly greater, which keeps the
/// sort stable for equal keys.
#[inline]
pub fn is_greater_nan_last<T: Float>(a: T, b: T) -> bool {
    nan_last(a, b) == Ordering::Greater
}
