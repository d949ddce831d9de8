//! Execution engine for bubble sort operations.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates a bubble
//! sort: it runs successive passes over a shrinking unsorted prefix, applies
//! the optional early exit and pass cap, and accumulates pass, comparison,
//! and swap counters for reporting.
//!
//! ## Design notes
//!
//! * Provides both a `PartialOrd` entry point and a predicate-based entry
//!   point, so adapters can sort keyed pairs with a custom order.
//! * The default run performs all n passes unconditionally, matching the
//!   canonical algorithm's Θ(n²) comparison count even on sorted input.
//! * Early exit, when enabled, stops after the first pass with zero swaps,
//!   giving O(n) behavior on already-sorted data.
//! * The pass cap bounds work for partial sorts: after k passes the largest
//!   k elements occupy their final positions.
//!
//! ## Invariants
//!
//! * Pass i performs exactly `n - i - 1` comparisons.
//! * Without early exit or a pass cap, exactly n passes run and the total
//!   comparison count is n(n-1)/2.
//! * The slice is a permutation of its input contents at every point: the
//!   engine only swaps adjacent elements.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not build user-facing reports (handled by adapters).

// Internal dependencies
use crate::algorithms::pass::bubble_pass;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a sort execution.
///
/// The default configuration is the canonical algorithm: no early exit and
/// no pass cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortConfig {
    /// Stop after the first pass that performs zero swaps.
    pub early_exit: bool,

    /// Cap on the number of passes (`None` means run all n passes).
    pub max_passes: Option<usize>,
}

// ============================================================================
// Executor Output
// ============================================================================

/// Counters from a sort execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorOutput {
    /// Number of passes performed.
    pub passes: usize,

    /// Total adjacent comparisons performed.
    pub comparisons: u64,

    /// Total swaps performed.
    pub swaps: u64,

    /// Whether a zero-swap pass ended the run before the pass budget.
    pub finished_early: bool,
}

// ============================================================================
// Sort Executor
// ============================================================================

/// Unified executor for bubble sort operations.
#[derive(Debug, Clone, Copy)]
pub struct SortExecutor;

impl SortExecutor {
    /// Sort `data` in place into non-decreasing order.
    ///
    /// Elements compare via `PartialOrd`; mutually unordered elements (e.g.
    /// `NaN` floats) are treated as equal and never swapped.
    #[inline]
    pub fn run_with_config<T: PartialOrd>(data: &mut [T], config: SortConfig) -> ExecutorOutput {
        Self::run_by(data, |a, b| a > b, config)
    }

    /// Sort `data` in place under a caller-supplied strict ordering predicate.
    ///
    /// `is_greater(a, b)` must return `true` exactly when `a` must order
    /// after `b`. The predicate must be a strict order for the result to be
    /// sorted; equal elements (predicate `false` both ways) keep their
    /// relative order.
    pub fn run_by<T, F>(data: &mut [T], mut is_greater: F, config: SortConfig) -> ExecutorOutput
    where
        F: FnMut(&T, &T) -> bool,
    {
        let n = data.len();
        let pass_budget = config.max_passes.unwrap_or(n).min(n);

        let mut output = ExecutorOutput {
            passes: 0,
            comparisons: 0,
            swaps: 0,
            finished_early: false,
        };

        for i in 0..pass_budget {
            // The largest i elements have bubbled into data[n - i..], so the
            // comparison window shrinks by one each pass.
            let outcome = bubble_pass(data, n - i - 1, &mut is_greater);

            output.passes += 1;
            output.comparisons += outcome.comparisons;
            output.swaps += outcome.swaps;

            if config.early_exit && outcome.swaps == 0 {
                output.finished_early = output.passes < pass_budget;
                break;
            }
        }

        output
    }
}
