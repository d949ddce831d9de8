//! Indexed adapter for argsort-style sorting.
//!
//! ## Purpose
//!
//! This module provides the indexed execution adapter: it sorts a slice of
//! floating-point keys and returns the sorted keys together with an index
//! mapping back to the original order. Downstream code can process data in
//! sorted order and map results back with `unsort`.
//!
//! ## Design notes
//!
//! * **Stability witness**: Keys are paired with their original indices and
//!   compared by key only, so equal keys keep their input order and the
//!   index mapping records it.
//! * **NaN-last**: `NaN` keys order after all other keys; infinities order
//!   numerically. See `primitives::ordering`.
//! * **Same engine**: The pairs run through the same bubble executor as the
//!   batch adapter, with a key-only predicate.
//!
//! ## Key concepts
//!
//! ### Sort-Process-Unsort Pattern
//! 1. **Sort**: Keys are sorted, creating an index mapping.
//! 2. **Process**: Downstream code operates on the sorted sequence.
//! 3. **Unsort**: Results are mapped back to original indices in O(n) time.
//!
//! ## Invariants
//!
//! * `indices` is a valid permutation of `0..n` with
//!   `indices[sorted_pos] = original_pos`.
//! * `keys[i] <= keys[j]` under the NaN-last order for all `i < j` (when no
//!   pass cap is configured).
//!
//! ## Non-goals
//!
//! * This adapter does not sort the caller's slice in place (use batch).
//! * This adapter does not filter or correct non-finite keys.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::output::{SortDiagnostics, SortReport};
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::ordering::is_greater_nan_last;
use crate::primitives::permutation::unsort;

// ============================================================================
// Indexed Bubble Builder
// ============================================================================

/// Builder for the indexed sorter.
#[derive(Debug, Clone)]
pub struct IndexedBubbleBuilder {
    /// Stop after the first pass that performs zero swaps.
    pub early_exit: bool,

    /// Cap on the number of passes.
    pub max_passes: Option<usize>,

    /// Whether to collect comparison/swap counters.
    pub return_diagnostics: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for IndexedBubbleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexedBubbleBuilder {
    /// Create a new indexed sorter builder with default parameters.
    fn new() -> Self {
        Self {
            early_exit: false,
            max_passes: None,
            return_diagnostics: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Enable the early exit optimization.
    pub fn early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Cap the number of passes.
    pub fn max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Enable returning diagnostics in the report.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the indexed sorter.
    pub fn build(self) -> Result<IndexedBubble, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_max_passes(self.max_passes)?;

        Ok(IndexedBubble { config: self })
    }
}

// ============================================================================
// Indexed Bubble Sorter
// ============================================================================

/// Indexed sorter: argsort of floating-point keys.
#[derive(Debug, Clone)]
pub struct IndexedBubble {
    config: IndexedBubbleBuilder,
}

impl IndexedBubble {
    /// Sort `keys` and return the sorted keys with an index mapping.
    ///
    /// The input slice is not modified. Equal keys keep their input order,
    /// so `(key, index)` pairs in the result witness the sort's stability.
    pub fn sort<T: Float>(&self, keys: &[T]) -> IndexedResult<T> {
        // Pair each key with its original index; comparisons look at the
        // key only, so equal keys are never swapped.
        let mut pairs: Vec<(T, usize)> = keys.iter().enumerate().map(|(i, &k)| (k, i)).collect();

        let config = SortConfig {
            early_exit: self.config.early_exit,
            max_passes: self.config.max_passes,
        };

        let result = SortExecutor::run_by(
            &mut pairs,
            |a: &(T, usize), b: &(T, usize)| is_greater_nan_last(a.0, b.0),
            config,
        );

        IndexedResult {
            keys: pairs.iter().map(|p| p.0).collect(),
            indices: pairs.iter().map(|p| p.1).collect(),
            report: SortReport {
                len: keys.len(),
                passes: result.passes,
                finished_early: result.finished_early,
                diagnostics: self.config.return_diagnostics.then_some(SortDiagnostics {
                    comparisons: result.comparisons,
                    swaps: result.swaps,
                }),
            },
        }
    }
}

// ============================================================================
// Indexed Result
// ============================================================================

/// Output of an indexed sort: sorted keys plus the original-index mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedResult<T> {
    /// Keys in non-decreasing order (NaN keys last).
    pub keys: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,

    /// Report for the underlying sort execution.
    pub report: SortReport,
}

impl<T> IndexedResult<T> {
    /// Map sorted-order values back to the original input order.
    ///
    /// `sorted_values` must have one value per key; any slice that was
    /// computed in sorted order qualifies, including `self.keys` itself.
    pub fn unsort<V: Clone>(&self, sorted_values: &[V]) -> Result<Vec<V>, SortError> {
        Validator::validate_unsort_inputs(sorted_values.len(), &self.indices)?;
        Ok(unsort(sorted_values, &self.indices))
    }
}
