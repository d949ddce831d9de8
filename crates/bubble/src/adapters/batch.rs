//! Batch adapter for in-place sorting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it sorts a caller-owned
//! mutable slice in place, which is the core contract of the crate. The
//! sequence is never copied, reallocated, or resized.
//!
//! ## Design notes
//!
//! * **In-place**: Receives `&mut [T]` and mutates it directly.
//! * **Total**: Sorting itself has no failure modes; empty and singleton
//!   slices are valid no-ops. All fallible checks happen at `build()`.
//! * **Delegation**: Delegates the pass loop to the execution engine.
//! * **Generics**: Generic over `PartialOrd` element types at the call site,
//!   so one built sorter can sort slices of different types.
//!
//! ## Invariants
//!
//! * After `sort` returns, `data[i] <= data[j]` for all `i < j` (when no
//!   pass cap is configured).
//! * The multiset of elements is preserved: only adjacent swaps occur.
//! * Equal elements keep their relative order (stable).
//!
//! ## Non-goals
//!
//! * This adapter does not produce an index mapping (use the indexed adapter).
//! * This adapter does not allocate.

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::output::{SortDiagnostics, SortReport};
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;

// ============================================================================
// Batch Bubble Builder
// ============================================================================

/// Builder for the batch sorter.
#[derive(Debug, Clone)]
pub struct BatchBubbleBuilder {
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

impl Default for BatchBubbleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchBubbleBuilder {
    /// Create a new batch sorter builder with default parameters.
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

    /// Build the batch sorter.
    pub fn build(self) -> Result<BatchBubble, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate the pass cap
        Validator::validate_max_passes(self.max_passes)?;

        Ok(BatchBubble { config: self })
    }
}

// ============================================================================
// Batch Bubble Sorter
// ============================================================================

/// Batch sorter: in-place, stable bubble sort.
#[derive(Debug, Clone)]
pub struct BatchBubble {
    config: BatchBubbleBuilder,
}

impl BatchBubble {
    /// Sort `data` in place into non-decreasing order.
    ///
    /// Elements compare via `PartialOrd`; mutually unordered elements are
    /// treated as equal and never swapped. Sorting is total: there are no
    /// error conditions, and empty or singleton slices are no-ops.
    pub fn sort<T: PartialOrd>(&self, data: &mut [T]) -> SortReport {
        let config = SortConfig {
            early_exit: self.config.early_exit,
            max_passes: self.config.max_passes,
        };

        let result = SortExecutor::run_with_config(data, config);

        SortReport {
            len: data.len(),
            passes: result.passes,
            finished_early: result.finished_early,
            diagnostics: self.config.return_diagnostics.then_some(SortDiagnostics {
                comparisons: result.comparisons,
                swaps: result.swaps,
            }),
        }
    }
}
