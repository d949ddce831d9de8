//! Output types and result structures for sort operations.
//!
//! ## Purpose
//!
//! This module defines the `SortReport` struct returned by every sort, and
//! the optional `SortDiagnostics` counters attached to it when requested.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Diagnostics are optional and only populated on request.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Passes**: One pass is one sweep of adjacent comparisons over the
//!   unsorted prefix; the canonical sort runs n passes.
//! * **Early exit**: `finished_early` records that a zero-swap pass ended
//!   the run before the pass budget was exhausted.
//!
//! ## Invariants
//!
//! * `passes <= len` always holds.
//! * Without early exit or a pass cap, `passes == len` and
//!   `diagnostics.comparisons == len * (len - 1) / 2`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Diagnostics
// ============================================================================

/// Work counters for a sort operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDiagnostics {
    /// Total adjacent comparisons performed.
    pub comparisons: u64,

    /// Total swaps performed.
    pub swaps: u64,
}

impl Display for SortDiagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Sort Diagnostics:")?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Swaps:       {}", self.swaps)
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Report describing a completed sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Number of elements in the sorted sequence.
    pub len: usize,

    /// Number of passes performed.
    pub passes: usize,

    /// Whether a zero-swap pass ended the run before the pass budget.
    pub finished_early: bool,

    /// Work counters (present when diagnostics were requested).
    pub diagnostics: Option<SortDiagnostics>,
}

impl SortReport {
    /// Check if diagnostics were collected.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements: {}", self.len)?;
        writeln!(f, "  Passes:   {}", self.passes)?;

        if self.finished_early {
            writeln!(f, "  Early exit: Applied")?;
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }

        Ok(())
    }
}
