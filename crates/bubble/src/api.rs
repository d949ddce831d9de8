//! High-level API for bubble sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring the sort and
//! choosing an execution adapter (Batch or Indexed).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated during adapter construction.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch (in-place) and Indexed (argsort) modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BubbleBuilder`] via `Bubble::new()`.
//! 2. Chain configuration methods (`.early_exit()`, `.max_passes()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchBubbleBuilder;
use crate::adapters::indexed::IndexedBubbleBuilder;

// Publicly re-exported types
pub use crate::adapters::indexed::IndexedResult;
pub use crate::engine::output::{SortDiagnostics, SortReport};
pub use crate::primitives::errors::SortError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Indexed};
}

/// Fluent builder for configuring sort parameters and execution modes.
#[derive(Debug, Clone)]
pub struct BubbleBuilder {
    /// Early exit optimization (off by default: the canonical bubble sort
    /// runs every pass to completion).
    pub early_exit: Option<bool>,

    /// Cap on the number of passes.
    pub max_passes: Option<usize>,

    /// Collect comparison/swap counters in the report.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for BubbleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: BubbleAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            early_exit: None,
            max_passes: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Enable the early exit optimization: stop after the first pass that
    /// performs zero swaps.
    ///
    /// Off by default so that sort cost matches the canonical algorithm
    /// (Θ(n²) comparisons even on sorted input).
    pub fn early_exit(mut self) -> Self {
        if self.early_exit.is_some() {
            self.duplicate_param = Some("early_exit");
        }
        self.early_exit = Some(true);
        self
    }

    /// Cap the number of passes.
    ///
    /// After k passes the largest k elements occupy their final positions;
    /// a cap below the element count may leave the prefix partially sorted.
    pub fn max_passes(mut self, passes: usize) -> Self {
        if self.max_passes.is_some() {
            self.duplicate_param = Some("max_passes");
        }
        self.max_passes = Some(passes);
        self
    }

    /// Include comparison and swap counters in the report.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait BubbleAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`BubbleBuilder`] into a specialized execution builder.
    fn convert(builder: BubbleBuilder) -> Self::Output;
}

/// Marker for in-place batch sorting.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl BubbleAdapter for Batch {
    type Output = BatchBubbleBuilder;

    fn convert(builder: BubbleBuilder) -> Self::Output {
        let mut result = BatchBubbleBuilder::default();

        if let Some(early_exit) = builder.early_exit {
            result = result.early_exit(early_exit);
        }
        if let Some(max_passes) = builder.max_passes {
            result = result.max_passes(max_passes);
        }
        if let Some(diag) = builder.return_diagnostics {
            result = result.return_diagnostics(diag);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for indexed (argsort) sorting.
#[derive(Debug, Clone, Copy)]
pub struct Indexed;

impl BubbleAdapter for Indexed {
    type Output = IndexedBubbleBuilder;

    fn convert(builder: BubbleBuilder) -> Self::Output {
        let mut result = IndexedBubbleBuilder::default();

        if let Some(early_exit) = builder.early_exit {
            result = result.early_exit(early_exit);
        }
        if let Some(max_passes) = builder.max_passes {
            result = result.max_passes(max_passes);
        }
        if let Some(diag) = builder.return_diagnostics {
            result = result.return_diagnostics(diag);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
