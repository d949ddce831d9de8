//! # bubble — In-Place Stable Bubble Sort for Rust
//!
//! A small, deliberate implementation of the canonical bubble sort: an
//! in-place, stable, O(n²) comparison sort over a caller-owned mutable
//! sequence, with a batch (in-place) adapter and an indexed (argsort)
//! adapter for floating-point keys.
//!
//! ## What is bubble sort?
//!
//! Bubble sort repeatedly steps through a sequence, compares adjacent
//! elements, and swaps them if out of order, causing larger elements to
//! "bubble" toward the end over successive passes. After pass i the largest
//! remaining unsorted element is guaranteed to occupy position n-i-1, so the
//! comparison window shrinks by one each pass. Equal elements are never
//! swapped, which makes the sort stable.
//!
//! By default every pass runs to completion (Θ(n²) comparisons even on
//! sorted input), matching the canonical algorithm; an opt-in early exit
//! stops after the first zero-swap pass for O(n) best-case behavior.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use bubble::prelude::*;
//!
//! let mut data = vec![64, 34, 25, 12, 22, 11, 90];
//!
//! // Build the sorter
//! let sorter = Bubble::new().adapter(Batch).build()?;
//!
//! // Sort in place
//! let report = sorter.sort(&mut data);
//!
//! assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(report.passes, 7);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use bubble::prelude::*;
//!
//! let mut data = vec![5, 4, 3, 2, 1];
//!
//! // Build sorter with all features enabled
//! let sorter = Bubble::new()
//!     .early_exit()           // Stop after the first zero-swap pass
//!     .return_diagnostics()   // Comparison/swap counters
//!     .adapter(Batch)         // In-place adapter
//!     .build()?;
//!
//! let report = sorter.sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//!
//! let diag = report.diagnostics.expect("diagnostics were requested");
//! assert_eq!(diag.swaps, 10); // Every pair was inverted
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Indexed (argsort) Sorting
//!
//! The indexed adapter sorts floating-point keys without touching the input
//! and returns the permutation that sorts them. Equal keys keep their input
//! order, and `NaN` keys sort last:
//!
//! ```rust
//! use bubble::prelude::*;
//!
//! let keys = [3.0, 1.0, 2.0];
//!
//! let result = Bubble::new().adapter(Indexed).build()?.sort(&keys);
//!
//! assert_eq!(result.keys, vec![1.0, 2.0, 3.0]);
//! assert_eq!(result.indices, vec![1, 2, 0]);
//!
//! // Map sorted-order values back to the original order
//! let restored = result.unsort(&result.keys)?;
//! assert_eq!(restored, keys.to_vec());
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Sorting itself is total: `sort` has no failure modes, and empty or
//! singleton inputs are valid no-ops. Fallible operations (building a
//! misconfigured sorter, unsorting mismatched inputs) return
//! `Result<_, SortError>`, and the `?` operator is idiomatic:
//!
//! ```rust
//! use bubble::prelude::*;
//!
//! // max_passes(0) would make the sort a silent no-op
//! let err = Bubble::new().max_passes(0).adapter(Batch).build();
//! assert!(err.is_err());
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! bubble = { version = "0.1", default-features = false }
//! ```
//!
//! The batch adapter performs no allocation at all; the indexed adapter and
//! unsort utilities use `alloc`.
//!
//! ## References
//!
//! - Knuth, D. E. *The Art of Computer Programming*, Vol. 3, §5.2.2
//!   (sorting by exchanging).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, key ordering, permutation utilities.
mod primitives;

// Layer 2: Algorithms - the bubble pass.
mod algorithms;

// Layer 3: Engine - orchestration, validation, and output types.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for bubble sorting.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Indexed},
        BubbleBuilder as Bubble, IndexedResult, SortDiagnostics, SortError, SortReport,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
