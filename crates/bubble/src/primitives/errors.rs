//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur around the sort
//! engine: builder misconfiguration and invalid unsort inputs. The in-place
//! sort itself is total and has no failure modes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder errors are caught when `build()` is called, not per setter.
//! * **No-std**: All variants are allocation-free and available without `std`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Invalid pass cap, duplicate builder setters.
//! 2. **Unsort validation**: Mismatched lengths, index vectors that are not permutations.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Pass cap must be at least 1 when configured.
    InvalidMaxPasses(usize),

    /// Unsort requires one value per permutation index.
    MismatchedLengths {
        /// Number of values to unsort.
        values_len: usize,
        /// Number of permutation indices.
        indices_len: usize,
    },

    /// Index vector is not a valid permutation of `0..len`.
    InvalidPermutation {
        /// Position of the first out-of-range or repeated index.
        position: usize,
        /// Expected permutation length.
        len: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidMaxPasses(passes) => {
                write!(f, "Invalid max_passes: {passes} (must be at least 1)")
            }
            Self::MismatchedLengths {
                values_len,
                indices_len,
            } => {
                write!(
                    f,
                    "Length mismatch: {values_len} values, {indices_len} permutation indices"
                )
            }
            Self::InvalidPermutation { position, len } => {
                write!(
                    f,
                    "Invalid permutation: index at position {position} is out of range or repeated (len {len})"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
