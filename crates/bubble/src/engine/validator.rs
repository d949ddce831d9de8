//! Input validation for sort configuration and unsort data.
//!
//! ## Purpose
//!
//! This module provides validation functions for builder configuration and
//! for the inputs of the unsort operation. The in-place sort itself is total
//! and needs no data validation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like `max_passes >= 1`.
//! * **Permutation Checks**: Ensures unsort index vectors are permutations.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::permutation::check_permutation;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort configuration and unsort inputs.
///
/// Provides static methods that return `Result<(), SortError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the pass cap.
    ///
    /// A cap of 0 would make the sort a silent no-op, so it is rejected.
    pub fn validate_max_passes(max_passes: Option<usize>) -> Result<(), SortError> {
        if max_passes == Some(0) {
            return Err(SortError::InvalidMaxPasses(0));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(param) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Unsort Validation
    // ========================================================================

    /// Validate inputs for the unsort operation.
    pub fn validate_unsort_inputs(
        values_len: usize,
        indices: &[usize],
    ) -> Result<(), SortError> {
        // Check 1: Matching lengths
        if values_len != indices.len() {
            return Err(SortError::MismatchedLengths {
                values_len,
                indices_len: indices.len(),
            });
        }

        // Check 2: Index vector is a permutation of 0..n
        if let Some(position) = check_permutation(indices) {
            return Err(SortError::InvalidPermutation {
                position,
                len: indices.len(),
            });
        }

        Ok(())
    }
}
