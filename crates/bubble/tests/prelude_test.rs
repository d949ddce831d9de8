//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the sorting API. The prelude should provide a
//! one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports
//! 3. **Error Handling** - Error types can be matched from the prelude

use bubble::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for basic usage.
#[test]
fn test_prelude_imports() {
    let mut data = vec![3, 1, 2];

    // Verify Bubble (BubbleBuilder), Adapter markers, and report are useable
    let report = Bubble::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut data);

    assert_eq!(data, vec![1, 2, 3], "Basic sort should work with prelude imports");
    assert_eq!(report.len, 3);
}

/// Test adapter types are available.
///
/// Verifies that both adapter markers are exported.
#[test]
fn test_prelude_adapters() {
    let mut data = vec![2, 1];

    // Batch adapter
    let _ = Bubble::new().adapter(Batch).build().unwrap().sort(&mut data);

    // Indexed adapter
    let _: IndexedResult<f64> = Bubble::new()
        .adapter(Indexed)
        .build()
        .unwrap()
        .sort(&[2.0, 1.0]);
}

/// Test complete workflow with prelude.
///
/// Verifies that a fully-configured workflow works with only prelude imports.
#[test]
fn test_prelude_complete_workflow() {
    let mut data = vec![64, 34, 25, 12, 22, 11, 90];

    let report = Bubble::new()
        .early_exit()
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .expect("Complete workflow should build")
        .sort(&mut data);

    assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
    assert!(report.has_diagnostics());
}

/// Test diagnostics types are available.
///
/// Verifies that SortReport and SortDiagnostics are exported and printable.
#[test]
fn test_prelude_report_types() {
    let mut data = vec![2, 1, 3];

    let report: SortReport = Bubble::new()
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .unwrap()
        .sort(&mut data);

    let diag: SortDiagnostics = report.diagnostics.unwrap();
    assert!(diag.comparisons >= diag.swaps);

    // Display impls should render without panicking
    let _ = format!("{report}\n{diag}");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test error types are available.
///
/// Verifies that error handling works with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let err = Bubble::new().max_passes(0).adapter(Batch).build();

    assert_eq!(
        err.unwrap_err(),
        SortError::InvalidMaxPasses(0),
        "max_passes(0) should be rejected at build()"
    );
}

/// Test duplicate parameter detection.
///
/// Verifies that setting a parameter twice is rejected at build().
#[test]
fn test_prelude_duplicate_parameter() {
    let err = Bubble::new()
        .max_passes(1)
        .max_passes(2)
        .adapter(Batch)
        .build();

    assert_eq!(
        err.unwrap_err(),
        SortError::DuplicateParameter {
            parameter: "max_passes"
        }
    );

    let err = Bubble::new().early_exit().early_exit().adapter(Indexed).build();

    assert_eq!(
        err.unwrap_err(),
        SortError::DuplicateParameter {
            parameter: "early_exit"
        }
    );
}
