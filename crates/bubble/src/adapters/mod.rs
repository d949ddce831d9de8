//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes and use cases:
//!
//! - **Batch**: In-place sorting of a caller-owned mutable slice
//! - **Indexed**: Argsort of floating-point keys with an original-index mapping
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-place batch sorting.
pub mod batch;

/// Indexed (argsort) sorting for floating-point keys.
pub mod indexed;
