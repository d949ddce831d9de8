//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core sorting algorithm as pure, reusable pieces.
//! It depends only on the primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single bubble pass over an unsorted prefix.
pub mod pass;
