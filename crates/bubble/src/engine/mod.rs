//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the sort by composing bubble passes into a full
//! run: the pass loop, the optional early exit, the pass cap, and the
//! counters surfaced to callers. It also hosts parameter validation and the
//! public output types.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for bubble sorting.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort operations.
pub mod output;
