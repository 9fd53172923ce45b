//! Shared vocabulary types and the crate-wide error taxonomy.

/// Geometry and progress primitives.
pub mod core;
/// Error and result types.
pub mod error;
