//! The page data model and its fluent builders.

/// Builder DSL for assembling compositions in code.
pub mod dsl;
/// Serde-facing page model and validation.
pub mod model;
