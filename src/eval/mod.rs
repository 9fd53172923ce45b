//! Stateless evaluation of a page at one scroll/time instant.

/// The evaluator and its output style types.
pub mod evaluator;
