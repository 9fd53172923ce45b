//! Motion preference resolution.

/// Reduced-motion policy and its derived hints.
pub mod policy;
