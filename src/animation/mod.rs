//! Keyframe tables, easing curves, and the style lanes they drive.

/// Style lanes and their composition rules.
pub mod channel;
/// Easing palette, including CSS cubic-bezier curves.
pub mod ease;
/// Piecewise-linear keyframe tables sampled by progress.
pub mod table;
