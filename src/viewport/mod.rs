//! Document geometry and everything derived from the scroll position:
//! normalized progress spans and active-section detection.

/// Region rectangles and viewport-relative queries.
pub mod geometry;
/// Alignment-pair spans and per-region progress trackers.
pub mod progress;
/// Registration-ordered active-section detection.
pub mod sections;
