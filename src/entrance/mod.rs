//! One-shot staggered entrances gated on container visibility.

/// Visibility watching, arming, and per-child playback timing.
pub mod choreographer;
