/// Style lane a keyframe table column feeds.
///
/// Translation and rotation contributions compose additively, scale and
/// opacity multiplicatively, so independent bindings can target the same
/// element without clobbering each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    /// Horizontal translation in pixels; composes additively.
    TranslateX,
    /// Vertical translation in pixels; composes additively.
    TranslateY,
    /// Uniform scale factor; composes multiplicatively.
    Scale,
    /// Rotation in degrees; composes additively.
    Rotate,
    /// Opacity factor; composes multiplicatively.
    Opacity,
}

impl Channel {
    /// Value that leaves an element untouched on this lane.
    pub fn identity(self) -> f64 {
        match self {
            Self::TranslateX | Self::TranslateY | Self::Rotate => 0.0,
            Self::Scale | Self::Opacity => 1.0,
        }
    }

    /// Whether the lane moves the element. Reduced motion collapses motion
    /// lanes to their identity and leaves opacity untouched.
    pub fn is_motion(self) -> bool {
        !matches!(self, Self::Opacity)
    }
}
