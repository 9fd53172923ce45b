/// Resolved motion preference for a page.
///
/// Resolution fails open: motion stays enabled unless the platform
/// affirmatively reports a reduced-motion request, so an unavailable or
/// erroring media query never strips animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MotionPreference {
    /// Animate freely; nothing is collapsed.
    #[default]
    Full,
    /// Collapse movement everywhere while keeping fades.
    Reduced,
}

impl MotionPreference {
    /// Resolve from a platform signal. `None` means the signal could not be
    /// read and resolves to [`MotionPreference::Full`].
    pub fn resolve(platform_reduced: Option<bool>) -> Self {
        match platform_reduced {
            Some(true) => Self::Reduced,
            Some(false) | None => Self::Full,
        }
    }

    /// Whether the preference is [`MotionPreference::Reduced`].
    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }

    /// Programmatic scrolling style implied by the preference.
    pub fn scroll_behavior(self) -> ScrollBehavior {
        match self {
            Self::Full => ScrollBehavior::Smooth,
            Self::Reduced => ScrollBehavior::Instant,
        }
    }
}

/// How programmatic scrolls (anchor navigation, back-to-top) should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScrollBehavior {
    /// Animate the scroll to its target.
    Smooth,
    /// Jump to the target without animating.
    Instant,
}
