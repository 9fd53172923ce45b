use crate::foundation::error::{ScrolyteError, ScrolyteResult};

pub use kurbo::{Point, Rect, Vec2};

/// Normalized scroll progress, always in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(pub f64);

impl Progress {
    /// Progress 0, the start of a span.
    pub const ZERO: Self = Self(0.0);
    /// Progress 1, the end of a span.
    pub const ONE: Self = Self(1.0);

    /// Clamp an arbitrary value into [0, 1]. NaN maps to 0.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The inner value, guaranteed within [0, 1] for clamped constructors.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Visible window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width; must be finite and > 0.
    pub width: f64,
    /// Viewport height; must be finite and > 0.
    pub height: f64,
}

impl Viewport {
    /// A viewport of the given size; rejects non-finite or non-positive
    /// dimensions.
    pub fn new(width: f64, height: f64) -> ScrolyteResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ScrolyteError::validation(
                "Viewport width must be finite and > 0",
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ScrolyteError::validation(
                "Viewport height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// A region's vertical extent relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    /// Offset of the region's top edge from the viewport top.
    pub top: f64,
    /// Offset of the region's bottom edge from the viewport top.
    pub bottom: f64,
}

impl ViewBounds {
    /// Vertical extent; an inverted pair floors at zero.
    pub fn height(self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether a viewport-relative offset falls inside the bounds, both edges included.
    pub fn contains(self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}
