use crate::foundation::core::{Progress, Rect, Viewport};
use crate::viewport::geometry::DocumentLayout;

/// Edge of a region or of the viewport along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Edge {
    /// Top edge (smaller scroll-axis coordinate).
    Start,
    /// Bottom edge (larger scroll-axis coordinate).
    End,
}

/// One alignment instant: the scroll offset where a region edge meets a
/// viewport edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Alignment {
    /// Region edge that meets the viewport edge.
    pub region: Edge,
    /// Viewport edge the region edge meets.
    pub viewport: Edge,
}

impl Alignment {
    /// Alignment of `region` edge against `viewport` edge.
    pub fn new(region: Edge, viewport: Edge) -> Self {
        Self { region, viewport }
    }

    /// Scroll offset at which this alignment holds for `rect`.
    fn scroll_offset(self, rect: Rect, viewport: Viewport) -> f64 {
        let region_y = match self.region {
            Edge::Start => rect.y0,
            Edge::End => rect.y1,
        };
        let viewport_y = match self.viewport {
            Edge::Start => 0.0,
            Edge::End => viewport.height,
        };
        region_y - viewport_y
    }
}

/// Maps raw scroll offsets to normalized progress for one region.
///
/// `from` is the alignment where progress is 0, `to` where it is 1; scroll
/// positions outside the pair clamp. The default span runs from "region top
/// meets viewport bottom" to "region bottom meets viewport top", covering the
/// region's full traversal across the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressSpan {
    /// Alignment where progress is 0.
    pub from: Alignment,
    /// Alignment where progress is 1.
    pub to: Alignment,
}

impl Default for ProgressSpan {
    fn default() -> Self {
        Self::full_traversal()
    }
}

impl ProgressSpan {
    /// Span running from the `from` alignment (progress 0) to the `to`
    /// alignment (progress 1).
    pub fn new(from: Alignment, to: Alignment) -> Self {
        Self { from, to }
    }

    /// Span over the region's whole journey across the viewport: 0 as its top
    /// edge enters from below, 1 as its bottom edge leaves above.
    pub fn full_traversal() -> Self {
        Self {
            from: Alignment::new(Edge::Start, Edge::End),
            to: Alignment::new(Edge::End, Edge::Start),
        }
    }

    /// Span for a region that starts pinned at the viewport top (a hero
    /// block): 0 while its top is still at the viewport top, 1 once its
    /// bottom has scrolled up past the viewport top.
    pub fn scroll_out() -> Self {
        Self {
            from: Alignment::new(Edge::Start, Edge::Start),
            to: Alignment::new(Edge::End, Edge::Start),
        }
    }

    /// Scroll offsets at which `from` and `to` hold.
    pub fn offsets(self, rect: Rect, viewport: Viewport) -> (f64, f64) {
        (
            self.from.scroll_offset(rect, viewport),
            self.to.scroll_offset(rect, viewport),
        )
    }

    /// Normalized progress of `scroll_y` within the span, clamped to [0, 1].
    ///
    /// A degenerate span (both alignments at the same offset) acts as a step
    /// function: 0 strictly before the offset, 1 at or past it.
    pub fn progress(self, rect: Rect, viewport: Viewport, scroll_y: f64) -> Progress {
        let (p0, p1) = self.offsets(rect, viewport);
        let span = p1 - p0;
        if span.abs() <= f64::EPSILON {
            return if scroll_y >= p0 {
                Progress::ONE
            } else {
                Progress::ZERO
            };
        }
        Progress::clamped((scroll_y - p0) / span)
    }
}

/// Continuously resampled progress for one region.
///
/// Keeps the last computed value so a region that briefly disappears from the
/// layout (detached node, mid-resize remeasure) holds steady instead of
/// snapping to zero.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    region: String,
    span: ProgressSpan,
    last: Progress,
}

impl ProgressTracker {
    /// Tracker for `region` over `span`, starting at progress zero.
    pub fn new(region: impl Into<String>, span: ProgressSpan) -> Self {
        Self {
            region: region.into(),
            span,
            last: Progress::ZERO,
        }
    }

    /// Id of the region being tracked.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The alignment span progress is measured over.
    pub fn span(&self) -> ProgressSpan {
        self.span
    }

    /// Most recent sample; zero before the first one.
    pub fn last(&self) -> Progress {
        self.last
    }

    /// Resample against current geometry. A region missing from the layout
    /// leaves the previous value in place.
    pub fn sample(
        &mut self,
        layout: &DocumentLayout,
        viewport: Viewport,
        scroll_y: f64,
    ) -> Progress {
        if let Some(rect) = layout.rect(&self.region) {
            self.last = self.span.progress(rect, viewport, scroll_y);
        }
        self.last
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/progress.rs"]
mod tests;
