use std::collections::BTreeMap;

use crate::foundation::core::{Rect, ViewBounds, Viewport};

/// Document-space rectangles for every region the page tracks.
///
/// The host measures its DOM (or equivalent) and pushes a fresh layout on
/// mount and on resize; the engine never measures anything itself. Rectangles
/// use document coordinates: y grows downward and is unaffected by scrolling.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DocumentLayout {
    /// Document-space rectangle per region id.
    pub rects: BTreeMap<String, Rect>,
}

impl DocumentLayout {
    /// An empty layout with no regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document-space rectangle for `id`, if measured.
    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// The region's vertical extent relative to the viewport top at the given
    /// scroll offset, or `None` if the region is not in the layout.
    pub fn view_bounds(&self, id: &str, scroll_y: f64) -> Option<ViewBounds> {
        let rect = self.rect(id)?;
        Some(ViewBounds {
            top: rect.y0 - scroll_y,
            bottom: rect.y1 - scroll_y,
        })
    }

    /// Fraction of the region currently inside the viewport, in [0, 1].
    ///
    /// A zero-height region counts as fully visible while its position is
    /// inside the viewport and invisible otherwise.
    pub fn intersection_ratio(&self, id: &str, viewport: Viewport, scroll_y: f64) -> Option<f64> {
        let bounds = self.view_bounds(id, scroll_y)?;
        let height = bounds.height();
        if height <= 0.0 {
            let inside = bounds.top >= 0.0 && bounds.top <= viewport.height;
            return Some(if inside { 1.0 } else { 0.0 });
        }
        let visible = (bounds.bottom.min(viewport.height) - bounds.top.max(0.0)).max(0.0);
        Some(visible / height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/geometry.rs"]
mod tests;
