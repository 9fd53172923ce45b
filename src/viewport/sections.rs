use crate::viewport::geometry::DocumentLayout;

/// Ordered section ids. Registration order doubles as the tie-break order
/// when several sections straddle the reading line at once.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    ids: Vec<String>,
}

impl SectionRegistry {
    /// Registry over `ids`, preserving iteration order.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no sections are registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }
}

/// Result of a scan that moved the highlight to a different section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionChange {
    /// Section that held the highlight before, if any.
    pub previous: Option<String>,
    /// Section that holds the highlight now.
    pub current: String,
}

/// Decides which registered section currently owns the page highlight.
///
/// A section is a candidate while its on-screen extent straddles the reading
/// line, a fixed offset below the viewport top. The detector starts empty and
/// stays empty until the first scan that finds a candidate.
#[derive(Clone, Debug)]
pub struct ActiveSectionDetector {
    registry: SectionRegistry,
    threshold: f64,
    active: Option<String>,
}

impl ActiveSectionDetector {
    /// Detector over `registry` with the reading line `threshold` pixels
    /// below the viewport top.
    pub fn new(registry: SectionRegistry, threshold: f64) -> Self {
        Self {
            registry,
            threshold,
            active: None,
        }
    }

    /// Section currently holding the highlight, if any scan found one.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Reading-line offset below the viewport top, in pixels.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scan for the section straddling the reading line and adopt it.
    ///
    /// Returns the change when the highlight moved, `None` otherwise. With no
    /// candidate (a gap between sections, everything scrolled past) the
    /// previous answer is retained so the highlight never goes blank
    /// mid-page. Sections missing from the layout are skipped.
    pub fn scan(&mut self, layout: &DocumentLayout, scroll_y: f64) -> Option<SectionChange> {
        // Linear scan in registration order; first hit wins overlaps.
        let mut hit = None;
        for id in self.registry.ids() {
            let Some(bounds) = layout.view_bounds(id, scroll_y) else {
                continue;
            };
            if bounds.contains(self.threshold) {
                hit = Some(id.clone());
                break;
            }
        }

        let hit = hit?;
        if self.active.as_deref() == Some(hit.as_str()) {
            return None;
        }
        let previous = self.active.replace(hit.clone());
        Some(SectionChange {
            previous,
            current: hit,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/sections.rs"]
mod tests;
