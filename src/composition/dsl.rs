use crate::{
    animation::channel::Channel,
    animation::ease::Ease,
    animation::table::{Keyframe, KeyframeTable},
    composition::model::{
        EntranceChildSpec, EntranceSpec, HiddenStyle, MarqueeSpec, NavSpec, PageComposition,
        ScrollBinding,
    },
    foundation::error::ScrolyteResult,
    viewport::progress::ProgressSpan,
};

/// Fluent builder for [`PageComposition`]. `build` runs full validation.
pub struct PageBuilder {
    sections: Vec<String>,
    bindings: Vec<ScrollBinding>,
    entrances: Vec<EntranceSpec>,
    marquees: Vec<MarqueeSpec>,
    nav: NavSpec,
}

impl PageBuilder {
    /// An empty builder with default navigation tuning.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            bindings: Vec::new(),
            entrances: Vec::new(),
            marquees: Vec::new(),
            nav: NavSpec::default(),
        }
    }

    /// Register a navigable section. Call order fixes the tie-break order.
    pub fn section(mut self, id: impl Into<String>) -> Self {
        self.sections.push(id.into());
        self
    }

    /// Add a scroll-driven keyframe binding.
    pub fn binding(mut self, binding: ScrollBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Add a one-shot staggered entrance group.
    pub fn entrance(mut self, entrance: EntranceSpec) -> Self {
        self.entrances.push(entrance);
        self
    }

    /// Add a looping marquee strip.
    pub fn marquee(mut self, marquee: MarqueeSpec) -> Self {
        self.marquees.push(marquee);
        self
    }

    /// Replace the navigation chrome tuning.
    pub fn nav(mut self, nav: NavSpec) -> Self {
        self.nav = nav;
        self
    }

    /// Assemble and validate the composition.
    pub fn build(self) -> ScrolyteResult<PageComposition> {
        let page = PageComposition {
            sections: self.sections,
            bindings: self.bindings,
            entrances: self.entrances,
            marquees: self.marquees,
            nav: self.nav,
        };
        page.validate()?;
        Ok(page)
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent builder for one [`ScrollBinding`].
pub struct BindingBuilder {
    element: String,
    region: String,
    span: ProgressSpan,
    rows: Vec<Keyframe>,
    channels: Vec<Channel>,
}

impl BindingBuilder {
    /// Builder binding `element` to `region`'s progress over the default
    /// full-traversal span.
    pub fn new(element: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            region: region.into(),
            span: ProgressSpan::default(),
            rows: Vec::new(),
            channels: Vec::new(),
        }
    }

    /// Replace the alignment span progress is measured over.
    pub fn span(mut self, span: ProgressSpan) -> Self {
        self.span = span;
        self
    }

    /// Append a keyframe row. Rows must be added in increasing progress
    /// order; `build` rejects anything else.
    pub fn row(mut self, progress: f64, outputs: impl Into<Vec<f64>>) -> Self {
        self.rows.push(Keyframe {
            progress,
            outputs: outputs.into(),
        });
        self
    }

    /// Set the style lanes the table columns feed, in column order.
    pub fn channels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.channels = channels.into_iter().collect();
        self
    }

    /// Assemble and validate the binding.
    pub fn build(self) -> ScrolyteResult<ScrollBinding> {
        let binding = ScrollBinding {
            element: self.element,
            region: self.region,
            span: self.span,
            table: KeyframeTable::new(self.rows),
            channels: self.channels,
        };
        binding.validate()?;
        Ok(binding)
    }
}

/// Fluent builder for one [`EntranceSpec`], starting from the standard
/// timing profile.
pub struct EntranceBuilder {
    spec: EntranceSpec,
}

impl EntranceBuilder {
    pub fn new(id: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            spec: EntranceSpec::new(id, container),
        }
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.spec.amount = amount;
        self
    }

    pub fn base_delay_sec(mut self, delay: f64) -> Self {
        self.spec.base_delay_sec = delay;
        self
    }

    pub fn stagger_sec(mut self, stagger: f64) -> Self {
        self.spec.stagger_sec = stagger;
        self
    }

    pub fn item_duration_sec(mut self, duration: f64) -> Self {
        self.spec.item_duration_sec = duration;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.spec.ease = ease;
        self
    }

    pub fn child(mut self, child: EntranceChildSpec) -> Self {
        self.spec.children.push(child);
        self
    }

    pub fn build(self) -> ScrolyteResult<EntranceSpec> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

/// Hidden state that fades in while rising `rise` pixels.
pub fn fade_up(rise: f64) -> HiddenStyle {
    HiddenStyle {
        translate_y: rise,
        ..HiddenStyle::default()
    }
}

/// Entrance child with no overrides.
pub fn entrance_child(element: impl Into<String>, hidden: HiddenStyle) -> EntranceChildSpec {
    EntranceChildSpec {
        element: element.into(),
        hidden,
        extra_delay_sec: 0.0,
        duration_sec: None,
        ease: None,
    }
}

/// Marquee with the standard 60 second loop.
pub fn marquee(id: impl Into<String>, element: impl Into<String>) -> MarqueeSpec {
    MarqueeSpec {
        id: id.into(),
        element: element.into(),
        duration_sec: 60.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
