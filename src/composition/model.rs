use crate::{
    animation::channel::Channel,
    animation::ease::Ease,
    animation::table::KeyframeTable,
    foundation::error::{ScrolyteError, ScrolyteResult},
    viewport::progress::ProgressSpan,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete scroll-driven page description.
///
/// A page composition is a pure data model that can be:
/// - built programmatically (see [`crate::PageBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Driving a composition at runtime is the job of [`crate::PageSession`];
/// stateless evaluation of a single instant is [`crate::Evaluator`].
pub struct PageComposition {
    /// Navigable section ids in document order. Order decides which section
    /// wins when several straddle the reading line at once.
    #[serde(default)]
    pub sections: Vec<String>,
    /// Scroll-driven keyframe bindings.
    #[serde(default)]
    pub bindings: Vec<ScrollBinding>,
    /// One-shot staggered entrance groups.
    #[serde(default)]
    pub entrances: Vec<EntranceSpec>,
    /// Continuously looping marquee strips.
    #[serde(default)]
    pub marquees: Vec<MarqueeSpec>,
    /// Navigation chrome tuning.
    #[serde(default)]
    pub nav: NavSpec,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Binds one element's style lanes to a region's scroll progress.
pub struct ScrollBinding {
    /// Element receiving the sampled values.
    pub element: String,
    /// Layout region whose traversal drives progress. Any measured region id
    /// works here, not only section ids.
    pub region: String,
    /// Alignment pair mapping scroll offsets to progress 0 and 1.
    #[serde(default)]
    pub span: ProgressSpan,
    /// Keyframe rows sampled by progress, one output lane per channel.
    pub table: KeyframeTable,
    /// Style lanes the table columns feed, in column order.
    pub channels: Vec<Channel>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A group of elements revealed once, in a stagger, when its container
/// becomes sufficiently visible.
pub struct EntranceSpec {
    /// Group id, unique within the composition.
    pub id: String,
    /// Region watched for visibility.
    pub container: String,
    /// Fraction of the container that must be visible to arm the group,
    /// in (0, 1].
    #[serde(default = "default_amount")]
    pub amount: f64,
    /// Delay before the first child starts, in seconds.
    #[serde(default)]
    pub base_delay_sec: f64,
    /// Extra delay added per child position, in seconds.
    #[serde(default = "default_stagger_sec")]
    pub stagger_sec: f64,
    /// Play duration of each child, in seconds.
    #[serde(default = "default_item_duration_sec")]
    pub item_duration_sec: f64,
    /// Easing applied to each child's playback.
    #[serde(default = "default_entrance_ease")]
    pub ease: Ease,
    /// Children in reveal order.
    pub children: Vec<EntranceChildSpec>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One element inside an entrance group.
pub struct EntranceChildSpec {
    /// Element revealed by this slot.
    pub element: String,
    /// Style the element holds before its slot plays.
    #[serde(default)]
    pub hidden: HiddenStyle,
    /// Additional delay on top of the stagger position, in seconds.
    #[serde(default)]
    pub extra_delay_sec: f64,
    /// Per-child duration override, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,
    /// Per-child easing override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Style deltas an element holds while hidden; playback interpolates each
/// back to its identity.
pub struct HiddenStyle {
    /// Starting opacity factor in [0, 1].
    #[serde(default)]
    pub opacity: f64,
    /// Starting horizontal offset.
    #[serde(default)]
    pub translate_x: f64,
    /// Starting vertical offset. Positive sits below the rest position.
    #[serde(default)]
    pub translate_y: f64,
    /// Starting scale factor.
    #[serde(default = "default_hidden_scale")]
    pub scale: f64,
    /// Starting rotation in degrees.
    #[serde(default)]
    pub rotate_deg: f64,
}

impl Default for HiddenStyle {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate_deg: 0.0,
        }
    }
}

impl HiddenStyle {
    /// The same hidden state with every motion delta collapsed to identity,
    /// keeping only the opacity fade. Used under reduced motion.
    pub fn without_motion(self) -> Self {
        Self {
            opacity: self.opacity,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A strip that loops horizontally from 0% to -100% of one copy's width.
pub struct MarqueeSpec {
    /// Marquee id, unique within the composition.
    pub id: String,
    /// Element carrying the duplicated strip content.
    pub element: String,
    /// Seconds per full loop.
    #[serde(default = "default_marquee_duration_sec")]
    pub duration_sec: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Navigation chrome tuning shared by the whole page.
pub struct NavSpec {
    /// Reading-line offset below the viewport top used for active-section
    /// detection, in pixels.
    #[serde(default = "default_section_threshold")]
    pub section_threshold: f64,
    /// Gap left above a section when scrolling to it, so fixed chrome does
    /// not cover its heading, in pixels.
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: f64,
    /// Scroll offset past which the chrome switches to its condensed
    /// treatment, in pixels.
    #[serde(default = "default_condensed_after")]
    pub condensed_after: f64,
}

impl Default for NavSpec {
    fn default() -> Self {
        Self {
            section_threshold: default_section_threshold(),
            anchor_offset: default_anchor_offset(),
            condensed_after: default_condensed_after(),
        }
    }
}

fn default_amount() -> f64 {
    0.2
}

fn default_stagger_sec() -> f64 {
    0.15
}

fn default_item_duration_sec() -> f64 {
    0.8
}

fn default_entrance_ease() -> Ease {
    Ease::CubicBezier {
        x1: 0.25,
        y1: 0.4,
        x2: 0.25,
        y2: 1.0,
    }
}

fn default_hidden_scale() -> f64 {
    1.0
}

fn default_marquee_duration_sec() -> f64 {
    60.0
}

fn default_section_threshold() -> f64 {
    100.0
}

fn default_anchor_offset() -> f64 {
    80.0
}

fn default_condensed_after() -> f64 {
    50.0
}

impl PageComposition {
    pub fn validate(&self) -> ScrolyteResult<()> {
        for (i, section) in self.sections.iter().enumerate() {
            validate_name(section, "section id")?;
            if self.sections[..i].contains(section) {
                return Err(ScrolyteError::validation(format!(
                    "duplicate section id '{section}'"
                )));
            }
        }

        let mut driven: Vec<(&str, Channel)> = Vec::new();
        for binding in &self.bindings {
            binding.validate()?;
            for channel in &binding.channels {
                let lane = (binding.element.as_str(), *channel);
                if driven.contains(&lane) {
                    return Err(ScrolyteError::validation(format!(
                        "channel {channel:?} on element '{}' is driven by more than one binding",
                        binding.element
                    )));
                }
                driven.push(lane);
            }
        }

        for (i, entrance) in self.entrances.iter().enumerate() {
            entrance.validate()?;
            if self.entrances[..i].iter().any(|e| e.id == entrance.id) {
                return Err(ScrolyteError::validation(format!(
                    "duplicate entrance id '{}'",
                    entrance.id
                )));
            }
        }

        for (i, marquee) in self.marquees.iter().enumerate() {
            marquee.validate()?;
            if self.marquees[..i].iter().any(|m| m.id == marquee.id) {
                return Err(ScrolyteError::validation(format!(
                    "duplicate marquee id '{}'",
                    marquee.id
                )));
            }
        }

        self.nav.validate()
    }
}

impl ScrollBinding {
    pub fn validate(&self) -> ScrolyteResult<()> {
        validate_name(&self.element, "binding element")?;
        validate_name(&self.region, "binding region")?;
        self.table.validate()?;
        if self.channels.is_empty() {
            return Err(ScrolyteError::validation(format!(
                "binding '{}' must drive at least one channel",
                self.element
            )));
        }
        if self.channels.len() != self.table.arity() {
            return Err(ScrolyteError::validation(format!(
                "binding '{}' has {} channels but table rows carry {} outputs",
                self.element,
                self.channels.len(),
                self.table.arity()
            )));
        }
        for (i, channel) in self.channels.iter().enumerate() {
            if self.channels[..i].contains(channel) {
                return Err(ScrolyteError::validation(format!(
                    "binding '{}' lists channel {channel:?} twice",
                    self.element
                )));
            }
        }
        Ok(())
    }
}

impl EntranceSpec {
    /// A group with the standard timing profile and no children yet.
    pub fn new(id: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            container: container.into(),
            amount: default_amount(),
            base_delay_sec: 0.0,
            stagger_sec: default_stagger_sec(),
            item_duration_sec: default_item_duration_sec(),
            ease: default_entrance_ease(),
            children: Vec::new(),
        }
    }

    pub fn validate(&self) -> ScrolyteResult<()> {
        validate_name(&self.id, "entrance id")?;
        validate_name(&self.container, "entrance container")?;
        if !self.amount.is_finite() || self.amount <= 0.0 || self.amount > 1.0 {
            return Err(ScrolyteError::validation(format!(
                "entrance '{}' amount must be within (0, 1]",
                self.id
            )));
        }
        if !self.base_delay_sec.is_finite() || self.base_delay_sec < 0.0 {
            return Err(ScrolyteError::validation(format!(
                "entrance '{}' base_delay_sec must be finite and >= 0",
                self.id
            )));
        }
        if !self.stagger_sec.is_finite() || self.stagger_sec < 0.0 {
            return Err(ScrolyteError::validation(format!(
                "entrance '{}' stagger_sec must be finite and >= 0",
                self.id
            )));
        }
        if !self.item_duration_sec.is_finite() || self.item_duration_sec <= 0.0 {
            return Err(ScrolyteError::validation(format!(
                "entrance '{}' item_duration_sec must be finite and > 0",
                self.id
            )));
        }
        validate_ease(&self.ease, "entrance")?;
        if self.children.is_empty() {
            return Err(ScrolyteError::validation(format!(
                "entrance '{}' must have at least one child",
                self.id
            )));
        }
        for (i, child) in self.children.iter().enumerate() {
            validate_name(&child.element, "entrance child element")?;
            if self.children[..i].iter().any(|c| c.element == child.element) {
                return Err(ScrolyteError::validation(format!(
                    "entrance '{}' lists element '{}' twice",
                    self.id, child.element
                )));
            }
            if !child.extra_delay_sec.is_finite() || child.extra_delay_sec < 0.0 {
                return Err(ScrolyteError::validation(format!(
                    "entrance child '{}' extra_delay_sec must be finite and >= 0",
                    child.element
                )));
            }
            if let Some(duration) = child.duration_sec
                && (!duration.is_finite() || duration <= 0.0)
            {
                return Err(ScrolyteError::validation(format!(
                    "entrance child '{}' duration_sec must be finite and > 0 when set",
                    child.element
                )));
            }
            if let Some(ease) = &child.ease {
                validate_ease(ease, "entrance child")?;
            }
            child.hidden.validate(&child.element)?;
        }
        Ok(())
    }
}

impl HiddenStyle {
    fn validate(&self, element: &str) -> ScrolyteResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ScrolyteError::validation(format!(
                "hidden opacity for '{element}' must be within [0, 1]"
            )));
        }
        for (name, value) in [
            ("translate_x", self.translate_x),
            ("translate_y", self.translate_y),
            ("rotate_deg", self.rotate_deg),
        ] {
            if !value.is_finite() {
                return Err(ScrolyteError::validation(format!(
                    "hidden {name} for '{element}' must be finite"
                )));
            }
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ScrolyteError::validation(format!(
                "hidden scale for '{element}' must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

impl MarqueeSpec {
    pub fn validate(&self) -> ScrolyteResult<()> {
        validate_name(&self.id, "marquee id")?;
        validate_name(&self.element, "marquee element")?;
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Err(ScrolyteError::validation(format!(
                "marquee '{}' duration_sec must be finite and > 0",
                self.id
            )));
        }
        Ok(())
    }
}

impl NavSpec {
    pub fn validate(&self) -> ScrolyteResult<()> {
        if !self.section_threshold.is_finite() {
            return Err(ScrolyteError::validation(
                "nav section_threshold must be finite",
            ));
        }
        if !self.anchor_offset.is_finite() {
            return Err(ScrolyteError::validation("nav anchor_offset must be finite"));
        }
        if !self.condensed_after.is_finite() || self.condensed_after < 0.0 {
            return Err(ScrolyteError::validation(
                "nav condensed_after must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

fn validate_name(value: &str, what: &str) -> ScrolyteResult<()> {
    if value.trim().is_empty() {
        return Err(ScrolyteError::validation(format!("{what} must be non-empty")));
    }
    Ok(())
}

fn validate_ease(ease: &Ease, what: &str) -> ScrolyteResult<()> {
    if let Ease::CubicBezier { x1, y1, x2, y2 } = *ease {
        for (name, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
            if !value.is_finite() {
                return Err(ScrolyteError::validation(format!(
                    "{what} cubic bezier {name} must be finite"
                )));
            }
        }
        // x control points outside [0, 1] would make the curve multi-valued.
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(ScrolyteError::validation(format!(
                "{what} cubic bezier x1/x2 must be within [0, 1]"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
