use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::{
    animation::channel::Channel,
    composition::model::{HiddenStyle, PageComposition},
    entrance::choreographer::EntranceChoreographer,
    foundation::core::{Vec2, Viewport},
    foundation::error::ScrolyteResult,
    marquee::LoopMarquee,
    motion::policy::MotionPreference,
    viewport::geometry::DocumentLayout,
};

#[derive(Clone, Debug, serde::Serialize)]
/// Fully evaluated page styles for one instant.
pub struct EvaluatedPage {
    /// Scroll offset the page was evaluated at.
    pub scroll_y: f64,
    /// Per-element styles, ordered by first appearance in the composition
    /// (bindings, then entrance children, then marquee strips).
    pub styles: Vec<ElementStyle>,
}

impl EvaluatedPage {
    /// Style for one element, if anything in the composition targets it.
    pub fn style(&self, element: &str) -> Option<&ElementStyle> {
        self.styles.iter().find(|s| s.element == element)
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Resolved style for one element.
///
/// Every element starts from its rest style (zero offset, scale 1, rotation
/// 0, opacity 1). Translation and rotation contributions compose additively,
/// scale and opacity multiplicatively.
pub struct ElementStyle {
    /// Target element id.
    pub element: String,
    /// Offset from the rest position. Pixels, except marquee strips where x
    /// is percent of one strip copy's width.
    pub translate: Vec2,
    /// Scale factor around the element's own origin.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
    /// Opacity in [0, 1].
    pub opacity: f64,
}

impl ElementStyle {
    fn rest(element: &str) -> Self {
        Self {
            element: element.to_string(),
            translate: Vec2::ZERO,
            scale: 1.0,
            rotate_deg: 0.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Immutable inputs for one evaluation instant.
pub struct EvalCtx<'a> {
    /// Current document geometry.
    pub layout: &'a DocumentLayout,
    /// Current viewport size.
    pub viewport: Viewport,
    /// Current scroll offset.
    pub scroll_y: f64,
    /// Evaluation timestamp in seconds.
    pub now_sec: f64,
    /// Motion preference read at this instant.
    pub preference: MotionPreference,
    /// Entrance runtime state, in composition order.
    pub entrances: &'a [EntranceChoreographer],
    /// Marquee runtime state, in composition order.
    pub marquees: &'a [LoopMarquee],
}

/// Stateless evaluator from page composition to element styles.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp, ctx))]
    /// Evaluate every element style for one instant, validating the
    /// composition first.
    pub fn eval_page(comp: &PageComposition, ctx: EvalCtx<'_>) -> ScrolyteResult<EvaluatedPage> {
        Self::eval_page_impl(comp, ctx, true)
    }

    pub(crate) fn eval_page_unchecked(
        comp: &PageComposition,
        ctx: EvalCtx<'_>,
    ) -> ScrolyteResult<EvaluatedPage> {
        Self::eval_page_impl(comp, ctx, false)
    }

    fn eval_page_impl(
        comp: &PageComposition,
        ctx: EvalCtx<'_>,
        validate_comp: bool,
    ) -> ScrolyteResult<EvaluatedPage> {
        if validate_comp {
            comp.validate()?;
        }

        let mut styles: Vec<ElementStyle> = Vec::new();
        let mut index: BTreeMap<String, usize> = BTreeMap::new();
        let mut buf: SmallVec<[f64; 4]> = SmallVec::new();

        for binding in &comp.bindings {
            // A region missing from the layout contributes nothing this
            // instant; session trackers are what carry last-known values
            // across such gaps.
            let Some(rect) = ctx.layout.rect(&binding.region) else {
                continue;
            };
            let progress = binding.span.progress(rect, ctx.viewport, ctx.scroll_y);
            binding.table.interpolate_into(progress.value(), &mut buf);
            let slot = style_slot(&mut styles, &mut index, &binding.element);
            for (channel, value) in binding.channels.iter().zip(&buf) {
                apply_channel(&mut styles[slot], *channel, *value, ctx.preference);
            }
        }

        for chor in ctx.entrances {
            match chor.plan() {
                Some(plan) => {
                    for slot_spec in &plan.slots {
                        let t =
                            slot_spec.progress_at(plan.armed_at_sec, ctx.now_sec, ctx.preference);
                        let slot = style_slot(&mut styles, &mut index, &slot_spec.element);
                        apply_entrance(&mut styles[slot], slot_spec.hidden, t, ctx.preference);
                    }
                }
                None => {
                    // Unarmed group: children hold their hidden style.
                    for child in &chor.spec().children {
                        let slot = style_slot(&mut styles, &mut index, &child.element);
                        apply_entrance(&mut styles[slot], child.hidden, 0.0, ctx.preference);
                    }
                }
            }
        }

        for m in ctx.marquees {
            let slot = style_slot(&mut styles, &mut index, m.element());
            styles[slot].translate.x += m.offset_pct(ctx.now_sec, ctx.preference);
        }

        Ok(EvaluatedPage {
            scroll_y: ctx.scroll_y,
            styles,
        })
    }
}

fn style_slot(
    styles: &mut Vec<ElementStyle>,
    index: &mut BTreeMap<String, usize>,
    element: &str,
) -> usize {
    if let Some(&i) = index.get(element) {
        return i;
    }
    styles.push(ElementStyle::rest(element));
    let i = styles.len() - 1;
    index.insert(element.to_string(), i);
    i
}

fn apply_channel(
    style: &mut ElementStyle,
    channel: Channel,
    value: f64,
    preference: MotionPreference,
) {
    let value = if preference.is_reduced() && channel.is_motion() {
        channel.identity()
    } else {
        value
    };
    match channel {
        Channel::TranslateX => style.translate.x += value,
        Channel::TranslateY => style.translate.y += value,
        Channel::Scale => style.scale *= value,
        Channel::Rotate => style.rotate_deg += value,
        Channel::Opacity => style.opacity *= value.clamp(0.0, 1.0),
    }
}

fn apply_entrance(
    style: &mut ElementStyle,
    hidden: HiddenStyle,
    t: f64,
    preference: MotionPreference,
) {
    let hidden = if preference.is_reduced() {
        hidden.without_motion()
    } else {
        hidden
    };
    let remaining = 1.0 - t;
    style.opacity *= (hidden.opacity + (1.0 - hidden.opacity) * t).clamp(0.0, 1.0);
    style.translate.x += hidden.translate_x * remaining;
    style.translate.y += hidden.translate_y * remaining;
    style.scale *= hidden.scale + (1.0 - hidden.scale) * t;
    style.rotate_deg += hidden.rotate_deg * remaining;
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
