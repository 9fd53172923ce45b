use crate::{composition::model::MarqueeSpec, motion::policy::MotionPreference};

/// Runtime state for one looping strip.
///
/// The strip content is rendered twice back to back by the host; shifting the
/// pair from 0% to -100% of one copy's width and wrapping reads as a seamless
/// loop. The offset is a pure function of time, so there is no per-frame
/// state to advance and a paused tab simply resumes at the correct phase.
#[derive(Clone, Debug)]
pub struct LoopMarquee {
    spec: MarqueeSpec,
    epoch_sec: f64,
}

impl LoopMarquee {
    /// A marquee whose loop phase is zero at `epoch_sec`.
    pub fn new(spec: MarqueeSpec, epoch_sec: f64) -> Self {
        Self { spec, epoch_sec }
    }

    /// Id of the marquee within the composition.
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    /// Element carrying the duplicated strip content.
    pub fn element(&self) -> &str {
        &self.spec.element
    }

    /// The marquee spec driving this strip.
    pub fn spec(&self) -> &MarqueeSpec {
        &self.spec
    }

    /// Horizontal offset in percent of one strip copy's width, in (-100, 0].
    ///
    /// Reduced motion suppresses the loop entirely and parks the strip at 0;
    /// flipping the preference back resumes from the phase implied by the
    /// clock, not from where the strip stopped.
    pub fn offset_pct(&self, now_sec: f64, preference: MotionPreference) -> f64 {
        if preference.is_reduced() {
            return 0.0;
        }
        if self.spec.duration_sec <= 0.0 {
            return 0.0;
        }
        let elapsed = (now_sec - self.epoch_sec).max(0.0);
        -100.0 * (elapsed / self.spec.duration_sec).fract()
    }
}
