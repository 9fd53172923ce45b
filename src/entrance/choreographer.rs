use crate::{
    animation::ease::Ease,
    composition::model::{EntranceSpec, HiddenStyle},
    foundation::core::Viewport,
    motion::policy::MotionPreference,
    viewport::geometry::DocumentLayout,
};

/// Per-child play duration once reduced motion collapses the timing. Long
/// enough to register as a change, short enough to read as immediate.
const REDUCED_ITEM_DURATION_SEC: f64 = 0.01;

/// One-shot latch with a single `Idle -> Fired` transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnceTrigger {
    /// Not yet fired; the next [`OnceTrigger::fire`] call will transition.
    #[default]
    Idle,
    /// Already fired; further [`OnceTrigger::fire`] calls are no-ops.
    Fired,
}

impl OnceTrigger {
    /// Whether the trigger has already fired.
    pub fn has_fired(self) -> bool {
        matches!(self, Self::Fired)
    }

    /// Transition to `Fired`. Returns true only on the transition itself.
    pub fn fire(&mut self) -> bool {
        if self.has_fired() {
            return false;
        }
        *self = Self::Fired;
        true
    }
}

/// Resolved playback slot for one child, timing fixed at arm time.
#[derive(Clone, Debug)]
pub struct StaggerSlot {
    /// Element this slot reveals.
    pub element: String,
    /// Delay after arming before this slot starts, in seconds.
    pub delay_sec: f64,
    /// Play duration of this slot, in seconds.
    pub duration_sec: f64,
    /// Easing applied to this slot's playback.
    pub ease: Ease,
    /// Style the element holds before the slot plays.
    pub hidden: HiddenStyle,
}

impl StaggerSlot {
    /// Eased playback progress at `now_sec` for a plan armed at
    /// `armed_at_sec`.
    ///
    /// The preference is consulted at sample time, not baked into the slot:
    /// reduced motion drops the delay and collapses the duration to
    /// [`REDUCED_ITEM_DURATION_SEC`], so flipping the preference mid-flight
    /// snaps already-armed entrances to rest on the next sample.
    pub fn progress_at(
        &self,
        armed_at_sec: f64,
        now_sec: f64,
        preference: MotionPreference,
    ) -> f64 {
        let (delay, duration) = match preference {
            MotionPreference::Full => (self.delay_sec, self.duration_sec),
            MotionPreference::Reduced => (0.0, REDUCED_ITEM_DURATION_SEC),
        };
        let local = now_sec - armed_at_sec - delay;
        if local <= 0.0 || local.is_nan() {
            return 0.0;
        }
        if local >= duration {
            return 1.0;
        }
        self.ease.apply(local / duration)
    }
}

/// An armed entrance group: when it fired and what each child plays.
#[derive(Clone, Debug)]
pub struct StaggerPlan {
    /// Id of the entrance group this plan belongs to.
    pub group: String,
    /// Wall-clock time the group armed, in seconds.
    pub armed_at_sec: f64,
    /// Resolved playback slot per child, in reveal order.
    pub slots: Vec<StaggerSlot>,
}

/// Watches one entrance group's container and arms the group exactly once.
#[derive(Clone, Debug)]
pub struct EntranceChoreographer {
    spec: EntranceSpec,
    trigger: OnceTrigger,
    plan: Option<StaggerPlan>,
}

impl EntranceChoreographer {
    /// Choreographer for `spec`, unarmed.
    pub fn new(spec: EntranceSpec) -> Self {
        Self {
            spec,
            trigger: OnceTrigger::Idle,
            plan: None,
        }
    }

    /// Id of the entrance group being watched.
    pub fn group(&self) -> &str {
        &self.spec.id
    }

    /// The entrance spec driving this choreographer.
    pub fn spec(&self) -> &EntranceSpec {
        &self.spec
    }

    /// Whether the group has armed.
    pub fn has_fired(&self) -> bool {
        self.trigger.has_fired()
    }

    /// The plan, once armed.
    pub fn plan(&self) -> Option<&StaggerPlan> {
        self.plan.as_ref()
    }

    /// Re-check container visibility and arm the group if it crossed the
    /// visibility amount.
    ///
    /// Returns the freshly-built plan on the arming call only; every later
    /// call returns `None`, including calls where the container has scrolled
    /// back out of view. A container missing from the layout never arms.
    pub fn observe(
        &mut self,
        layout: &DocumentLayout,
        viewport: Viewport,
        scroll_y: f64,
        now_sec: f64,
    ) -> Option<&StaggerPlan> {
        if self.trigger.has_fired() {
            return None;
        }
        let ratio = layout.intersection_ratio(&self.spec.container, viewport, scroll_y)?;
        if ratio < self.spec.amount {
            return None;
        }

        self.trigger.fire();
        let slots = self
            .spec
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| StaggerSlot {
                element: child.element.clone(),
                delay_sec: self.spec.base_delay_sec
                    + i as f64 * self.spec.stagger_sec
                    + child.extra_delay_sec,
                duration_sec: child.duration_sec.unwrap_or(self.spec.item_duration_sec),
                ease: child.ease.unwrap_or(self.spec.ease),
                hidden: child.hidden,
            })
            .collect();
        self.plan = Some(StaggerPlan {
            group: self.spec.id.clone(),
            armed_at_sec: now_sec,
            slots,
        });
        self.plan.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/choreographer.rs"]
mod tests;
