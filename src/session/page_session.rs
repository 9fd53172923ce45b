use crate::composition::model::PageComposition;
use crate::entrance::choreographer::EntranceChoreographer;
use crate::eval::evaluator::{EvalCtx, EvaluatedPage, Evaluator};
use crate::foundation::core::{Progress, Viewport};
use crate::foundation::error::{ScrolyteError, ScrolyteResult};
use crate::marquee::LoopMarquee;
use crate::motion::policy::{MotionPreference, ScrollBehavior};
use crate::viewport::geometry::DocumentLayout;
use crate::viewport::progress::ProgressTracker;
use crate::viewport::sections::{ActiveSectionDetector, SectionRegistry};

/// Options controlling `PageSession` construction behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOpts {
    /// Platform reduced-motion preference at construction time. `None` means
    /// the platform could not report one, in which case motion stays on.
    pub reduced_motion: Option<bool>,
}

/// Session lifetime counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Scroll events processed.
    pub scroll_ticks: u64,
    /// Resize events processed.
    pub resize_ticks: u64,
    /// Timer ticks processed.
    pub timer_ticks: u64,
    /// Active-section transitions observed.
    pub section_changes: u64,
    /// Entrance groups armed.
    pub entrances_armed: u64,
    /// Events published to subscribers (counted once per event, not per
    /// listener).
    pub events_dispatched: u64,
}

/// Lifecycle phase of a [`PageSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructed, not yet attached to a document.
    Idle,
    /// Mounted and waiting for the first scroll event.
    Tracking,
    /// At least one scroll event has been processed.
    Active,
    /// Torn down. Inputs are ignored and queries return empty.
    TornDown,
}

/// Handle returned by [`PageSession::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Notifications published by a session to its subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The active section changed.
    ActiveSectionChanged {
        /// Section that was active before, if any.
        previous: Option<String>,
        /// Newly active section.
        current: String,
    },
    /// An entrance group fired and began its stagger.
    EntranceArmed {
        /// Id of the armed group.
        group: String,
    },
    /// The effective motion preference changed.
    MotionPreferenceChanged {
        /// Newly effective preference.
        preference: MotionPreference,
    },
    /// The navigation condensed state flipped.
    CondensedChanged {
        /// Whether navigation should now render condensed.
        condensed: bool,
    },
}

struct Listener {
    id: ListenerId,
    callback: Box<dyn FnMut(&PageEvent)>,
}

/// Stateful driver for one page's scroll choreography.
///
/// A session owns the per-binding progress trackers, the section detector,
/// the entrance triggers and the marquee clocks for a validated composition.
/// The host feeds it scroll, resize and timer events together with measured
/// geometry; current styles are pulled with [`PageSession::evaluate`].
pub struct PageSession {
    page: PageComposition,
    phase: SessionPhase,
    preference: MotionPreference,
    viewport: Option<Viewport>,
    layout: DocumentLayout,
    scroll_y: f64,
    trackers: Vec<ProgressTracker>,
    detector: ActiveSectionDetector,
    entrances: Vec<EntranceChoreographer>,
    marquees: Vec<LoopMarquee>,
    condensed: bool,
    listeners: Vec<Listener>,
    next_listener_id: u64,
    stats: SessionStats,
}

impl PageSession {
    /// Construct a session for a composition, validating it first.
    pub fn new(page: PageComposition, opts: SessionOpts) -> ScrolyteResult<Self> {
        page.validate()?;
        let trackers = page
            .bindings
            .iter()
            .map(|b| ProgressTracker::new(b.region.clone(), b.span))
            .collect();
        let detector = ActiveSectionDetector::new(
            SectionRegistry::new(page.sections.iter().cloned()),
            page.nav.section_threshold,
        );
        let entrances = page
            .entrances
            .iter()
            .cloned()
            .map(EntranceChoreographer::new)
            .collect();
        Ok(Self {
            page,
            phase: SessionPhase::Idle,
            preference: MotionPreference::resolve(opts.reduced_motion),
            viewport: None,
            layout: DocumentLayout::default(),
            scroll_y: 0.0,
            trackers,
            detector,
            entrances,
            marquees: Vec::new(),
            condensed: false,
            listeners: Vec::new(),
            next_listener_id: 0,
            stats: SessionStats::default(),
        })
    }

    /// Attach to a document: record the initial geometry and start the
    /// marquee clocks at `now_sec`.
    ///
    /// Entrance containers already in view arm immediately, so above-the-fold
    /// groups play on load. The active section stays unset until the first
    /// scroll event. Only the first call has any effect.
    pub fn mount(&mut self, viewport: Viewport, layout: DocumentLayout, now_sec: f64) {
        if self.phase != SessionPhase::Idle {
            return;
        }
        self.marquees = self
            .page
            .marquees
            .iter()
            .cloned()
            .map(|spec| LoopMarquee::new(spec, now_sec))
            .collect();
        self.viewport = Some(viewport);
        self.layout = layout;
        self.phase = SessionPhase::Tracking;
        self.refresh_trackers();
        self.check_entrances(now_sec);
    }

    /// Process one scroll event at offset `scroll_y`.
    pub fn handle_scroll(&mut self, scroll_y: f64, now_sec: f64) {
        if !self.is_live() {
            return;
        }
        self.phase = SessionPhase::Active;
        self.scroll_y = scroll_y;
        self.stats.scroll_ticks += 1;
        self.refresh_trackers();
        if let Some(change) = self.detector.scan(&self.layout, scroll_y) {
            self.stats.section_changes += 1;
            self.dispatch(PageEvent::ActiveSectionChanged {
                previous: change.previous,
                current: change.current,
            });
        }
        self.check_entrances(now_sec);
        self.update_condensed();
    }

    /// Process a viewport resize. The host remeasures the document, so a new
    /// layout always accompanies the new viewport.
    ///
    /// The active section is not rescanned; it next updates on scroll.
    pub fn handle_resize(&mut self, viewport: Viewport, layout: DocumentLayout, now_sec: f64) {
        if !self.is_live() {
            return;
        }
        self.stats.resize_ticks += 1;
        self.viewport = Some(viewport);
        self.layout = layout;
        self.refresh_trackers();
        self.check_entrances(now_sec);
    }

    /// Replace the document geometry without a viewport change, e.g. after
    /// late-loading content shifts the page.
    pub fn set_layout(&mut self, layout: DocumentLayout, now_sec: f64) {
        if !self.is_live() {
            return;
        }
        self.layout = layout;
        self.refresh_trackers();
        self.check_entrances(now_sec);
    }

    /// Process one timer tick.
    ///
    /// Marquees need no ticking (they are pure functions of time, sampled on
    /// read); the tick re-checks entrance visibility so groups that drifted
    /// into view without a scroll still arm.
    pub fn tick(&mut self, now_sec: f64) {
        if !self.is_live() {
            return;
        }
        self.stats.timer_ticks += 1;
        self.check_entrances(now_sec);
    }

    /// Update the platform reduced-motion preference mid-session.
    pub fn set_reduced_motion(&mut self, platform_reduced: Option<bool>) {
        if self.phase == SessionPhase::TornDown {
            return;
        }
        let next = MotionPreference::resolve(platform_reduced);
        if next != self.preference {
            self.preference = next;
            self.dispatch(PageEvent::MotionPreferenceChanged { preference: next });
        }
    }

    /// Detach from the document. Subscribers are dropped, runtime state is
    /// cleared and every later input or query is inert. Idempotent.
    pub fn teardown(&mut self) {
        self.phase = SessionPhase::TornDown;
        self.listeners.clear();
        self.trackers.clear();
        self.entrances.clear();
        self.marquees.clear();
        self.layout = DocumentLayout::default();
        self.viewport = None;
    }

    /// Evaluate every element style at `now_sec` against current session
    /// state.
    pub fn evaluate(&self, now_sec: f64) -> ScrolyteResult<EvaluatedPage> {
        if self.phase == SessionPhase::TornDown {
            return Err(ScrolyteError::evaluation(
                "evaluate called on a torn down session",
            ));
        }
        let Some(viewport) = self.viewport else {
            return Err(ScrolyteError::evaluation("evaluate called before mount"));
        };
        Evaluator::eval_page_unchecked(
            &self.page,
            EvalCtx {
                layout: &self.layout,
                viewport,
                scroll_y: self.scroll_y,
                now_sec,
                preference: self.preference,
                entrances: &self.entrances,
                marquees: &self.marquees,
            },
        )
    }

    /// Latest sampled progress for `region`, if any binding tracks it.
    pub fn progress(&self, region: &str) -> Option<Progress> {
        self.trackers
            .iter()
            .find(|t| t.region() == region)
            .map(|t| t.last())
    }

    /// Currently active section id.
    pub fn active_section(&self) -> Option<&str> {
        if self.phase == SessionPhase::TornDown {
            return None;
        }
        self.detector.active()
    }

    /// Whether navigation should render condensed at the current offset.
    pub fn is_condensed(&self) -> bool {
        self.phase != SessionPhase::TornDown && self.condensed
    }

    /// Marquee strip offset in percent at `now_sec`, if `id` names one.
    pub fn marquee_offset(&self, id: &str, now_sec: f64) -> Option<f64> {
        self.marquees
            .iter()
            .find(|m| m.id() == id)
            .map(|m| m.offset_pct(now_sec, self.preference))
    }

    /// Scroll offset that brings `section` under the fixed navigation.
    ///
    /// The anchor offset from [`NavSpec`](crate::composition::model::NavSpec)
    /// is subtracted from the section top; the host clamps the result to its
    /// scrollable range.
    pub fn scroll_target(&self, section: &str) -> Option<f64> {
        let rect = self.layout.rect(section)?;
        Some(rect.y0 - self.page.nav.anchor_offset)
    }

    /// How programmatic scrolls should move under the current preference.
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        self.preference.scroll_behavior()
    }

    /// Currently effective motion preference.
    pub fn preference(&self) -> MotionPreference {
        self.preference
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Last scroll offset fed to the session.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Lifetime counters.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// The composition this session drives.
    pub fn page(&self) -> &PageComposition {
        &self.page
    }

    /// Register a listener for [`PageEvent`]s. After teardown the returned id
    /// is fresh but nothing is stored.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PageEvent) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        if self.phase != SessionPhase::TornDown {
            self.listeners.push(Listener {
                id,
                callback: Box::new(listener),
            });
        }
        id
    }

    /// Remove a listener. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    fn is_live(&self) -> bool {
        matches!(self.phase, SessionPhase::Tracking | SessionPhase::Active)
    }

    fn refresh_trackers(&mut self) {
        let Some(viewport) = self.viewport else {
            return;
        };
        for tracker in &mut self.trackers {
            tracker.sample(&self.layout, viewport, self.scroll_y);
        }
    }

    fn check_entrances(&mut self, now_sec: f64) {
        let Some(viewport) = self.viewport else {
            return;
        };
        // Collect first: dispatching borrows the listener list mutably.
        let mut armed = Vec::new();
        for chor in &mut self.entrances {
            if chor
                .observe(&self.layout, viewport, self.scroll_y, now_sec)
                .is_some()
            {
                armed.push(chor.group().to_string());
            }
        }
        for group in armed {
            self.stats.entrances_armed += 1;
            self.dispatch(PageEvent::EntranceArmed { group });
        }
    }

    fn update_condensed(&mut self) {
        let condensed = self.scroll_y > self.page.nav.condensed_after;
        if condensed != self.condensed {
            self.condensed = condensed;
            self.dispatch(PageEvent::CondensedChanged { condensed });
        }
    }

    fn dispatch(&mut self, event: PageEvent) {
        self.stats.events_dispatched += 1;
        for listener in &mut self.listeners {
            (listener.callback)(&event);
        }
    }
}
