//! Scrolyte is a scroll-driven animation engine for presentational pages.
//!
//! Scrolyte turns measured page geometry ([`DocumentLayout`]) plus a
//! declarative composition ([`PageComposition`]) into per-element styles
//! ([`EvaluatedPage`]), keyed entirely off scroll offset and wall-clock time.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`PageComposition`] with [`PageBuilder`] (or deserialize one)
//! 2. **Drive**: feed scroll, resize and timer events into a [`PageSession`]
//! 3. **Evaluate**: pull an [`EvaluatedPage`] of element styles for the current instant
//! 4. **Apply** (host side): write the styles to the DOM or any other target
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: styles are a pure function of composition, geometry, scroll and time.
//! - **No measurement**: the host measures the document; the engine never touches a DOM.
//! - **Reduced motion built in**: one preference collapses movement everywhere while keeping fades.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a detailed, standalone walkthrough of the API and architecture, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod composition;
mod entrance;
mod eval;
mod foundation;
mod marquee;
mod motion;
mod session;
mod viewport;

/// High-level, standalone documentation for Scrolyte's concepts and architecture.
pub mod guide;

pub use animation::channel::Channel;
pub use animation::ease::Ease;
pub use animation::table::{Keyframe, KeyframeTable};
pub use composition::dsl::{
    BindingBuilder, EntranceBuilder, PageBuilder, entrance_child, fade_up, marquee,
};
pub use composition::model::{
    EntranceChildSpec, EntranceSpec, HiddenStyle, MarqueeSpec, NavSpec, PageComposition,
    ScrollBinding,
};
pub use entrance::choreographer::{EntranceChoreographer, OnceTrigger, StaggerPlan, StaggerSlot};
pub use eval::evaluator::{ElementStyle, EvalCtx, EvaluatedPage, Evaluator};
pub use foundation::core::{Point, Progress, Rect, Vec2, ViewBounds, Viewport};
pub use foundation::error::{ScrolyteError, ScrolyteResult};
pub use marquee::LoopMarquee;
pub use motion::policy::{MotionPreference, ScrollBehavior};
pub use session::page_session::{
    ListenerId, PageEvent, PageSession, SessionOpts, SessionPhase, SessionStats,
};
pub use viewport::geometry::DocumentLayout;
pub use viewport::progress::{Alignment, Edge, ProgressSpan, ProgressTracker};
pub use viewport::sections::{ActiveSectionDetector, SectionChange, SectionRegistry};
