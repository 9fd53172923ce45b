//! # Scrolyte guide (v0.1.0)
//!
//! This module is a standalone, end-to-end walkthrough of Scrolyte's architecture and public API.
//! It is intentionally detailed so future phases (and external integrations) can build on a shared
//! mental model of what "a scroll-driven page" means in this codebase.
//!
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//! If you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`PageComposition`](crate::PageComposition): the declarative page (sections + scroll bindings + entrances + marquees + nav)
//! - [`DocumentLayout`](crate::DocumentLayout): host-measured geometry, region id to document-space rect
//! - [`PageSession`](crate::PageSession): the stateful driver fed scroll, resize and timer events
//! - [`Progress`](crate::Progress): a clamped `[0, 1]` position within one region's scroll span
//! - [`EvaluatedPage`](crate::EvaluatedPage) / [`ElementStyle`](crate::ElementStyle): resolved styles for one instant
//! - [`MotionPreference`](crate::MotionPreference): the effective reduced-motion policy
//!
//! Each evaluation is explicitly staged:
//!
//! 1. Track: scroll offset to per-region progress ([`ProgressSpan`](crate::ProgressSpan), [`ProgressTracker`](crate::ProgressTracker))
//! 2. Sample: progress to channel values ([`KeyframeTable`](crate::KeyframeTable), [`Ease`](crate::Ease))
//! 3. Compose: channel values + entrance staggers + marquee clocks into [`ElementStyle`](crate::ElementStyle)s
//!
//! ---
//!
//! ## "No measurement in the engine" (and why)
//!
//! Scrolyte wants tracking and evaluation to be deterministic, testable, and portable.
//! To do that, engine code never queries a DOM, a window, or a clock.
//! Instead:
//!
//! - the host measures the document and hands the engine a [`DocumentLayout`](crate::DocumentLayout)
//! - every rect is in **document coordinates** (scroll offset 0, y growing downward)
//! - every input event carries its own timestamp in seconds
//!
//! This makes a browser host, a native host and a plain unit test all drive the
//! engine the same way, and it makes any evaluated instant reproducible from
//! its inputs.
//!
//! ---
//!
//! ## Progress spans (Scrolyte's scroll contract)
//!
//! A [`ProgressSpan`](crate::ProgressSpan) names two alignment instants, each
//! "a region edge meets a viewport edge":
//!
//! - progress is 0 at the `from` alignment and 1 at the `to` alignment
//! - scroll positions outside the pair **clamp**; progress never extrapolates
//! - the default span covers the region's full traversal: region top meets
//!   viewport bottom, through region bottom meets viewport top
//! - [`ProgressSpan::scroll_out`](crate::ProgressSpan::scroll_out) runs from "region top at viewport top" until the
//!   region has scrolled away, which suits hero sections pinned at the page top
//!
//! A region missing from the layout (display toggled off, not yet measured)
//! keeps its **last sampled progress** rather than snapping to 0.
//!
//! ---
//!
//! ## Building a page (Rust DSL)
//!
//! JSON is supported via Serde, but for programmatic usage prefer the builder DSL.
//!
//! The following example binds a hero copy block to its section's scroll-out
//! span, drives a session through one scroll event, and reads back styles.
//!
//! ```rust
//! use scrolyte::{
//!     BindingBuilder, Channel, DocumentLayout, PageBuilder, PageSession, ProgressSpan, Rect,
//!     SessionOpts, Viewport,
//! };
//!
//! # fn main() -> scrolyte::ScrolyteResult<()> {
//! let page = PageBuilder::new()
//!     .section("intro")
//!     .binding(
//!         BindingBuilder::new("intro-copy", "intro")
//!             .span(ProgressSpan::scroll_out())
//!             .row(0.0, [0.0, 1.0])
//!             .row(1.0, [60.0, 0.0])
//!             .channels([Channel::TranslateY, Channel::Opacity])
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let mut layout = DocumentLayout::new();
//! layout
//!     .rects
//!     .insert("intro".to_string(), Rect::new(0.0, 0.0, 1280.0, 900.0));
//!
//! let mut session = PageSession::new(page, SessionOpts::default())?;
//! session.mount(Viewport::new(1280.0, 800.0)?, layout, 0.0);
//! session.handle_scroll(450.0, 0.1);
//!
//! let styles = session.evaluate(0.1)?;
//! let copy = styles.style("intro-copy").unwrap();
//! assert!(copy.translate.y > 0.0);
//! assert!(copy.opacity < 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! Notes:
//!
//! - [`PageComposition::validate`](crate::PageComposition::validate) is called by the builder and again by
//!   [`PageSession::new`](crate::PageSession::new).
//! - Styles are pulled, not pushed: the host calls [`PageSession::evaluate`](crate::PageSession::evaluate)
//!   once per animation frame and writes the result to its targets.
//!
//! ---
//!
//! ## Scroll bindings and keyframe tables
//!
//! A [`ScrollBinding`](crate::ScrollBinding) attaches one element to one region's progress through a
//! [`KeyframeTable`](crate::KeyframeTable):
//!
//! - rows are strictly increasing in progress; every row carries one output per channel
//! - sampling is piecewise-linear between neighboring rows and clamps at both ends
//! - channels ([`Channel`](crate::Channel)) name what each output lane drives
//!
//! Multiple contributions to one element compose per channel: translation and
//! rotation add, scale and opacity multiply. Rest style is zero offset, scale 1,
//! rotation 0, opacity 1, so an element nothing targets stays put.
//!
//! ---
//!
//! ## Entrances: one-shot staggered reveals
//!
//! An [`EntranceSpec`](crate::EntranceSpec) reveals a group of children the first time its container
//! region shows at least `amount` of its height in the viewport:
//!
//! - arming is **one-shot** ([`OnceTrigger`](crate::OnceTrigger)): scrolling away and back does not replay
//! - child delays follow `base_delay + index * stagger + extra_delay`
//! - each child starts from its [`HiddenStyle`](crate::HiddenStyle) and decays it to nothing over the
//!   item duration, under the group ease (children may override duration and ease)
//! - the armed timestamp is latched; per-child progress is a pure function of
//!   "now", so hosts can evaluate at any cadence
//!
//! Containers already in view when [`PageSession::mount`](crate::PageSession::mount) runs arm immediately,
//! which is how above-the-fold hero content plays on load.
//!
//! ---
//!
//! ## Sections and navigation
//!
//! The session tracks which page section is "active" for navigation highlighting:
//!
//! - a section is active when it straddles the detector's threshold line
//!   (default 100px below the viewport top)
//! - candidates are scanned in registration order; the first hit wins overlaps
//! - in gaps between sections the previous answer is retained, so highlights
//!   never flicker off mid-page
//! - the active section stays unset until the first scroll event
//!
//! Navigation helpers live on the session: [`PageSession::scroll_target`](crate::PageSession::scroll_target)
//! returns the offset that puts a section under the fixed header (section top
//! minus the anchor offset), and [`PageSession::is_condensed`](crate::PageSession::is_condensed) reports whether
//! the header should shrink past the configured scroll offset.
//!
//! ---
//!
//! ## Reduced motion
//!
//! [`MotionPreference::resolve`](crate::MotionPreference::resolve) maps the platform's reported preference to a
//! policy, failing open: only an explicit "reduce" disables motion, an absent
//! or unreadable preference keeps it on.
//!
//! Under [`MotionPreference::Reduced`](crate::MotionPreference):
//!
//! - motion channels (translate, scale, rotate) collapse to their identity;
//!   opacity still applies, so content never becomes unreachable
//! - entrances keep their hidden opacity but finish almost immediately and never move
//! - marquees park at offset zero
//! - [`PageSession::scroll_behavior`](crate::PageSession::scroll_behavior) switches programmatic scrolling from
//!   smooth to instant
//!
//! The preference is consulted at **sample time**, so flipping it mid-flight
//! takes effect on the next evaluated frame without rebuilding anything.
//!
//! ---
//!
//! ## Sessions and events
//!
//! A [`PageSession`](crate::PageSession) moves through [`SessionPhase`](crate::SessionPhase)s: `Idle` until mounted,
//! `Tracking` until the first scroll, then `Active`, and finally `TornDown`
//! once detached (after which every input and query is inert).
//!
//! Hosts that need push-style notifications subscribe with
//! [`PageSession::subscribe`](crate::PageSession::subscribe); the session publishes [`PageEvent`](crate::PageEvent)s for
//! section changes, entrance arming, motion preference changes and the
//! condensed flag. [`SessionStats`](crate::SessionStats) counts processed inputs and published
//! events for diagnostics.
