use super::*;

fn vp() -> Viewport {
    Viewport {
        width: 1280.0,
        height: 800.0,
    }
}

#[test]
fn full_traversal_spans_entry_to_exit() {
    // Region sits at 800..1700 in document space.
    let rect = Rect::new(0.0, 800.0, 1280.0, 1700.0);
    let span = ProgressSpan::full_traversal();

    let (p0, p1) = span.offsets(rect, vp());
    assert_eq!(p0, 0.0); // top meets viewport bottom: 800 - 800
    assert_eq!(p1, 1700.0); // bottom meets viewport top

    assert_eq!(span.progress(rect, vp(), 0.0).value(), 0.0);
    assert_eq!(span.progress(rect, vp(), 850.0).value(), 0.5);
    assert_eq!(span.progress(rect, vp(), 1700.0).value(), 1.0);
}

#[test]
fn scroll_out_spans_pinned_top_to_departure() {
    // Hero block pinned at the top of the document, one viewport tall.
    let rect = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let span = ProgressSpan::scroll_out();

    let (p0, p1) = span.offsets(rect, vp());
    assert_eq!(p0, 0.0);
    assert_eq!(p1, 800.0);

    assert_eq!(span.progress(rect, vp(), 0.0).value(), 0.0);
    assert_eq!(span.progress(rect, vp(), 400.0).value(), 0.5);
    assert_eq!(span.progress(rect, vp(), 800.0).value(), 1.0);
}

#[test]
fn progress_clamps_outside_the_span() {
    let rect = Rect::new(0.0, 800.0, 1280.0, 1700.0);
    let span = ProgressSpan::default();
    assert_eq!(span.progress(rect, vp(), -500.0), Progress::ZERO);
    assert_eq!(span.progress(rect, vp(), 9000.0), Progress::ONE);
    // Clamped queries are indistinguishable from boundary queries.
    assert_eq!(
        span.progress(rect, vp(), -500.0),
        span.progress(rect, vp(), 0.0)
    );
    assert_eq!(
        span.progress(rect, vp(), 9000.0),
        span.progress(rect, vp(), 1700.0)
    );
}

#[test]
fn degenerate_span_steps_at_the_shared_offset() {
    // Zero-height region with both alignments on the same edge pair.
    let rect = Rect::new(0.0, 1000.0, 1280.0, 1000.0);
    let span = ProgressSpan::new(
        Alignment::new(Edge::Start, Edge::Start),
        Alignment::new(Edge::End, Edge::Start),
    );
    assert_eq!(span.progress(rect, vp(), 999.9), Progress::ZERO);
    assert_eq!(span.progress(rect, vp(), 1000.0), Progress::ONE);
    assert_eq!(span.progress(rect, vp(), 1000.1), Progress::ONE);
}

#[test]
fn tracker_retains_last_value_while_region_is_detached() {
    let mut layout = DocumentLayout::new();
    layout
        .rects
        .insert("about".to_string(), Rect::new(0.0, 800.0, 1280.0, 1700.0));

    let mut tracker = ProgressTracker::new("about", ProgressSpan::default());
    assert_eq!(tracker.last(), Progress::ZERO);

    assert_eq!(tracker.sample(&layout, vp(), 850.0).value(), 0.5);

    // Region disappears from the layout: the tracker holds its value.
    layout.rects.remove("about");
    assert_eq!(tracker.sample(&layout, vp(), 1600.0).value(), 0.5);
    assert_eq!(tracker.last().value(), 0.5);

    // And resumes once geometry is back.
    layout
        .rects
        .insert("about".to_string(), Rect::new(0.0, 800.0, 1280.0, 1700.0));
    assert_eq!(tracker.sample(&layout, vp(), 1700.0), Progress::ONE);
}

#[test]
fn tracker_starts_at_zero_for_unknown_regions() {
    let layout = DocumentLayout::new();
    let mut tracker = ProgressTracker::new("ghost", ProgressSpan::default());
    assert_eq!(tracker.sample(&layout, vp(), 500.0), Progress::ZERO);
}
