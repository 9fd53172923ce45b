use super::*;
use crate::{
    animation::ease::Ease,
    composition::dsl::{
        BindingBuilder, EntranceBuilder, PageBuilder, entrance_child, fade_up, marquee,
    },
    foundation::core::Rect,
    foundation::error::ScrolyteError,
    viewport::progress::ProgressSpan,
};

fn vp() -> Viewport {
    Viewport {
        width: 1280.0,
        height: 800.0,
    }
}

fn hero_layout() -> DocumentLayout {
    let mut l = DocumentLayout::new();
    l.rects
        .insert("home".to_string(), Rect::new(0.0, 0.0, 1280.0, 800.0));
    l
}

fn hero_page() -> PageComposition {
    PageBuilder::new()
        .section("home")
        .binding(
            BindingBuilder::new("hero-copy", "home")
                .span(ProgressSpan::scroll_out())
                .row(0.0, [0.0, 1.0, 1.0])
                .row(0.8, [40.0, 0.0, 0.84])
                .row(1.0, [50.0, 0.0, 0.8])
                .channels([Channel::TranslateY, Channel::Opacity, Channel::Scale])
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn ctx<'a>(
    layout: &'a DocumentLayout,
    entrances: &'a [EntranceChoreographer],
    marquees: &'a [LoopMarquee],
    scroll_y: f64,
    now_sec: f64,
    preference: MotionPreference,
) -> EvalCtx<'a> {
    EvalCtx {
        layout,
        viewport: vp(),
        scroll_y,
        now_sec,
        preference,
        entrances,
        marquees,
    }
}

#[test]
fn binding_samples_span_progress_through_the_table() {
    let page = hero_page();
    let layout = hero_layout();

    // Halfway out: progress 0.5 sits 62.5% into the 0..0.8 segment.
    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &[], 400.0, 0.0, MotionPreference::Full),
    )
    .unwrap();
    let style = out.style("hero-copy").unwrap();
    assert!((style.translate.y - 25.0).abs() < 1e-9);
    assert!((style.opacity - 0.375).abs() < 1e-9);
    assert!((style.scale - 0.9).abs() < 1e-9);
    assert_eq!(style.translate.x, 0.0);
    assert_eq!(style.rotate_deg, 0.0);

    // At rest and fully departed the boundary rows apply exactly.
    let top = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &[], 0.0, 0.0, MotionPreference::Full),
    )
    .unwrap();
    let style = top.style("hero-copy").unwrap();
    assert_eq!(style.translate.y, 0.0);
    assert_eq!(style.opacity, 1.0);

    let past = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &[], 5000.0, 0.0, MotionPreference::Full),
    )
    .unwrap();
    let style = past.style("hero-copy").unwrap();
    assert_eq!(style.translate.y, 50.0);
    assert_eq!(style.opacity, 0.0);
    assert!((style.scale - 0.8).abs() < 1e-12);
}

#[test]
fn reduced_motion_collapses_motion_lanes_and_keeps_opacity() {
    let page = hero_page();
    let layout = hero_layout();

    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &[], 400.0, 0.0, MotionPreference::Reduced),
    )
    .unwrap();
    let style = out.style("hero-copy").unwrap();
    assert_eq!(style.translate.y, 0.0);
    assert_eq!(style.scale, 1.0);
    assert!((style.opacity - 0.375).abs() < 1e-9);
}

#[test]
fn detached_region_contributes_nothing() {
    let page = hero_page();
    let layout = DocumentLayout::new();

    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &[], 400.0, 0.0, MotionPreference::Full),
    )
    .unwrap();
    assert!(out.style("hero-copy").is_none());
    assert!(out.styles.is_empty());
}

#[test]
fn unarmed_entrance_children_hold_their_hidden_style() {
    let page = PageBuilder::new()
        .entrance(
            EntranceBuilder::new("intro", "home")
                .child(entrance_child("title", fade_up(40.0)))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let chors = vec![EntranceChoreographer::new(page.entrances[0].clone())];
    let layout = DocumentLayout::new();

    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &[], 0.0, 0.0, MotionPreference::Full),
    )
    .unwrap();
    let style = out.style("title").unwrap();
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.translate.y, 40.0);
    assert_eq!(style.scale, 1.0);
}

fn armed_panel() -> (PageComposition, DocumentLayout, Vec<EntranceChoreographer>) {
    let page = PageBuilder::new()
        .binding(
            BindingBuilder::new("card", "panel")
                .row(0.0, [10.0])
                .channels([Channel::TranslateY])
                .build()
                .unwrap(),
        )
        .entrance(
            EntranceBuilder::new("panel-reveal", "panel")
                .amount(0.1)
                .base_delay_sec(0.0)
                .stagger_sec(0.0)
                .item_duration_sec(1.0)
                .ease(Ease::Linear)
                .child(entrance_child("card", fade_up(40.0)))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let mut layout = DocumentLayout::new();
    layout
        .rects
        .insert("panel".to_string(), Rect::new(0.0, 0.0, 1280.0, 800.0));

    let mut chor = EntranceChoreographer::new(page.entrances[0].clone());
    assert!(chor.observe(&layout, vp(), 0.0, 0.0).is_some());
    (page, layout, vec![chor])
}

#[test]
fn armed_entrance_composes_with_bindings_on_the_same_element() {
    let (page, layout, chors) = armed_panel();

    // Mid-flight: binding holds 10, hidden rise has decayed to half.
    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &[], 0.0, 0.5, MotionPreference::Full),
    )
    .unwrap();
    let style = out.style("card").unwrap();
    assert!((style.translate.y - 30.0).abs() < 1e-9);
    assert!((style.opacity - 0.5).abs() < 1e-9);

    // Entrance finished: only the binding remains.
    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &[], 0.0, 5.0, MotionPreference::Full),
    )
    .unwrap();
    let style = out.style("card").unwrap();
    assert_eq!(style.translate.y, 10.0);
    assert_eq!(style.opacity, 1.0);
}

#[test]
fn reduced_entrance_fades_fast_and_never_moves() {
    let (page, layout, chors) = armed_panel();

    // Halfway through the collapsed 10ms fade.
    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &[], 0.0, 0.005, MotionPreference::Reduced),
    )
    .unwrap();
    let style = out.style("card").unwrap();
    assert_eq!(style.translate.y, 0.0);
    assert!((style.opacity - 0.5).abs() < 1e-9);

    // Done: fully visible, still unmoved.
    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &[], 0.0, 0.02, MotionPreference::Reduced),
    )
    .unwrap();
    let style = out.style("card").unwrap();
    assert_eq!(style.translate.y, 0.0);
    assert_eq!(style.opacity, 1.0);
}

#[test]
fn marquee_offset_lands_on_translate_x() {
    let page = PageBuilder::new()
        .marquee(marquee("skills", "skills-strip"))
        .build()
        .unwrap();
    let strips = vec![LoopMarquee::new(page.marquees[0].clone(), 0.0)];
    let layout = DocumentLayout::new();

    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &strips, 0.0, 15.0, MotionPreference::Full),
    )
    .unwrap();
    assert_eq!(out.style("skills-strip").unwrap().translate.x, -25.0);

    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &strips, 0.0, 15.0, MotionPreference::Reduced),
    )
    .unwrap();
    assert_eq!(out.style("skills-strip").unwrap().translate.x, 0.0);
}

#[test]
fn styles_follow_first_appearance_order() {
    let page = PageBuilder::new()
        .binding(
            BindingBuilder::new("b1", "home")
                .row(0.0, [1.0])
                .channels([Channel::Opacity])
                .build()
                .unwrap(),
        )
        .binding(
            BindingBuilder::new("b2", "home")
                .row(0.0, [1.0])
                .channels([Channel::Scale])
                .build()
                .unwrap(),
        )
        .entrance(
            EntranceBuilder::new("g", "home")
                .child(entrance_child("e1", fade_up(40.0)))
                .build()
                .unwrap(),
        )
        .marquee(marquee("m", "m1"))
        .build()
        .unwrap();

    let layout = hero_layout();
    let chors = vec![EntranceChoreographer::new(page.entrances[0].clone())];
    let strips = vec![LoopMarquee::new(page.marquees[0].clone(), 0.0)];

    let out = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &strips, 0.0, 0.0, MotionPreference::Full),
    )
    .unwrap();
    let order: Vec<&str> = out.styles.iter().map(|s| s.element.as_str()).collect();
    assert_eq!(order, vec!["b1", "b2", "e1", "m1"]);
}

#[test]
fn eval_page_rejects_invalid_compositions() {
    let page = PageComposition {
        sections: vec!["home".to_string(), "home".to_string()],
        bindings: vec![],
        entrances: vec![],
        marquees: vec![],
        nav: Default::default(),
    };
    let layout = DocumentLayout::new();
    let err = Evaluator::eval_page(
        &page,
        ctx(&layout, &[], &[], 0.0, 0.0, MotionPreference::Full),
    )
    .unwrap_err();
    assert!(matches!(err, ScrolyteError::Validation(_)));
}

#[test]
fn evaluation_is_deterministic() {
    let (page, layout, chors) = armed_panel();
    let a = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &[], 120.0, 0.4, MotionPreference::Full),
    )
    .unwrap();
    let b = Evaluator::eval_page(
        &page,
        ctx(&layout, &chors, &[], 120.0, 0.4, MotionPreference::Full),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
