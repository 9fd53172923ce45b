use super::*;

#[test]
fn builders_create_expected_structure() {
    let page = PageBuilder::new()
        .section("home")
        .section("about")
        .binding(
            BindingBuilder::new("about-portrait", "about")
                .row(0.0, [100.0])
                .row(1.0, [-100.0])
                .channels([Channel::TranslateY])
                .build()
                .unwrap(),
        )
        .entrance(
            EntranceBuilder::new("about-reveal", "about")
                .amount(0.2)
                .stagger_sec(0.1)
                .child(entrance_child("about-heading", fade_up(50.0)))
                .child(entrance_child("about-copy", fade_up(50.0)))
                .build()
                .unwrap(),
        )
        .marquee(marquee("skills", "skills-strip"))
        .build()
        .unwrap();

    assert_eq!(page.sections, vec!["home", "about"]);
    assert_eq!(page.bindings.len(), 1);
    assert_eq!(page.entrances[0].children.len(), 2);
    assert_eq!(page.marquees[0].duration_sec, 60.0);
}

#[test]
fn entrance_builder_starts_from_standard_timing() {
    let spec = EntranceBuilder::new("intro", "home")
        .child(entrance_child("title", fade_up(40.0)))
        .build()
        .unwrap();
    assert_eq!(spec.amount, 0.2);
    assert_eq!(spec.base_delay_sec, 0.0);
    assert_eq!(spec.stagger_sec, 0.15);
    assert_eq!(spec.item_duration_sec, 0.8);
    assert!(matches!(spec.ease, Ease::CubicBezier { .. }));
}

#[test]
fn fade_up_only_sets_the_vertical_delta() {
    let hidden = fade_up(40.0);
    assert_eq!(hidden.translate_y, 40.0);
    assert_eq!(hidden.translate_x, 0.0);
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.scale, 1.0);
    assert_eq!(hidden.rotate_deg, 0.0);
}

#[test]
fn binding_builder_rejects_channel_mismatch() {
    let result = BindingBuilder::new("hero-copy", "home")
        .row(0.0, [0.0, 1.0])
        .row(1.0, [50.0, 0.0])
        .channels([Channel::TranslateY])
        .build();
    assert!(result.is_err());
}

#[test]
fn binding_builder_rejects_unordered_rows() {
    let result = BindingBuilder::new("hero-copy", "home")
        .row(0.8, [1.0])
        .row(0.2, [0.0])
        .channels([Channel::Opacity])
        .build();
    assert!(result.is_err());
}

#[test]
fn page_builder_rejects_duplicate_sections() {
    let result = PageBuilder::new().section("home").section("home").build();
    assert!(result.is_err());
}

#[test]
fn entrance_builder_rejects_childless_groups() {
    assert!(EntranceBuilder::new("intro", "home").build().is_err());
}
