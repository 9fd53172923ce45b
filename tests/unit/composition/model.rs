use super::*;
use crate::animation::table::Keyframe;

fn child(element: &str, rise: f64) -> EntranceChildSpec {
    EntranceChildSpec {
        element: element.to_string(),
        hidden: HiddenStyle {
            translate_y: rise,
            ..HiddenStyle::default()
        },
        extra_delay_sec: 0.0,
        duration_sec: None,
        ease: None,
    }
}

fn basic_page() -> PageComposition {
    let mut reveal = EntranceSpec::new("about-reveal", "about");
    reveal.children.push(child("about-heading", 50.0));
    reveal.children.push(child("about-copy", 50.0));

    PageComposition {
        sections: vec!["home".to_string(), "about".to_string()],
        bindings: vec![ScrollBinding {
            element: "about-portrait".to_string(),
            region: "about".to_string(),
            span: ProgressSpan::default(),
            table: KeyframeTable::new(vec![
                Keyframe {
                    progress: 0.0,
                    outputs: vec![100.0],
                },
                Keyframe {
                    progress: 1.0,
                    outputs: vec![-100.0],
                },
            ]),
            channels: vec![Channel::TranslateY],
        }],
        entrances: vec![reveal],
        marquees: vec![MarqueeSpec {
            id: "skills".to_string(),
            element: "skills-strip".to_string(),
            duration_sec: 60.0,
        }],
        nav: NavSpec::default(),
    }
}

#[test]
fn basic_page_validates() {
    basic_page().validate().unwrap();
}

#[test]
fn duplicate_section_id_is_rejected() {
    let mut page = basic_page();
    page.sections.push("home".to_string());
    assert!(page.validate().is_err());
}

#[test]
fn blank_section_id_is_rejected() {
    let mut page = basic_page();
    page.sections.push("  ".to_string());
    assert!(page.validate().is_err());
}

#[test]
fn two_bindings_driving_the_same_lane_are_rejected() {
    let mut page = basic_page();
    let dup = page.bindings[0].clone();
    page.bindings.push(dup);
    assert!(page.validate().is_err());
}

#[test]
fn same_element_on_distinct_lanes_is_fine() {
    let mut page = basic_page();
    let mut second = page.bindings[0].clone();
    second.channels = vec![Channel::Opacity];
    second.table = KeyframeTable::new(vec![
        Keyframe {
            progress: 0.0,
            outputs: vec![0.0],
        },
        Keyframe {
            progress: 1.0,
            outputs: vec![1.0],
        },
    ]);
    page.bindings.push(second);
    page.validate().unwrap();
}

#[test]
fn channel_count_must_match_table_arity() {
    let mut page = basic_page();
    page.bindings[0].channels.push(Channel::Opacity);
    assert!(page.validate().is_err());
}

#[test]
fn repeated_channel_within_a_binding_is_rejected() {
    let mut page = basic_page();
    page.bindings[0].channels = vec![Channel::TranslateY, Channel::TranslateY];
    page.bindings[0].table = KeyframeTable::new(vec![Keyframe {
        progress: 0.0,
        outputs: vec![1.0, 2.0],
    }]);
    assert!(page.validate().is_err());
}

#[test]
fn entrance_amount_must_be_in_unit_interval() {
    let mut page = basic_page();
    page.entrances[0].amount = 0.0;
    assert!(page.validate().is_err());
    page.entrances[0].amount = 1.5;
    assert!(page.validate().is_err());
    page.entrances[0].amount = 1.0;
    page.validate().unwrap();
}

#[test]
fn entrance_timing_must_be_sane() {
    let mut page = basic_page();
    page.entrances[0].item_duration_sec = 0.0;
    assert!(page.validate().is_err());

    let mut page = basic_page();
    page.entrances[0].stagger_sec = -0.1;
    assert!(page.validate().is_err());

    let mut page = basic_page();
    page.entrances[0].children[0].duration_sec = Some(0.0);
    assert!(page.validate().is_err());
}

#[test]
fn entrance_without_children_is_rejected() {
    let mut page = basic_page();
    page.entrances[0].children.clear();
    assert!(page.validate().is_err());
}

#[test]
fn duplicate_child_element_is_rejected() {
    let mut page = basic_page();
    let dup = page.entrances[0].children[0].clone();
    page.entrances[0].children.push(dup);
    assert!(page.validate().is_err());
}

#[test]
fn duplicate_entrance_id_is_rejected() {
    let mut page = basic_page();
    let mut dup = page.entrances[0].clone();
    dup.container = "home".to_string();
    page.entrances.push(dup);
    assert!(page.validate().is_err());
}

#[test]
fn bezier_x_control_points_must_stay_in_unit_range() {
    let mut page = basic_page();
    page.entrances[0].ease = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.25,
        y2: 1.0,
    };
    assert!(page.validate().is_err());

    // y control points may overshoot; that only bends the output.
    let mut page = basic_page();
    page.entrances[0].ease = Ease::CubicBezier {
        x1: 0.25,
        y1: 1.4,
        x2: 0.25,
        y2: 1.0,
    };
    page.validate().unwrap();
}

#[test]
fn hidden_opacity_outside_unit_range_is_rejected() {
    let mut page = basic_page();
    page.entrances[0].children[0].hidden.opacity = 1.5;
    assert!(page.validate().is_err());
}

#[test]
fn collapsing_motion_twice_equals_collapsing_once() {
    let hidden = HiddenStyle {
        opacity: 0.3,
        translate_x: -12.0,
        translate_y: 40.0,
        scale: 0.8,
        rotate_deg: -5.0,
    };
    let once = hidden.without_motion();
    assert_eq!(once.without_motion(), once);
    assert_eq!(once.opacity, 0.3);
    assert_eq!(once.translate_y, 0.0);
    assert_eq!(once.scale, 1.0);
}

#[test]
fn marquee_needs_positive_duration() {
    let mut page = basic_page();
    page.marquees[0].duration_sec = 0.0;
    assert!(page.validate().is_err());
}

#[test]
fn duplicate_marquee_id_is_rejected() {
    let mut page = basic_page();
    let dup = page.marquees[0].clone();
    page.marquees.push(dup);
    assert!(page.validate().is_err());
}

#[test]
fn minimal_json_fills_documented_defaults() {
    let json = r#"{
        "sections": ["home"],
        "entrances": [
            {"id": "intro", "container": "home", "children": [{"element": "title"}]}
        ]
    }"#;
    let page: PageComposition = serde_json::from_str(json).unwrap();
    page.validate().unwrap();

    let e = &page.entrances[0];
    assert_eq!(e.amount, 0.2);
    assert_eq!(e.base_delay_sec, 0.0);
    assert_eq!(e.stagger_sec, 0.15);
    assert_eq!(e.item_duration_sec, 0.8);
    assert!(matches!(e.ease, Ease::CubicBezier { .. }));

    let c = &e.children[0];
    assert_eq!(c.hidden.opacity, 0.0);
    assert_eq!(c.hidden.scale, 1.0);
    assert_eq!(c.hidden.translate_y, 0.0);

    assert_eq!(page.nav.section_threshold, 100.0);
    assert_eq!(page.nav.anchor_offset, 80.0);
    assert_eq!(page.nav.condensed_after, 50.0);
}

#[test]
fn json_round_trip_preserves_the_page() {
    let page = basic_page();
    let json = serde_json::to_string(&page).unwrap();
    let back: PageComposition = serde_json::from_str(&json).unwrap();
    back.validate().unwrap();
    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        serde_json::to_value(&back).unwrap()
    );
}
