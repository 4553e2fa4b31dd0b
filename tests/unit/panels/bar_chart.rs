use super::*;
use crate::render::recording::{Op, RecordingPainter};

#[test]
fn fill_width_is_monotonic_and_bounded() {
    assert_eq!(bar_fill_width(426, 0.0), 0);
    assert_eq!(bar_fill_width(426, 1.0), 426);
    assert!((bar_fill_width(426, 0.5) - 213).abs() <= 1);
    assert_eq!(bar_fill_width(426, 1.7), 426);
    assert_eq!(bar_fill_width(426, -0.2), 0);
    assert_eq!(bar_fill_width(426, f64::NAN), 0);

    let mut prev = 0;
    for step in 0..=100 {
        let w = bar_fill_width(426, f64::from(step) / 100.0);
        assert!(w >= prev);
        prev = w;
    }
}

#[test]
fn percent_labels_round() {
    assert_eq!(percent_label(0.8), "80%");
    assert_eq!(percent_label(0.455), "46%");
    assert_eq!(percent_label(1.5), "100%");
}

#[test]
fn shorter_list_wins() {
    let mut p = RecordingPainter::new(1920, 1080);
    let drawn = draw_bar_chart(
        &mut p,
        Region::new(0, 0, 500, 400),
        "Breeds",
        Some(&["A", "B", "C"][..]),
        Some(&[0.1, 0.2][..]),
    );
    assert_eq!(drawn, 2);
    assert!(p.text_op("C").is_none());
    assert_eq!(p.text_op("20%").unwrap().0, pt(478, 100));
}

#[test]
fn rows_past_the_card_edge_are_clipped() {
    let mut p = RecordingPainter::new(1920, 1080);
    let region = Region::new(300, 510, 546, 220);
    let drawn = draw_bar_chart(&mut p, region, "Breed Popularity", None, None);
    assert_eq!(drawn, 4);
    assert!(p.text_op("Golden").is_none());
    for op in &p.ops {
        if let Op::FillRoundedRect(r, _, _) = op {
            assert!(r.y1 <= f64::from(region.bottom()), "{r:?}");
        }
    }
}

#[test]
fn bar_geometry_follows_value() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_bar_chart(
        &mut p,
        Region::new(0, 0, 220, 200),
        "t",
        Some(&["Half", "None"][..]),
        Some(&[0.5, 0.0][..]),
    );
    // Track 100px wide at x=90; first row at y=58.
    assert!(p.ops.contains(&Op::FillRoundedRect(rect(90, 58, 190, 86), 4.0, style::CHART_FILL)));
    assert!(p.ops.contains(&Op::FillRoundedRect(rect(90, 58, 140, 86), 4.0, style::HIGHLIGHT)));
    assert_eq!(p.count(|op| matches!(op, Op::FillRoundedRect(_, _, c) if *c == style::HIGHLIGHT)), 1);
}
