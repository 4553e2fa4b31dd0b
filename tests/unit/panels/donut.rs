use super::*;
use crate::render::recording::{Op, RecordingPainter};

fn seg(fraction: f64) -> Segment<'static> {
    Segment {
        name: "s",
        fraction,
        color: style::HIGHLIGHT,
    }
}

#[test]
fn default_segments_close_the_circle() {
    let angles = donut_angles(&DEFAULT_SEGMENTS);
    assert_eq!(angles, vec![(0, 126), (126, 216), (216, 288), (288, 360)]);
}

#[test]
fn spans_are_contiguous_and_drift_is_bounded() {
    let segments = [seg(1.0 / 3.0), seg(1.0 / 3.0), seg(1.0 / 3.0)];
    let angles = donut_angles(&segments);
    for pair in angles.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
    let end = angles.last().unwrap().1;
    assert!((end - 360).abs() <= segments.len() as i32, "{end}");
}

#[test]
fn fractions_are_not_renormalized() {
    assert_eq!(donut_angles(&[seg(0.5)]), vec![(0, 180)]);
    assert_eq!(donut_angles(&[seg(f64::NAN), seg(0.25)]), vec![(0, 0), (0, 90)]);
    assert!(donut_angles(&[]).is_empty());
}

#[test]
fn out_of_range_fractions_clamp_to_a_full_turn() {
    assert_eq!(
        donut_angles(&[seg(1e9), seg(1e9)]),
        vec![(0, 360), (360, 720)]
    );
    assert_eq!(donut_angles(&[seg(-0.5), seg(0.5)]), vec![(0, 0), (0, 180)]);

    let mut p = RecordingPainter::new(1920, 1080);
    let segments = [seg(1e9), seg(f64::INFINITY)];
    draw_donut_chart(&mut p, Region::new(1268, 210, 632, 280), "t", Some(&segments[..]));
    assert!(p.count(|op| matches!(op, Op::FillPie(..))) >= 1);
}

#[test]
fn default_donut_geometry_and_legend() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_donut_chart(
        &mut p,
        Region::new(1268, 210, 632, 280),
        "Population by Habitat",
        None,
    );

    // Center (1268 + 210, 258 + 110), outer radius min(210, 110) - 20 = 90.
    let ring = rect(1388, 278, 1568, 458);
    assert!(p.ops.contains(&Op::FillPie(ring, 0.0, 126.0, DEFAULT_SEGMENTS[0].color)));
    assert_eq!(p.count(|op| matches!(op, Op::FillPie(..))), 4);
    assert!(p.ops.contains(&Op::FillEllipse(rect(1413, 303, 1543, 433), style::CARD)));

    assert!(p.text_op(CENTER_VALUE).is_some());
    assert!(p.text_op(CENTER_CAPTION).is_some());
    let (at, _, _) = p.text_op("Wild (35%)").unwrap();
    assert_eq!(at, Point::new(1624.0, 276.0));
    assert!(p.text_op("Reserve (20%)").is_some());
}

#[test]
fn tiny_card_skips_the_ring() {
    let mut p = RecordingPainter::new(200, 200);
    draw_donut_chart(&mut p, Region::new(0, 0, 60, 100), "t", None);
    assert_eq!(p.count(|op| matches!(op, Op::FillPie(..))), 0);
    assert!(p.text_op("Wild (35%)").is_some());
}
