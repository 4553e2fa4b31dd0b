use super::*;
use crate::render::recording::{Op, RecordingPainter};

const SIDEBAR: Region = Region::new(0, 0, 280, 1080);
const HEADER: Region = Region::new(280, 0, 1640, 80);

#[test]
fn only_the_active_item_is_highlighted() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_sidebar(&mut p, SIDEBAR);

    assert!(p.ops.contains(&Op::FillRect(rect(0, 85, 280, 120), style::SIDEBAR_ACTIVE)));
    assert!(p.ops.contains(&Op::FillRect(rect(0, 85, 4, 120), style::HIGHLIGHT)));
    assert_eq!(
        p.count(|op| matches!(op, Op::FillRect(_, c) if *c == style::SIDEBAR_ACTIVE)),
        1
    );
    assert_eq!(p.text_op("Dashboard").unwrap().2, style::WHITE);
    assert_eq!(p.text_op("Settings").unwrap().2, style::SIDEBAR_TEXT);
}

#[test]
fn nav_items_use_fixed_pitch() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_sidebar(&mut p, SIDEBAR);
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let (at, _, _) = p.text_op(item.label).unwrap();
        assert_eq!(at, pt(50, 90 + NAV_PITCH * i as i32));
    }
}

#[test]
fn user_footer_hugs_the_bottom() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_sidebar(&mut p, SIDEBAR);
    assert_eq!(p.text_op(USER_NAME).unwrap().0, pt(55, 1032));
    assert_eq!(p.text_op(USER_EMAIL).unwrap().0, pt(55, 1048));
    assert!(p.ops.contains(&Op::FillEllipse(rect(20, 1030, 45, 1055), style::AVATAR)));
    assert!(p.text_op(LOGO).is_some());
}

#[test]
fn header_carries_static_text() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_header(&mut p, HEADER);

    assert_eq!(p.text_op(PAGE_TITLE).unwrap().0, pt(300, 25));
    assert_eq!(p.text_op(BREADCRUMB).unwrap().0, pt(300, 55));
    assert_eq!(p.text_op(TIMESTAMP).unwrap().0, pt(1740, 55));
    assert!(p.ops.contains(&Op::FillRoundedRect(
        rect(1520, 20, 1720, 50),
        20.0,
        style::BACKGROUND
    )));
}

#[test]
fn header_glyphs_are_shapes_not_text() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_header(&mut p, HEADER);
    let texts: Vec<&str> = p.texts().into_iter().map(|(s, _, _)| s).collect();
    assert_eq!(texts, vec![PAGE_TITLE, BREADCRUMB, SEARCH_HINT, TIMESTAMP]);
}
