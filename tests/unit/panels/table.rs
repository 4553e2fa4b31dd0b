use super::*;
use crate::render::recording::{Op, RecordingPainter};

const REGION: Region = Region::new(300, 750, 1600, 310);

#[test]
fn status_cells_are_colored_by_exact_match() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_table(&mut p, REGION, "Recent Listings", None, None).unwrap();

    assert_eq!(p.text_op("Available").unwrap().2, style::POSITIVE);
    assert_eq!(p.text_op("Reserved").unwrap().2, style::WARNING);
    assert_eq!(p.text_op("Sold").unwrap().2, style::NEGATIVE);
    assert_eq!(p.text_op("Stardust").unwrap().2, style::TEXT);
    assert_eq!(p.text_op("Status").unwrap().2, style::TEXT_LIGHT);
}

#[test]
fn cells_follow_column_widths() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_table(&mut p, REGION, "Recent Listings", None, None).unwrap();
    // content_y = 798; first row at 833.
    assert_eq!(p.text_op("#0042").unwrap().0, pt(316, 833));
    assert_eq!(p.text_op("Stardust").unwrap().0, pt(376, 833));
    assert_eq!(p.text_op("$84,500").unwrap().0, pt(626, 833));
    assert_eq!(p.text_op("Value").unwrap().0, pt(626, 803));
}

#[test]
fn odd_rows_are_striped() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_table(&mut p, REGION, "Recent Listings", None, None).unwrap();
    let stripes = p.count(|op| matches!(op, Op::FillRect(_, c) if *c == style::ROW_ALT));
    assert_eq!(stripes, 2);
    assert!(p.ops.contains(&Op::FillRect(rect(305, 860, 1895, 887), style::ROW_ALT)));
}

#[test]
fn arity_mismatch_fails_before_drawing() {
    let mut p = RecordingPainter::new(1920, 1080);
    let short: [&str; 4] = ["#1", "A", "B", "Sold"];
    let rows: [&[&str]; 1] = [&short];
    let err = draw_table(&mut p, REGION, "t", None, Some(&rows[..])).unwrap_err();
    assert!(matches!(err, WireframeError::Validation(_)));
    assert!(p.ops.is_empty());

    let headers = ["ID", "Name"];
    assert!(draw_table(&mut p, REGION, "t", Some(&headers[..]), Some(&[][..])).is_err());
    assert!(p.ops.is_empty());
}

#[test]
fn empty_rows_draw_headers_only() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_table(&mut p, REGION, "t", None, Some(&[][..])).unwrap();
    assert_eq!(p.texts().len(), 1 + DEFAULT_HEADERS.len());
}
