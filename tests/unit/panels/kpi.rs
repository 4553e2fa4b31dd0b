use super::*;
use crate::render::recording::RecordingPainter;

const REGION: Region = Region::new(300, 100, 385, 90);

#[test]
fn positive_change_is_green_and_right_aligned() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_kpi(&mut p, REGION, "Total Population", "12,847", Some("+3.2%"), Icon::Sparkle);

    let (origin, font, color) = p.text_op("+3.2%").unwrap();
    assert_eq!(color, style::POSITIVE);
    assert_eq!(font, LABEL_FONT);
    // Bitmap advance of five characters at 12px is 36px.
    assert_eq!(origin.x, f64::from(REGION.right() - 16) - 36.0);
    assert_eq!(origin.y, 120.0);
}

#[test]
fn negative_change_is_red() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_kpi(&mut p, REGION, "Avg. Trade Value", "$87,420", Some("-2.1%"), Icon::Coin);
    assert_eq!(p.text_op("-2.1%").unwrap().2, style::NEGATIVE);
}

#[test]
fn missing_change_draws_no_delta() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_kpi(&mut p, REGION, "Active Trades", "1,284", None, Icon::TrendUp);
    let texts: Vec<&str> = p.texts().into_iter().map(|(s, _, _)| s).collect();
    assert_eq!(texts, vec!["1,284", "Active Trades"]);
}

#[test]
fn value_and_label_positions() {
    let mut p = RecordingPainter::new(1920, 1080);
    draw_kpi(&mut p, REGION, "New Registrations", "342", Some("+8.7%"), Icon::Star);
    let (value_at, value_font, _) = p.text_op("342").unwrap();
    assert_eq!(value_at, pt(350, 116));
    assert_eq!(value_font, VALUE_FONT);
    let (label_at, _, label_color) = p.text_op("New Registrations").unwrap();
    assert_eq!(label_at, pt(350, 150));
    assert_eq!(label_color, style::TEXT_LIGHT);
}

#[test]
fn default_kpis_carry_a_change_each() {
    assert!(DEFAULT_KPIS.iter().all(|k| k.change.is_some()));
    assert_eq!(DEFAULT_KPIS[2].change, Some("-2.1%"));
}
