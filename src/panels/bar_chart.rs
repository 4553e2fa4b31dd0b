use crate::{
    foundation::{core::Region, math::scale_floor},
    panels::{card::draw_card, pt, rect},
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

pub const DEFAULT_LABELS: [&str; 5] = ["Rainbow", "Celestial", "Shadow", "Crystal", "Golden"];
pub const DEFAULT_VALUES: [f64; 5] = [0.8, 0.65, 0.5, 0.45, 0.35];

pub const BAR_HEIGHT: i32 = 28;
pub const BAR_SPACING: i32 = 8;
const BAR_RADIUS: f64 = 4.0;
const FONT: FontSpec = FontSpec::regular(11);

/// Filled length of a bar on a `track`-pixel track. `value` is clamped to `[0, 1]`.
pub fn bar_fill_width(track: i32, value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    scale_floor(track, value)
}

/// Whole-percent label for a normalized value.
pub fn percent_label(value: f64) -> String {
    let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    format!("{}%", (v * 100.0).round() as i64)
}

/// Titled card with one horizontal bar per `(label, value)` pair.
///
/// Labels and values pair up positionally and the shorter list wins. Rows whose bar would
/// cross the card's bottom edge are left out. Returns the number of rows drawn.
pub fn draw_bar_chart(
    p: &mut dyn Painter,
    region: Region,
    title: &str,
    labels: Option<&[&str]>,
    values: Option<&[f64]>,
) -> usize {
    let Region { x, w, .. } = region;
    let labels = labels.unwrap_or(&DEFAULT_LABELS[..]);
    let values = values.unwrap_or(&DEFAULT_VALUES[..]);

    let content_y = draw_card(p, region, Some(title));
    let top = content_y + 10;
    let track_x = x + 90;
    let track_w = w - 120;

    let mut drawn = 0;
    for (i, (label, &value)) in labels.iter().zip(values).enumerate() {
        let by = top + i as i32 * (BAR_HEIGHT + BAR_SPACING);
        if by + BAR_HEIGHT > region.bottom() {
            tracing::debug!(
                skipped = labels.len().min(values.len()) - i,
                "bar chart rows clipped at card edge"
            );
            break;
        }

        p.text(pt(x + 16, by + 6), label, FONT, style::TEXT);
        p.fill_rounded_rect(
            rect(track_x, by, track_x + track_w, by + BAR_HEIGHT),
            BAR_RADIUS,
            style::CHART_FILL,
        );
        let fill_w = bar_fill_width(track_w, value);
        if fill_w > 0 {
            p.fill_rounded_rect(
                rect(track_x, by, track_x + fill_w, by + BAR_HEIGHT),
                BAR_RADIUS,
                style::HIGHLIGHT,
            );
        }
        p.text(
            pt(track_x + track_w + 8, by + 6),
            &percent_label(value),
            FONT,
            style::TEXT_LIGHT,
        );
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/panels/bar_chart.rs"]
mod tests;
