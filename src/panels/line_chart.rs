use crate::{
    foundation::{
        core::{Point, Region},
        error::{WireframeError, WireframeResult},
        math::scale_floor,
    },
    panels::{card::draw_card, pt},
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

/// Twelve monthly values, normalized to `[0, 1]`.
pub const DEFAULT_SERIES: [f64; 12] = [
    0.3, 0.35, 0.4, 0.38, 0.5, 0.55, 0.52, 0.6, 0.65, 0.7, 0.68, 0.75,
];

pub const Y_LABELS: [&str; 5] = ["100K", "75K", "50K", "25K", "0"];
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const TICK_FONT: FontSpec = FontSpec::regular(10);
const MARKER_RADIUS: f64 = 4.0;

/// Plot area of a line chart: top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotArea {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PlotArea {
    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

/// Map `series` onto `area`.
///
/// Point `i` of `n` sits at `x + w * i / (n - 1)`; a single value is centered horizontally.
/// Values are clamped to `[0, 1]`. Empty or non-finite input is rejected.
pub fn line_points(area: PlotArea, series: &[f64]) -> WireframeResult<Vec<Point>> {
    if series.is_empty() {
        return Err(WireframeError::validation("line chart series is empty"));
    }
    if let Some(i) = series.iter().position(|v| !v.is_finite()) {
        return Err(WireframeError::validation(format!(
            "line chart value {i} is not finite"
        )));
    }

    let last = series.len() as i64 - 1;
    let points = series
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let px = if last == 0 {
                area.x + area.w / 2
            } else {
                area.x + (i64::from(area.w) * i as i64 / last) as i32
            };
            let py = area.bottom() - scale_floor(area.h, v);
            pt(px, py)
        })
        .collect();
    Ok(points)
}

/// Titled card with axes, gridlines, month ticks, the filled area under `series`, the line,
/// and a marker per point. `None` plots [`DEFAULT_SERIES`].
pub fn draw_line_chart(
    p: &mut dyn Painter,
    region: Region,
    title: &str,
    series: Option<&[f64]>,
) -> WireframeResult<()> {
    let Region { x, w, h, .. } = region;
    let series = series.unwrap_or(&DEFAULT_SERIES[..]);

    // Geometry and data are checked before anything is drawn.
    let probe = PlotArea {
        x: x + 40,
        y: 0,
        w: w - 60,
        h: h - 80,
    };
    line_points(probe, series)?;

    let content_y = draw_card(p, region, Some(title));
    let area = PlotArea {
        y: content_y + 10,
        ..probe
    };
    let (left, right) = (f64::from(area.x), f64::from(area.x + area.w));

    for (i, label) in Y_LABELS.iter().enumerate() {
        let ly = area.y + area.h * i as i32 / 4;
        p.hline(left, right, f64::from(ly), style::GRID_LINE);
        p.text(pt(area.x - 35, ly - 5), label, TICK_FONT, style::TEXT_LIGHT);
    }
    p.vline(left, f64::from(area.y), f64::from(area.bottom()), style::BORDER);
    p.hline(left, right + 1.0, f64::from(area.bottom()), style::BORDER);

    for (i, month) in MONTHS.iter().enumerate() {
        let lx = area.x + area.w * i as i32 / 11;
        p.text(pt(lx - 10, area.bottom() + 8), month, TICK_FONT, style::TEXT_LIGHT);
    }

    let points = line_points(area, series)?;
    let baseline = f64::from(area.bottom());
    let mut fill = points.clone();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        fill.push(Point::new(last.x, baseline));
        fill.push(Point::new(first.x, baseline));
    }
    p.fill_polygon(&fill, style::HIGHLIGHT_WASH);

    for pair in points.windows(2) {
        p.line(pair[0], pair[1], style::HIGHLIGHT, 2.0);
    }
    for &point in &points {
        p.marker(point, MARKER_RADIUS, style::HIGHLIGHT, style::CARD, 2.0);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/panels/line_chart.rs"]
mod tests;
