use crate::{
    foundation::core::{Point, Region, Rgba8},
    panels::{card::draw_card, rect},
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

/// One donut slice: legend name, share of the whole, and fill color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<'a> {
    pub name: &'a str,
    pub fraction: f64,
    pub color: Rgba8,
}

pub const DEFAULT_SEGMENTS: [Segment<'static>; 4] = [
    Segment {
        name: "Wild",
        fraction: 0.35,
        color: Rgba8::rgb(147, 112, 219),
    },
    Segment {
        name: "Captive",
        fraction: 0.25,
        color: Rgba8::rgb(180, 130, 200),
    },
    Segment {
        name: "Sanctuary",
        fraction: 0.20,
        color: Rgba8::rgb(200, 160, 220),
    },
    Segment {
        name: "Reserve",
        fraction: 0.20,
        color: Rgba8::rgb(220, 190, 240),
    },
];

pub const RING_THICKNESS: i32 = 25;
pub const CENTER_VALUE: &str = "12.4K";
pub const CENTER_CAPTION: &str = "Total";

const VALUE_FONT: FontSpec = FontSpec::bold(20);
const CAPTION_FONT: FontSpec = FontSpec::regular(10);
const LEGEND_FONT: FontSpec = FontSpec::regular(11);
const SWATCH: i32 = 12;
const LEGEND_PITCH: i32 = 28;

/// Integer-degree `(start, end)` spans, laid end to end from 0.
///
/// Each span is `360 * fraction` rounded to whole degrees and clamped to `0..=360`; fractions
/// are neither validated nor renormalized, so the last end angle drifts from 360 by at most one
/// degree per segment.
pub fn donut_angles(segments: &[Segment<'_>]) -> Vec<(i32, i32)> {
    let mut start: i32 = 0;
    segments
        .iter()
        .map(|seg| {
            let span = if seg.fraction.is_finite() {
                (360.0 * seg.fraction).round().clamp(0.0, 360.0) as i32
            } else {
                0
            };
            let end = start.saturating_add(span);
            let out = (start, end);
            start = end;
            out
        })
        .collect()
}

/// Titled card with a ring of slices, a center total, and a legend to the right.
/// `None` draws [`DEFAULT_SEGMENTS`].
pub fn draw_donut_chart(
    p: &mut dyn Painter,
    region: Region,
    title: &str,
    segments: Option<&[Segment<'_>]>,
) {
    let Region { x, w, h, .. } = region;
    let segments = segments.unwrap_or(&DEFAULT_SEGMENTS[..]);

    let content_y = draw_card(p, region, Some(title));
    let cx = x + w / 3;
    let cy = content_y + (h - 60) / 2;
    let outer = (w / 3).min((h - 60) / 2) - 20;
    let inner = outer - RING_THICKNESS;

    if outer > 0 {
        let ring = rect(cx - outer, cy - outer, cx + outer, cy + outer);
        for (seg, (start, end)) in segments.iter().zip(donut_angles(segments)) {
            p.fill_pie(ring, f64::from(start), f64::from(end), seg.color);
        }
        if inner > 0 {
            p.fill_ellipse(rect(cx - inner, cy - inner, cx + inner, cy + inner), style::CARD);
        }
    }

    let (cxf, cyf) = (f64::from(cx), f64::from(cy));
    let value_w = p.measure_text(CENTER_VALUE, VALUE_FONT);
    p.text(
        Point::new(cxf - value_w / 2.0, cyf - 15.0),
        CENTER_VALUE,
        VALUE_FONT,
        style::TEXT,
    );
    let caption_w = p.measure_text(CENTER_CAPTION, CAPTION_FONT);
    p.text(
        Point::new(cxf - caption_w / 2.0, cyf + 10.0),
        CENTER_CAPTION,
        CAPTION_FONT,
        style::TEXT_LIGHT,
    );

    let legend_x = x + w / 2 + 20;
    let legend_y = content_y + 20;
    for (i, seg) in segments.iter().enumerate() {
        let ly = legend_y + i as i32 * LEGEND_PITCH;
        p.fill_rect(rect(legend_x, ly, legend_x + SWATCH, ly + SWATCH), seg.color);
        let pct = if seg.fraction.is_finite() {
            (seg.fraction * 100.0).round() as i64
        } else {
            0
        };
        p.text(
            Point::new(f64::from(legend_x + 20), f64::from(ly - 2)),
            &format!("{} ({pct}%)", seg.name),
            LEGEND_FONT,
            style::TEXT,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panels/donut.rs"]
mod tests;
