use crate::{
    foundation::{
        core::{Point, Region},
        math::scale_floor,
    },
    panels::{card::draw_card, pt, rect},
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

/// Marker at a fractional position inside the map area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hotspot<'a> {
    pub fx: f64,
    pub fy: f64,
    pub label: &'a str,
}

pub const HOTSPOTS: [Hotspot<'static>; 5] = [
    Hotspot {
        fx: 0.2,
        fy: 0.3,
        label: "EU: 3.2K",
    },
    Hotspot {
        fx: 0.15,
        fy: 0.5,
        label: "NA: 4.1K",
    },
    Hotspot {
        fx: 0.7,
        fy: 0.4,
        label: "Asia: 2.8K",
    },
    Hotspot {
        fx: 0.8,
        fy: 0.7,
        label: "Oceania: 1.2K",
    },
    Hotspot {
        fx: 0.4,
        fy: 0.6,
        label: "Africa: 1.1K",
    },
];

pub const PLACEHOLDER: &str = "[World Map]";

const MARKER_RADIUS: f64 = 8.0;
const PLACEHOLDER_FONT: FontSpec = FontSpec::regular(12);
const LABEL_FONT: FontSpec = FontSpec::regular(9);

/// The placeholder area inside a map card whose content starts at `content_y`.
pub fn map_area(region: Region, content_y: i32) -> Region {
    Region::new(region.x + 16, content_y + 10, region.w - 32, region.h - 80)
}

/// `area origin + fraction * area size`, floored to whole pixels.
pub fn hotspot_position(area: Region, spot: &Hotspot<'_>) -> Point {
    pt(
        area.x + scale_floor(area.w, spot.fx),
        area.y + scale_floor(area.h, spot.fy),
    )
}

/// Titled card with a rounded placeholder area, a centered caption, and labelled hotspots.
pub fn draw_map(p: &mut dyn Painter, region: Region, title: &str) {
    let content_y = draw_card(p, region, Some(title));
    let area = map_area(region, content_y);
    let bounds = rect(area.x, area.y, area.right(), area.bottom());
    p.fill_rounded_rect(bounds, 4.0, style::MAP_FILL);
    p.stroke_rounded_rect(bounds, 4.0, style::BORDER, 1.0);

    let caption_w = p.measure_text(PLACEHOLDER, PLACEHOLDER_FONT);
    let center = bounds.center();
    p.text(
        Point::new(center.x - caption_w / 2.0, center.y - 10.0),
        PLACEHOLDER,
        PLACEHOLDER_FONT,
        style::TEXT_LIGHT,
    );

    for spot in &HOTSPOTS {
        let at = hotspot_position(area, spot);
        p.marker(at, MARKER_RADIUS, style::HIGHLIGHT, style::CARD, 2.0);
        p.text(
            Point::new(at.x + 12.0, at.y - 5.0),
            spot.label,
            LABEL_FONT,
            style::TEXT,
        );
    }
}
