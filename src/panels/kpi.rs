use crate::{
    foundation::core::{Point, Region},
    panels::{
        card::draw_card,
        icons::{Icon, draw_icon},
        pt,
    },
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

/// One KPI card's content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kpi<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub change: Option<&'a str>,
    pub icon: Icon,
}

/// The four headline metrics, left to right.
pub const DEFAULT_KPIS: [Kpi<'static>; 4] = [
    Kpi {
        label: "Total Population",
        value: "12,847",
        change: Some("+3.2%"),
        icon: Icon::Sparkle,
    },
    Kpi {
        label: "Active Trades",
        value: "1,284",
        change: Some("+12.5%"),
        icon: Icon::TrendUp,
    },
    Kpi {
        label: "Avg. Trade Value",
        value: "$87,420",
        change: Some("-2.1%"),
        icon: Icon::Coin,
    },
    Kpi {
        label: "New Registrations",
        value: "342",
        change: Some("+8.7%"),
        icon: Icon::Star,
    },
];

const VALUE_FONT: FontSpec = FontSpec::bold(28);
const LABEL_FONT: FontSpec = FontSpec::regular(12);
const ICON_SIZE: f64 = 24.0;

/// Untitled card with icon, big value, label, and an optional right-aligned delta.
///
/// The delta is green when `change` starts with `+` and red otherwise; nothing else about the
/// string is interpreted.
pub fn draw_kpi(
    p: &mut dyn Painter,
    region: Region,
    label: &str,
    value: &str,
    change: Option<&str>,
    icon: Icon,
) {
    let Region { x, y, w, .. } = region;
    draw_card(p, region, None);

    draw_icon(p, icon, pt(x + 16, y + 20), ICON_SIZE, style::HIGHLIGHT);
    p.text(pt(x + 50, y + 16), value, VALUE_FONT, style::TEXT);
    p.text(pt(x + 50, y + 50), label, LABEL_FONT, style::TEXT_LIGHT);

    if let Some(change) = change {
        let width = p.measure_text(change, LABEL_FONT);
        let right = f64::from(x + w - 16);
        p.text(
            Point::new(right - width, f64::from(y + 20)),
            change,
            LABEL_FONT,
            style::delta_color(change),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panels/kpi.rs"]
mod tests;
