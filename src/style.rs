//! Read-only palette and the two content-driven color rules (KPI deltas and table statuses).

use crate::foundation::core::Rgba8;

/// Page background behind the cards.
pub const BACKGROUND: Rgba8 = Rgba8::rgb(248, 249, 250);
/// Card fill.
pub const CARD: Rgba8 = Rgba8::rgb(255, 255, 255);
/// Card outlines and dividers.
pub const BORDER: Rgba8 = Rgba8::rgb(200, 200, 200);
/// Primary text.
pub const TEXT: Rgba8 = Rgba8::rgb(60, 60, 60);
/// Secondary text (labels, axis ticks, timestamps).
pub const TEXT_LIGHT: Rgba8 = Rgba8::rgb(120, 120, 120);
/// Neutral accent for glyph outlines.
pub const ACCENT: Rgba8 = Rgba8::rgb(100, 100, 100);
/// Bar tracks.
pub const CHART_FILL: Rgba8 = Rgba8::rgb(220, 220, 220);
/// Single highlight hue used for series, markers and the active nav item.
pub const HIGHLIGHT: Rgba8 = Rgba8::rgb(180, 130, 200);
/// Translucent highlight under the line chart.
pub const HIGHLIGHT_WASH: Rgba8 = HIGHLIGHT.with_alpha(50);

pub const POSITIVE: Rgba8 = Rgba8::rgb(46, 125, 50);
pub const WARNING: Rgba8 = Rgba8::rgb(245, 124, 0);
pub const NEGATIVE: Rgba8 = Rgba8::rgb(198, 40, 40);

pub const GRID_LINE: Rgba8 = Rgba8::rgb(240, 240, 240);
pub const ROW_ALT: Rgba8 = Rgba8::rgb(250, 250, 250);
pub const MAP_FILL: Rgba8 = Rgba8::rgb(240, 242, 245);

pub const SIDEBAR: Rgba8 = Rgba8::rgb(45, 45, 55);
pub const SIDEBAR_ACTIVE: Rgba8 = Rgba8::rgb(60, 60, 75);
pub const SIDEBAR_DIVIDER: Rgba8 = Rgba8::rgb(60, 60, 70);
pub const SIDEBAR_ICON: Rgba8 = Rgba8::rgb(200, 200, 200);
pub const SIDEBAR_TEXT: Rgba8 = Rgba8::rgb(180, 180, 180);
pub const SIDEBAR_USER: Rgba8 = Rgba8::rgb(220, 220, 220);
pub const SIDEBAR_MUTED: Rgba8 = Rgba8::rgb(140, 140, 140);
pub const AVATAR: Rgba8 = Rgba8::rgb(100, 100, 120);
pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);

/// Color of a KPI change indicator.
///
/// Only the leading character is inspected: `+` is positive, anything else is negative.
pub fn delta_color(change: &str) -> Rgba8 {
    if change.starts_with('+') {
        POSITIVE
    } else {
        NEGATIVE
    }
}

/// Text color for a table cell, by exact match on the status vocabulary.
pub fn status_color(cell: &str) -> Rgba8 {
    match cell {
        "Available" => POSITIVE,
        "Reserved" => WARNING,
        "Sold" => NEGATIVE,
        _ => TEXT,
    }
}
