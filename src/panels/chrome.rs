//! Static page chrome: the dark navigation column and the header band.

use crate::{
    foundation::core::Region,
    panels::{
        icons::{Icon, draw_icon},
        pt, rect,
    },
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub icon: Icon,
    pub label: &'a str,
    pub active: bool,
}

pub const NAV_ITEMS: [NavItem<'static>; 7] = [
    NavItem {
        icon: Icon::Diamond,
        label: "Dashboard",
        active: true,
    },
    NavItem {
        icon: Icon::DiamondOutline,
        label: "Population",
        active: false,
    },
    NavItem {
        icon: Icon::Diamond,
        label: "Trading",
        active: false,
    },
    NavItem {
        icon: Icon::Ring,
        label: "Analytics",
        active: false,
    },
    NavItem {
        icon: Icon::Square,
        label: "Inventory",
        active: false,
    },
    NavItem {
        icon: Icon::TriangleOutline,
        label: "Reports",
        active: false,
    },
    NavItem {
        icon: Icon::Star,
        label: "Settings",
        active: false,
    },
];

pub const NAV_PITCH: i32 = 45;
pub const LOGO: &str = "UniTrade";
pub const USER_NAME: &str = "Admin User";
pub const USER_EMAIL: &str = "admin@unitrade.io";

pub const PAGE_TITLE: &str = "Magic Unicorn Dashboard";
pub const BREADCRUMB: &str = "Home / Dashboard / Overview";
pub const SEARCH_HINT: &str = "Search...";
/// Fixed so repeated renders are byte-identical.
pub const TIMESTAMP: &str = "Jan 2, 2026 \u{2022} 10:45 AM";

const LOGO_FONT: FontSpec = FontSpec::bold(18);
const NAV_FONT: FontSpec = FontSpec::regular(13);
const TITLE_FONT: FontSpec = FontSpec::bold(20);
const SMALL_FONT: FontSpec = FontSpec::regular(11);

/// Dark column with logo, navigation list, and the signed-in user at the bottom.
pub fn draw_sidebar(p: &mut dyn Painter, region: Region) {
    let Region { x, y, w, h } = region;
    let (left, right) = (f64::from(x), f64::from(x + w));
    p.fill_rect(rect(x, y, x + w, y + h), style::SIDEBAR);

    draw_icon(p, Icon::Sparkle, pt(x + 20, y + 26), 18.0, style::HIGHLIGHT);
    p.text(pt(x + 46, y + 25), LOGO, LOGO_FONT, style::WHITE);
    p.hline(left, right, f64::from(y + 70), style::SIDEBAR_DIVIDER);

    let mut nav_y = y + 90;
    for item in &NAV_ITEMS {
        let (icon_color, text_color) = if item.active {
            p.fill_rect(rect(x, nav_y - 5, x + w, nav_y + 30), style::SIDEBAR_ACTIVE);
            p.fill_rect(rect(x, nav_y - 5, x + 4, nav_y + 30), style::HIGHLIGHT);
            (style::WHITE, style::WHITE)
        } else {
            (style::SIDEBAR_ICON, style::SIDEBAR_TEXT)
        };
        draw_icon(p, item.icon, pt(x + 24, nav_y + 2), 13.0, icon_color);
        p.text(pt(x + 50, nav_y), item.label, NAV_FONT, text_color);
        nav_y += NAV_PITCH;
    }

    let bottom = y + h;
    p.hline(left, right, f64::from(bottom - 70), style::SIDEBAR_DIVIDER);
    p.fill_ellipse(rect(x + 20, bottom - 50, x + 45, bottom - 25), style::AVATAR);
    p.text(pt(x + 55, bottom - 48), USER_NAME, FontSpec::regular(12), style::SIDEBAR_USER);
    p.text(
        pt(x + 55, bottom - 32),
        USER_EMAIL,
        FontSpec::regular(10),
        style::SIDEBAR_MUTED,
    );
}

/// White band with page title, breadcrumb, search box, notification glyphs, and the date.
pub fn draw_header(p: &mut dyn Painter, region: Region) {
    let Region { x, y, w, h } = region;
    let band = rect(x, y, x + w, y + h);
    p.fill_rect(band, style::CARD);
    p.stroke_rect(band, style::BORDER, 1.0);

    p.text(pt(x + 20, y + 25), PAGE_TITLE, TITLE_FONT, style::TEXT);
    p.text(pt(x + 20, y + 55), BREADCRUMB, SMALL_FONT, style::TEXT_LIGHT);

    let search_x = x + w - 400;
    let search = rect(search_x, y + 20, search_x + 200, y + 50);
    p.fill_rounded_rect(search, 20.0, style::BACKGROUND);
    p.stroke_rounded_rect(search, 20.0, style::BORDER, 1.0);
    draw_icon(p, Icon::Search, pt(search_x + 15, y + 29), 12.0, style::TEXT_LIGHT);
    p.text(pt(search_x + 33, y + 28), SEARCH_HINT, SMALL_FONT, style::TEXT_LIGHT);

    let icon_x = x + w - 150;
    for (i, icon) in [Icon::Bell, Icon::Chat, Icon::Gear].into_iter().enumerate() {
        draw_icon(p, icon, pt(icon_x + 35 * i as i32, y + 28), 16.0, style::ACCENT);
    }

    p.text(pt(x + w - 180, y + 55), TIMESTAMP, SMALL_FONT, style::TEXT_LIGHT);
}

#[cfg(test)]
#[path = "../../tests/unit/panels/chrome.rs"]
mod tests;
