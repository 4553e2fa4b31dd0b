use crate::{
    foundation::core::Region,
    panels::{pt, rect},
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

/// Corner radius of every card.
pub const CARD_RADIUS: f64 = 8.0;
/// Height of the title band, measured from the card top to its divider.
pub const TITLE_BAND: i32 = 40;

const TITLE_FONT: FontSpec = FontSpec::bold(14);

/// Draw the rounded card frame, plus title and divider when `title` is set.
///
/// Returns the y coordinate where the caller's content starts: just below the divider for
/// titled cards, a small inset below the top edge otherwise.
pub fn draw_card(p: &mut dyn Painter, region: Region, title: Option<&str>) -> i32 {
    let Region { x, y, w, h } = region;
    let frame = rect(x, y, x + w, y + h);
    p.fill_rounded_rect(frame, CARD_RADIUS, style::CARD);
    p.stroke_rounded_rect(frame, CARD_RADIUS, style::BORDER, 1.0);

    match title {
        Some(title) => {
            p.text(pt(x + 16, y + 12), title, TITLE_FONT, style::TEXT);
            p.hline(f64::from(x), f64::from(x + w), f64::from(y + TITLE_BAND), style::BORDER);
            y + TITLE_BAND + 8
        }
        None => y + 12,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panels/card.rs"]
mod tests;
