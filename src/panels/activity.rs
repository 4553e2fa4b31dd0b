use crate::{
    foundation::core::Region,
    panels::{card::draw_card, pt, rect},
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

/// One timeline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity<'a> {
    pub time: &'a str,
    pub text: &'a str,
}

pub const ACTIVITIES: [Activity<'static>; 5] = [
    Activity {
        time: "10:42",
        text: "New listing: Aurora (#0039)",
    },
    Activity {
        time: "10:38",
        text: "Trade completed: $92,000",
    },
    Activity {
        time: "10:25",
        text: "Bid received: Moonbeam",
    },
    Activity {
        time: "10:12",
        text: "Price alert: Golden breed +5%",
    },
    Activity {
        time: "09:58",
        text: "New registration: Nebula",
    },
];

pub const ROW_PITCH: i32 = 32;

const TIME_FONT: FontSpec = FontSpec::regular(10);
const TEXT_FONT: FontSpec = FontSpec::regular(11);

/// Titled card with a vertical timeline: an 8px dot per entry, connectors between consecutive
/// dots, then the time and text beside each.
pub fn draw_activity_feed(p: &mut dyn Painter, region: Region, title: &str) {
    let Region { x, .. } = region;
    let content_y = draw_card(p, region, Some(title));

    for (i, entry) in ACTIVITIES.iter().enumerate() {
        let ay = content_y + 10 + i as i32 * ROW_PITCH;

        p.fill_ellipse(rect(x + 20, ay + 4, x + 28, ay + 12), style::HIGHLIGHT);
        if i + 1 < ACTIVITIES.len() {
            p.vline(
                f64::from(x + 24),
                f64::from(ay + 14),
                f64::from(ay + ROW_PITCH),
                style::BORDER,
            );
        }

        p.text(pt(x + 36, ay), entry.time, TIME_FONT, style::TEXT_LIGHT);
        p.text(pt(x + 80, ay), entry.text, TEXT_FONT, style::TEXT);
    }
}
