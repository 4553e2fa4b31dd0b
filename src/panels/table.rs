use crate::{
    foundation::{
        core::Region,
        error::{WireframeError, WireframeResult},
    },
    panels::{card::draw_card, pt, rect},
    render::painter::Painter,
    style,
    text::fonts::FontSpec,
};

pub const COLUMN_WIDTHS: [i32; 5] = [60, 90, 80, 80, 80];
pub const ROW_HEIGHT: i32 = 32;

pub const DEFAULT_HEADERS: [&str; 5] = ["ID", "Name", "Breed", "Status", "Value"];
pub const DEFAULT_ROWS: [[&str; 5]; 5] = [
    ["#0042", "Stardust", "Celestial", "Available", "$84,500"],
    ["#0041", "Moonbeam", "Rainbow", "Reserved", "$92,000"],
    ["#0040", "Twilight", "Shadow", "Sold", "$76,800"],
    ["#0039", "Aurora", "Crystal", "Available", "$88,200"],
    ["#0038", "Nebula", "Golden", "Reserved", "$125,000"],
];

const HEADER_FONT: FontSpec = FontSpec::bold(11);
const CELL_FONT: FontSpec = FontSpec::regular(11);

/// Require `headers` and every row to have one cell per column width.
pub fn check_arity(headers: &[&str], rows: &[&[&str]]) -> WireframeResult<()> {
    if headers.len() != COLUMN_WIDTHS.len() {
        return Err(WireframeError::validation(format!(
            "table has {} headers but {} columns",
            headers.len(),
            COLUMN_WIDTHS.len()
        )));
    }
    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != headers.len())
    {
        return Err(WireframeError::validation(format!(
            "table row {i} has {} cells, expected {}",
            row.len(),
            headers.len()
        )));
    }
    Ok(())
}

/// Titled card with a bold header line, a divider, and striped rows colored by status.
///
/// Arity is checked before anything is drawn. Rows that would run past the card's bottom
/// edge are left out.
pub fn draw_table(
    p: &mut dyn Painter,
    region: Region,
    title: &str,
    headers: Option<&[&str]>,
    rows: Option<&[&[&str]]>,
) -> WireframeResult<()> {
    let Region { x, w, .. } = region;
    let headers = headers.unwrap_or(&DEFAULT_HEADERS[..]);
    let default_rows: Vec<&[&str]> = DEFAULT_ROWS.iter().map(|r| &r[..]).collect();
    let rows = rows.unwrap_or(&default_rows[..]);
    check_arity(headers, rows)?;

    let content_y = draw_card(p, region, Some(title));

    let mut hx = x + 16;
    for (header, width) in headers.iter().zip(COLUMN_WIDTHS) {
        p.text(pt(hx, content_y + 5), header, HEADER_FONT, style::TEXT_LIGHT);
        hx += width;
    }
    p.hline(
        f64::from(x + 10),
        f64::from(x + w - 10),
        f64::from(content_y + 25),
        style::BORDER,
    );

    for (ri, row) in rows.iter().enumerate() {
        let ry = content_y + 35 + ri as i32 * ROW_HEIGHT;
        if ry + ROW_HEIGHT - 10 > region.bottom() {
            tracing::debug!(skipped = rows.len() - ri, "table rows clipped at card edge");
            break;
        }
        if ri % 2 == 1 {
            p.fill_rect(rect(x + 5, ry - 5, x + w - 5, ry + ROW_HEIGHT - 10), style::ROW_ALT);
        }
        let mut rx = x + 16;
        for (cell, width) in row.iter().zip(COLUMN_WIDTHS) {
            p.text(pt(rx, ry), cell, CELL_FONT, style::status_color(cell));
            rx += width;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/panels/table.rs"]
mod tests;
