use crate::{
    config::DashboardConfig,
    foundation::core::Region,
    foundation::error::{WireframeError, WireframeResult},
    foundation::math::percent_floor,
};

/// Every panel the composer draws, in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PanelKind {
    Sidebar,
    Header,
    Kpi(u8),
    LineChart,
    DonutChart,
    BarChart,
    Map,
    ActivityFeed,
    Table,
}

/// Resolved rectangle for every panel of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardLayout {
    pub sidebar: Region,
    pub header: Region,
    /// Region holding all content rows (right of the sidebar, below the header, inside padding).
    pub content: Region,
    pub kpis: [Region; 4],
    pub line_chart: Region,
    pub donut_chart: Region,
    pub bar_chart: Region,
    pub map: Region,
    pub activity: Region,
    pub table: Region,
}

impl DashboardLayout {
    /// All panels with their regions, in paint order.
    pub fn panels(&self) -> Vec<(PanelKind, Region)> {
        let mut out = vec![
            (PanelKind::Sidebar, self.sidebar),
            (PanelKind::Header, self.header),
        ];
        for (i, r) in self.kpis.iter().enumerate() {
            out.push((PanelKind::Kpi(i as u8), *r));
        }
        out.extend([
            (PanelKind::LineChart, self.line_chart),
            (PanelKind::DonutChart, self.donut_chart),
            (PanelKind::BarChart, self.bar_chart),
            (PanelKind::Map, self.map),
            (PanelKind::ActivityFeed, self.activity),
            (PanelKind::Table, self.table),
        ]);
        out
    }

    /// Content rows, top to bottom; cells within a row are ordered left to right.
    pub fn rows(&self) -> [Vec<Region>; 4] {
        [
            self.kpis.to_vec(),
            vec![self.line_chart, self.donut_chart],
            vec![self.bar_chart, self.map, self.activity],
            vec![self.table],
        ]
    }
}

/// Row split of the chart row (line chart / donut), in percent.
pub const CHART_ROW_SPLIT: [u32; 2] = [60, 40];
/// Row split of the detail row (bars / map / activity), in percent.
pub const DETAIL_ROW_SPLIT: [u32; 3] = [35, 40, 25];
/// Row split of the KPI row, in percent.
pub const KPI_ROW_SPLIT: [u32; 4] = [25, 25, 25, 25];

/// Partition the canvas into sidebar, header and four stacked content rows.
#[tracing::instrument(skip(cfg), fields(w = cfg.canvas.width, h = cfg.canvas.height))]
pub fn compute_layout(cfg: &DashboardConfig) -> WireframeResult<DashboardLayout> {
    cfg.validate()?;

    let canvas_w = cfg.canvas.width as i32;
    let canvas_h = cfg.canvas.height as i32;
    let pad = cfg.padding;

    let sidebar = Region::new(0, 0, cfg.sidebar_width, canvas_h);
    let header = Region::new(
        cfg.sidebar_width,
        0,
        canvas_w - cfg.sidebar_width,
        cfg.header_height,
    );

    let content = Region::new(
        cfg.sidebar_width + pad,
        cfg.header_height + pad,
        canvas_w - cfg.sidebar_width - 2 * pad,
        canvas_h - cfg.header_height - 2 * pad,
    );

    let mut rows = stack_rows(
        content,
        &[
            cfg.kpi_height,
            cfg.chart_row_height,
            cfg.detail_row_height,
        ],
        pad,
    )
    .into_iter();
    let (Some(kpi_row), Some(chart_row), Some(detail_row), Some(table_row)) =
        (rows.next(), rows.next(), rows.next(), rows.next())
    else {
        return Err(WireframeError::layout("row stacking produced fewer than 4 rows"));
    };

    let kpis = split_row(kpi_row, &KPI_ROW_SPLIT, cfg.gutter)?;
    let charts = split_row(chart_row, &CHART_ROW_SPLIT, cfg.gutter)?;
    let details = split_row(detail_row, &DETAIL_ROW_SPLIT, cfg.gutter)?;

    let layout = DashboardLayout {
        sidebar,
        header,
        content,
        kpis: [kpis[0], kpis[1], kpis[2], kpis[3]],
        line_chart: charts[0],
        donut_chart: charts[1],
        bar_chart: details[0],
        map: details[1],
        activity: details[2],
        table: table_row,
    };

    let bounds = cfg.canvas.bounds();
    for (kind, region) in layout.panels() {
        if region.is_empty() || !bounds.contains(region) {
            return Err(WireframeError::layout(format!(
                "{kind:?} region {region:?} does not fit the canvas"
            )));
        }
        tracing::debug!(?kind, ?region, "panel region");
    }
    Ok(layout)
}

/// Stack fixed-height rows top to bottom with `gap` between them; the last row takes the rest.
fn stack_rows(area: Region, heights: &[i32], gap: i32) -> Vec<Region> {
    let mut out = Vec::with_capacity(heights.len() + 1);
    let mut y = area.y;
    for &h in heights {
        out.push(Region::new(area.x, y, area.w, h));
        y += h + gap;
    }
    out.push(Region::new(area.x, y, area.w, area.bottom() - y));
    out
}

/// Split `row` horizontally into cells of the given percentages with `gutter` pixels between cells.
///
/// The gutters are taken out first; each cell then gets `floor(avail * pct / 100)` pixels and
/// starts at `floor(avail * cumulative_pct / 100)` plus the gutters before it. Flooring both the
/// start and the width keeps every gap at least `gutter` wide, and the accumulated rounding loss
/// is under one pixel per cell.
pub fn split_row(row: Region, percents: &[u32], gutter: i32) -> WireframeResult<Vec<Region>> {
    if percents.is_empty() {
        return Err(WireframeError::layout("row split needs at least one cell"));
    }
    let total: u32 = percents.iter().sum();
    if total != 100 {
        return Err(WireframeError::layout(format!(
            "row split percentages sum to {total}, expected 100"
        )));
    }

    let gutters = gutter * (percents.len() as i32 - 1);
    let avail = row.w - gutters;
    if avail < percents.len() as i32 {
        return Err(WireframeError::layout(format!(
            "row of {}px cannot hold {} cells with {gutter}px gutters",
            row.w,
            percents.len()
        )));
    }

    let mut cumulative = 0u32;
    let mut out = Vec::with_capacity(percents.len());
    for (i, &pct) in percents.iter().enumerate() {
        let x = row.x + percent_floor(avail, cumulative) + gutter * i as i32;
        out.push(Region::new(x, row.y, percent_floor(avail, pct), row.h));
        cumulative += pct;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
