use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::DashboardConfig,
    encode::png::write_png,
    foundation::error::{WireframeError, WireframeResult},
    layout::solver::{DashboardLayout, PanelKind, compute_layout},
    panels::{
        activity::draw_activity_feed,
        bar_chart::draw_bar_chart,
        chrome::{draw_header, draw_sidebar},
        donut::draw_donut_chart,
        kpi::{DEFAULT_KPIS, draw_kpi},
        line_chart::draw_line_chart,
        map::draw_map,
        table::draw_table,
    },
    render::{cpu::CpuPainter, frame::Frame, painter::Painter},
    style,
    text::fonts::FontBook,
};

pub const LINE_CHART_TITLE: &str = "Population Trend (12 Months)";
pub const DONUT_TITLE: &str = "Population by Habitat";
pub const BAR_CHART_TITLE: &str = "Breed Popularity";
pub const MAP_TITLE: &str = "Geographic Distribution";
pub const ACTIVITY_TITLE: &str = "Recent Activity";
pub const TABLE_TITLE: &str = "Recent Listings";

/// Render the default dashboard next to the running executable and return the file path.
pub fn compose() -> WireframeResult<PathBuf> {
    let cfg = DashboardConfig::default();
    let path = default_output_path(&cfg)?;
    compose_to(&path, &cfg)?;
    Ok(path)
}

/// `<directory of the current executable>/<cfg.output_file_name>`.
pub fn default_output_path(cfg: &DashboardConfig) -> WireframeResult<PathBuf> {
    let exe = std::env::current_exe().context("locate running executable")?;
    let dir = exe
        .parent()
        .ok_or_else(|| WireframeError::encode("executable path has no parent directory"))?;
    Ok(dir.join(&cfg.output_file_name))
}

/// Render with `cfg` and write the PNG to `path`, replacing any existing file.
///
/// Fonts are looked up in the system database plus a `fonts/` directory beside `path`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn compose_to(path: &Path, cfg: &DashboardConfig) -> WireframeResult<Frame> {
    let mut fonts = FontBook::system();
    if let Some(dir) = path.parent() {
        fonts.load_fonts_from_dir(&dir.join("fonts"));
    }

    let frame = render_with(cfg, fonts)?;
    write_png(path, &frame)?;
    tracing::info!(
        path = %path.display(),
        width = frame.width,
        height = frame.height,
        fingerprint = %format!("{:016x}", frame.fingerprint()),
        "wireframe written"
    );
    Ok(frame)
}

/// Render with `cfg` into memory using the system fonts.
#[tracing::instrument(skip_all)]
pub fn render_frame(cfg: &DashboardConfig) -> WireframeResult<Frame> {
    render_with(cfg, FontBook::system())
}

fn render_with(cfg: &DashboardConfig, fonts: FontBook) -> WireframeResult<Frame> {
    let layout = compute_layout(cfg)?;
    let mut painter = CpuPainter::new(cfg.canvas, style::BACKGROUND, fonts)?;
    render_dashboard(&mut painter, &layout)?;
    painter.finish()
}

/// Paint every panel of `layout` in order. Later panels draw over earlier ones.
///
/// Fails before drawing anything when a panel region does not fit the painter's surface.
pub fn render_dashboard(p: &mut dyn Painter, layout: &DashboardLayout) -> WireframeResult<()> {
    let panels = layout.panels();
    let surface = p.size();
    if let Some((kind, region)) = panels
        .iter()
        .find(|(_, region)| !surface.bounds().contains(*region))
    {
        return Err(WireframeError::render(format!(
            "{kind:?} region {region:?} exceeds the {}x{} surface",
            surface.width, surface.height
        )));
    }

    for (kind, region) in panels {
        tracing::debug!(?kind, ?region, "drawing panel");
        match kind {
            PanelKind::Sidebar => draw_sidebar(p, region),
            PanelKind::Header => draw_header(p, region),
            PanelKind::Kpi(i) => {
                let kpi = DEFAULT_KPIS
                    .get(usize::from(i))
                    .ok_or_else(|| WireframeError::render(format!("no KPI data for slot {i}")))?;
                draw_kpi(p, region, kpi.label, kpi.value, kpi.change, kpi.icon);
            }
            PanelKind::LineChart => draw_line_chart(p, region, LINE_CHART_TITLE, None)?,
            PanelKind::DonutChart => draw_donut_chart(p, region, DONUT_TITLE, None),
            PanelKind::BarChart => {
                draw_bar_chart(p, region, BAR_CHART_TITLE, None, None);
            }
            PanelKind::Map => draw_map(p, region, MAP_TITLE),
            PanelKind::ActivityFeed => draw_activity_feed(p, region, ACTIVITY_TITLE),
            PanelKind::Table => draw_table(p, region, TABLE_TITLE, None, None)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
