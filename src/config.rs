use crate::foundation::{
    core::CanvasSize,
    error::{WireframeError, WireframeResult},
};

/// Fixed geometry of the dashboard.
///
/// Every panel rectangle is derived from these numbers by [`crate::compute_layout`]; nothing is
/// measured from content.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Surface size in pixels.
    pub canvas: CanvasSize,
    /// Outer padding around the content area and between stacked rows.
    pub padding: i32,
    /// Horizontal gap between cells of one row.
    pub gutter: i32,
    /// Width of the navigation column on the left.
    pub sidebar_width: i32,
    /// Height of the header band above the content rows.
    pub header_height: i32,
    /// Height of the KPI card row.
    pub kpi_height: i32,
    /// Height of the line/donut chart row.
    pub chart_row_height: i32,
    /// Height of the bar/map/activity row.
    pub detail_row_height: i32,
    /// File name of the rendered PNG.
    pub output_file_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize {
                width: 1920,
                height: 1080,
            },
            padding: 20,
            gutter: 20,
            sidebar_width: 280,
            header_height: 80,
            kpi_height: 90,
            chart_row_height: 280,
            detail_row_height: 220,
            output_file_name: "unicorn_dashboard_wireframe.png".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Smallest height left for the table row.
    pub const MIN_TABLE_HEIGHT: i32 = 60;

    /// Check that the configured geometry fits the canvas and the rasterizer limits.
    pub fn validate(&self) -> WireframeResult<()> {
        let CanvasSize { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(WireframeError::layout("canvas must be non-empty"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(WireframeError::layout(format!(
                "canvas {width}x{height} exceeds {}px per side",
                u16::MAX
            )));
        }

        for (name, v) in [
            ("padding", self.padding),
            ("gutter", self.gutter),
            ("sidebar_width", self.sidebar_width),
            ("header_height", self.header_height),
            ("kpi_height", self.kpi_height),
            ("chart_row_height", self.chart_row_height),
            ("detail_row_height", self.detail_row_height),
        ] {
            if v < 0 {
                return Err(WireframeError::layout(format!("{name} must be >= 0")));
            }
        }

        let content_w =
            i64::from(width) - i64::from(self.sidebar_width) - 2 * i64::from(self.padding);
        // Four KPI cards share the row with three gutters between them.
        if content_w - 3 * i64::from(self.gutter) < 4 {
            return Err(WireframeError::layout(format!(
                "content width {content_w}px leaves no room for the KPI row"
            )));
        }

        let table_h = self.table_height();
        if table_h < i64::from(Self::MIN_TABLE_HEIGHT) {
            return Err(WireframeError::layout(format!(
                "table row height {table_h}px is below {}px",
                Self::MIN_TABLE_HEIGHT
            )));
        }

        if self.output_file_name.is_empty() {
            return Err(WireframeError::validation("output file name must be set"));
        }
        Ok(())
    }

    /// Height remaining for the bottom (table) row. Negative when the other rows overflow.
    pub fn table_height(&self) -> i64 {
        i64::from(self.canvas.height)
            - i64::from(self.header_height)
            - i64::from(self.kpi_height)
            - i64::from(self.chart_row_height)
            - i64::from(self.detail_row_height)
            - 5 * i64::from(self.padding)
    }
}
