//! Static analytics-dashboard wireframe renderer.
//!
//! One pass turns a fixed [`DashboardConfig`] into a PNG:
//!
//! 1. **Layout**: [`compute_layout`] splits the canvas into a sidebar, a header band and four
//!    content rows of non-overlapping panel regions (integer arithmetic, fixed gutters).
//! 2. **Paint**: [`render_dashboard`] invokes the panel renderers in [`panels`] in a fixed order
//!    against a [`Painter`]. Panels only know their own region, the palette in [`style`] and
//!    their sample data.
//! 3. **Rasterize**: [`CpuPainter`] draws with `vello_cpu`; text goes through a per-run
//!    [`FontBook`] that falls back to a built-in bitmap font instead of failing.
//! 4. **Encode**: [`write_png`] writes an RGB8 PNG via a temporary sibling and a rename.
//!
//! [`compose`] runs all four steps and writes next to the running executable.
#![forbid(unsafe_code)]

mod compose;
mod config;
mod encode;
mod foundation;
mod layout;
mod render;
mod text;

pub mod panels;
pub mod style;

pub use compose::{
    ACTIVITY_TITLE, BAR_CHART_TITLE, DONUT_TITLE, LINE_CHART_TITLE, MAP_TITLE, TABLE_TITLE,
    compose, compose_to, default_output_path, render_dashboard, render_frame,
};
pub use config::DashboardConfig;
pub use encode::png::{encode_png, write_png};
pub use foundation::core::{CanvasSize, Point, Rect, Region, Rgba8};
pub use foundation::error::{WireframeError, WireframeResult};
pub use layout::solver::{
    CHART_ROW_SPLIT, DETAIL_ROW_SPLIT, DashboardLayout, KPI_ROW_SPLIT, PanelKind, compute_layout,
    split_row,
};
pub use render::cpu::CpuPainter;
pub use render::frame::Frame;
pub use render::painter::Painter;
pub use text::fonts::{FontBook, FontHandle, FontSpec, ShapedText};
