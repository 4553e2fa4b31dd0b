//! Panel renderers. Each draws into one region through a [`Painter`](crate::Painter) and
//! depends on nothing but the palette and its own sample data.

pub mod activity;
pub mod bar_chart;
pub mod card;
pub mod chrome;
pub mod donut;
pub mod icons;
pub mod kpi;
pub mod line_chart;
pub mod map;
pub mod table;

use crate::foundation::core::{Point, Rect};

/// Point at integer pixel coordinates.
pub(crate) fn pt(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Rectangle between two integer corners.
pub(crate) fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect::new(f64::from(x0), f64::from(y0), f64::from(x1), f64::from(y1))
}
