use crate::{
    foundation::core::{CanvasSize, Point, Rect, Rgba8},
    text::fonts::FontSpec,
};

/// Drawing surface the panel renderers paint into.
///
/// All coordinates are canvas pixels with the origin at the top-left corner. Later calls paint
/// over earlier ones. Text is anchored at its top-left corner.
pub trait Painter {
    fn size(&self) -> CanvasSize;

    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    /// Outline drawn inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Rgba8, width: f64);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8);

    /// Outline drawn inside `rect`.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8, width: f64);

    /// Straight segment centered on the `from`-`to` axis.
    fn line(&mut self, from: Point, to: Point, color: Rgba8, width: f64);

    /// Closed polygon through `points`. Fewer than three points draws nothing.
    fn fill_polygon(&mut self, points: &[Point], color: Rgba8);

    /// Pie slice of the ellipse inscribed in `bbox`, from `start_deg` to `end_deg`.
    ///
    /// Angles are in degrees, 0 at three o'clock, increasing clockwise on screen.
    fn fill_pie(&mut self, bbox: Rect, start_deg: f64, end_deg: f64, color: Rgba8);

    fn fill_ellipse(&mut self, bbox: Rect, color: Rgba8);

    /// Outline drawn inside `bbox`.
    fn stroke_ellipse(&mut self, bbox: Rect, color: Rgba8, width: f64);

    fn text(&mut self, origin: Point, text: &str, font: FontSpec, color: Rgba8);

    /// Advance width of `text` when drawn with `font`.
    fn measure_text(&mut self, text: &str, font: FontSpec) -> f64;

    /// One-pixel horizontal rule from `x0` to `x1` occupying row `y`.
    fn hline(&mut self, x0: f64, x1: f64, y: f64, color: Rgba8) {
        self.fill_rect(Rect::new(x0, y, x1, y + 1.0), color);
    }

    /// One-pixel vertical rule from `y0` to `y1` occupying column `x`.
    fn vline(&mut self, x: f64, y0: f64, y1: f64, color: Rgba8) {
        self.fill_rect(Rect::new(x, y0, x + 1.0, y1), color);
    }

    /// Filled disc with a ring of `outline` drawn on top, as used for chart markers.
    fn marker(&mut self, center: Point, radius: f64, fill: Rgba8, outline: Rgba8, width: f64) {
        let bbox = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        self.fill_ellipse(bbox, fill);
        self.stroke_ellipse(bbox, outline, width);
    }
}
