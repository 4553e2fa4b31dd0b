use crate::{
    foundation::core::{BezPath, CanvasSize, Point, Rect, Rgba8, Vec2},
    foundation::error::{WireframeError, WireframeResult},
    render::{frame::Frame, painter::Painter},
    text::{
        bitmap,
        fonts::{FontBook, FontSpec},
    },
};

/// Flattening tolerance for curves, in pixels.
const TOLERANCE: f64 = 0.1;

/// [`Painter`] rasterizing on the CPU with `vello_cpu`.
pub struct CpuPainter {
    size: CanvasSize,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    fonts: FontBook,
}

impl CpuPainter {
    /// Create a surface of `size` filled with `background`.
    pub fn new(size: CanvasSize, background: Rgba8, fonts: FontBook) -> WireframeResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| WireframeError::render("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| WireframeError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(WireframeError::render("surface must be non-empty"));
        }
        if !background.is_opaque() {
            return Err(WireframeError::render("surface background must be opaque"));
        }

        let mut painter = Self {
            size,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            fonts,
        };
        painter.fill_rect(size.bounds().to_rect(), background);
        Ok(painter)
    }

    /// Rasterize everything drawn so far into an RGB frame.
    pub fn finish(mut self) -> WireframeResult<Frame> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let data = pixmap.data_as_u8_slice();
        let expected = usize::from(self.width) * usize::from(self.height) * 4;
        if data.len() != expected {
            return Err(WireframeError::render(format!(
                "pixmap holds {} bytes, expected {expected}",
                data.len()
            )));
        }

        let mut rgb8 = Vec::with_capacity(expected / 4 * 3);
        for px in data.chunks_exact(4) {
            rgb8.extend_from_slice(&unpremultiply_rgb(px[0], px[1], px[2], px[3]));
        }

        Ok(Frame {
            width: self.size.width,
            height: self.size.height,
            rgb8,
        })
    }

    fn fill(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke(&mut self, path: &BezPath, color: Rgba8, stroke: vello_cpu::kurbo::Stroke) {
        self.ctx.set_stroke(stroke);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }
}

impl Painter for CpuPainter {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba8, width: f64) {
        let path = kurbo::Shape::to_path(&rect.inset(-width / 2.0), TOLERANCE);
        self.stroke(&path, color, vello_cpu::kurbo::Stroke::new(width));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8) {
        let radius = clamp_radius(rect, radius);
        let path = kurbo::Shape::to_path(&kurbo::RoundedRect::from_rect(rect, radius), TOLERANCE);
        self.fill(&path, color);
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8, width: f64) {
        let inner = rect.inset(-width / 2.0);
        let radius = clamp_radius(inner, radius - width / 2.0);
        let path = kurbo::Shape::to_path(&kurbo::RoundedRect::from_rect(inner, radius), TOLERANCE);
        self.stroke(&path, color, vello_cpu::kurbo::Stroke::new(width));
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba8, width: f64) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        let stroke = vello_cpu::kurbo::Stroke::new(width).with_caps(vello_cpu::kurbo::Cap::Round);
        self.stroke(&path, color, stroke);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        if points.len() < 3 {
            return;
        }
        let mut path = BezPath::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        path.close_path();
        self.fill(&path, color);
    }

    fn fill_pie(&mut self, bbox: Rect, start_deg: f64, end_deg: f64, color: Rgba8) {
        if let Some(path) = pie_path(bbox, start_deg, end_deg) {
            self.fill(&path, color);
        }
    }

    fn fill_ellipse(&mut self, bbox: Rect, color: Rgba8) {
        let path = kurbo::Shape::to_path(&kurbo::Ellipse::from_rect(bbox), TOLERANCE);
        self.fill(&path, color);
    }

    fn stroke_ellipse(&mut self, bbox: Rect, color: Rgba8, width: f64) {
        let inner = bbox.inset(-width / 2.0);
        let path = kurbo::Shape::to_path(&kurbo::Ellipse::from_rect(inner), TOLERANCE);
        self.stroke(&path, color, vello_cpu::kurbo::Stroke::new(width));
    }

    fn text(&mut self, origin: Point, text: &str, font: FontSpec, color: Rgba8) {
        if text.is_empty() {
            return;
        }
        let handle = self.fonts.resolve(font);
        match self.fonts.shape(handle, text) {
            Some(shaped) => {
                self.ctx
                    .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
                self.ctx.set_paint(color_to_cpu(color));
                self.ctx
                    .glyph_run(&shaped.font)
                    .font_size(shaped.size_px)
                    .fill_glyphs(shaped.glyphs.into_iter());
                self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            }
            None => {
                for cell in bitmap::glyph_cells(text, origin, f64::from(font.size_px)) {
                    self.fill_rect(cell, color);
                }
            }
        }
    }

    fn measure_text(&mut self, text: &str, font: FontSpec) -> f64 {
        let handle = self.fonts.resolve(font);
        self.fonts.measure(handle, text)
    }
}

/// Closed wedge from the ellipse center along the arc. `None` when the sweep is empty.
pub(crate) fn pie_path(bbox: Rect, start_deg: f64, end_deg: f64) -> Option<BezPath> {
    let sweep_deg = end_deg - start_deg;
    if sweep_deg <= 0.0 || bbox.width() <= 0.0 || bbox.height() <= 0.0 {
        return None;
    }
    if sweep_deg >= 360.0 {
        return Some(kurbo::Shape::to_path(
            &kurbo::Ellipse::from_rect(bbox),
            TOLERANCE,
        ));
    }

    let center = bbox.center();
    let radii = Vec2::new(bbox.width() / 2.0, bbox.height() / 2.0);
    let start = start_deg.to_radians();
    let arc = kurbo::Arc::new(center, radii, start, sweep_deg.to_radians(), 0.0);

    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(Point::new(
        center.x + radii.x * start.cos(),
        center.y + radii.y * start.sin(),
    ));
    arc.to_cubic_beziers(TOLERANCE, |p1, p2, p3| path.curve_to(p1, p2, p3));
    path.close_path();
    Some(path)
}

/// Corner radius limited to half the shorter side.
fn clamp_radius(rect: Rect, radius: f64) -> f64 {
    radius
        .min(rect.width().abs() / 2.0)
        .min(rect.height().abs() / 2.0)
        .max(0.0)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn unpremultiply_rgb(r: u8, g: u8, b: u8, a: u8) -> [u8; 3] {
    match a {
        255 => [r, g, b],
        0 => [0, 0, 0],
        _ => {
            let un = |c: u8| -> u8 {
                ((u16::from(c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8
            };
            [un(r), un(g), un(b)]
        }
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
