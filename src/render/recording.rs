use crate::{
    foundation::core::{CanvasSize, Point, Rect, Rgba8},
    render::painter::Painter,
    text::{bitmap, fonts::FontSpec},
};

/// One captured drawing call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    FillRect(Rect, Rgba8),
    StrokeRect(Rect, Rgba8, f64),
    FillRoundedRect(Rect, f64, Rgba8),
    StrokeRoundedRect(Rect, f64, Rgba8, f64),
    Line(Point, Point, Rgba8, f64),
    FillPolygon(Vec<Point>, Rgba8),
    FillPie(Rect, f64, f64, Rgba8),
    FillEllipse(Rect, Rgba8),
    StrokeEllipse(Rect, Rgba8, f64),
    Text(Point, String, FontSpec, Rgba8),
}

/// Painter that records calls instead of rasterizing. Text is measured with the bitmap font.
#[derive(Debug)]
pub(crate) struct RecordingPainter {
    size: CanvasSize,
    pub(crate) ops: Vec<Op>,
}

impl RecordingPainter {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            size: CanvasSize { width, height },
            ops: Vec::new(),
        }
    }

    pub(crate) fn texts(&self) -> Vec<(&str, Point, Rgba8)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(p, s, _, c) => Some((s.as_str(), *p, *c)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn text_op(&self, needle: &str) -> Option<(Point, FontSpec, Rgba8)> {
        self.ops.iter().find_map(|op| match op {
            Op::Text(p, s, f, c) if s == needle => Some((*p, *f, *c)),
            _ => None,
        })
    }

    pub(crate) fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Painter for RecordingPainter {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ops.push(Op::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba8, width: f64) {
        self.ops.push(Op::StrokeRect(rect, color, width));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8) {
        self.ops.push(Op::FillRoundedRect(rect, radius, color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8, width: f64) {
        self.ops
            .push(Op::StrokeRoundedRect(rect, radius, color, width));
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba8, width: f64) {
        self.ops.push(Op::Line(from, to, color, width));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        self.ops.push(Op::FillPolygon(points.to_vec(), color));
    }

    fn fill_pie(&mut self, bbox: Rect, start_deg: f64, end_deg: f64, color: Rgba8) {
        self.ops.push(Op::FillPie(bbox, start_deg, end_deg, color));
    }

    fn fill_ellipse(&mut self, bbox: Rect, color: Rgba8) {
        self.ops.push(Op::FillEllipse(bbox, color));
    }

    fn stroke_ellipse(&mut self, bbox: Rect, color: Rgba8, width: f64) {
        self.ops.push(Op::StrokeEllipse(bbox, color, width));
    }

    fn text(&mut self, origin: Point, text: &str, font: FontSpec, color: Rgba8) {
        self.ops
            .push(Op::Text(origin, text.to_string(), font, color));
    }

    fn measure_text(&mut self, text: &str, font: FontSpec) -> f64 {
        bitmap::advance(text, f64::from(font.size_px))
    }
}
