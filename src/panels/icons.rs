//! Small vector pictograms standing in for emoji, which depend on font coverage.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    foundation::core::{Point, Rect, Rgba8},
    render::painter::Painter,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Diamond,
    DiamondOutline,
    Ring,
    Square,
    TriangleOutline,
    Star,
    Sparkle,
    TrendUp,
    Coin,
    Bell,
    Chat,
    Gear,
    Search,
}

/// Draw `icon` inside the `size`-pixel square whose top-left corner is `origin`.
pub fn draw_icon(p: &mut dyn Painter, icon: Icon, origin: Point, size: f64, color: Rgba8) {
    let s = size;
    let at = |fx: f64, fy: f64| Point::new(origin.x + fx * s, origin.y + fy * s);
    let boxed = |f0: f64, f1: f64| Rect::from_points(at(f0, f0), at(f1, f1));
    let stroke = (s / 10.0).max(1.0);

    match icon {
        Icon::Diamond => p.fill_polygon(&diamond(&at), color),
        Icon::DiamondOutline => outline(p, &diamond(&at), color, stroke),
        Icon::Ring => p.stroke_ellipse(boxed(0.15, 0.85), color, stroke),
        Icon::Square => p.stroke_rect(boxed(0.15, 0.85), color, stroke),
        Icon::TriangleOutline => outline(p, &triangle(&at), color, stroke),
        Icon::Star => outline(p, &star(at(0.5, 0.55), 0.45 * s, 0.2 * s, 5), color, stroke),
        Icon::Sparkle => p.fill_polygon(&star(at(0.5, 0.5), 0.5 * s, 0.14 * s, 4), color),
        Icon::TrendUp => {
            let pts = [at(0.05, 0.85), at(0.35, 0.55), at(0.55, 0.7), at(0.85, 0.3)];
            for pair in pts.windows(2) {
                p.line(pair[0], pair[1], color, stroke * 1.5);
            }
            p.fill_polygon(&[at(0.95, 0.15), at(0.95, 0.5), at(0.65, 0.2)], color);
        }
        Icon::Coin => {
            p.stroke_ellipse(boxed(0.05, 0.95), color, stroke * 1.5);
            p.fill_rect(Rect::from_points(at(0.42, 0.25), at(0.58, 0.75)), color);
        }
        Icon::Bell => {
            p.fill_rounded_rect(Rect::from_points(at(0.22, 0.12), at(0.78, 0.75)), 0.25 * s, color);
            p.fill_rect(Rect::from_points(at(0.08, 0.65), at(0.92, 0.77)), color);
            p.fill_ellipse(Rect::from_points(at(0.4, 0.78), at(0.6, 0.98)), color);
        }
        Icon::Chat => {
            p.fill_rounded_rect(Rect::from_points(at(0.05, 0.1), at(0.95, 0.7)), 0.15 * s, color);
            p.fill_polygon(&[at(0.22, 0.68), at(0.45, 0.68), at(0.2, 0.95)], color);
        }
        Icon::Gear => {
            p.stroke_ellipse(boxed(0.22, 0.78), color, stroke * 1.5);
            let c = at(0.5, 0.5);
            for i in 0..8 {
                let a = f64::from(i) * TAU / 8.0;
                let (sin, cos) = a.sin_cos();
                let from = Point::new(c.x + 0.26 * s * cos, c.y + 0.26 * s * sin);
                let to = Point::new(c.x + 0.48 * s * cos, c.y + 0.48 * s * sin);
                p.line(from, to, color, stroke * 1.5);
            }
        }
        Icon::Search => {
            p.stroke_ellipse(boxed(0.05, 0.65), color, stroke * 1.5);
            p.line(at(0.58, 0.58), at(0.92, 0.92), color, stroke * 2.0);
        }
    }
}

fn diamond(at: &impl Fn(f64, f64) -> Point) -> [Point; 4] {
    [at(0.5, 0.0), at(1.0, 0.5), at(0.5, 1.0), at(0.0, 0.5)]
}

fn triangle(at: &impl Fn(f64, f64) -> Point) -> [Point; 3] {
    [at(0.5, 0.1), at(0.95, 0.9), at(0.05, 0.9)]
}

/// Alternating outer/inner vertices, first tip pointing up.
fn star(center: Point, outer: f64, inner: f64, tips: u32) -> Vec<Point> {
    let step = PI / f64::from(tips);
    (0..tips * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = f64::from(i) * step - FRAC_PI_2;
            Point::new(center.x + r * a.cos(), center.y + r * a.sin())
        })
        .collect()
}

fn outline(p: &mut dyn Painter, pts: &[Point], color: Rgba8, width: f64) {
    for (i, &from) in pts.iter().enumerate() {
        let to = pts[(i + 1) % pts.len()];
        p.line(from, to, color, width);
    }
}
