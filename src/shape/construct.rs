//! Vertex builders for each shape kind, fed by the two corners of a drag.
//!
//! Corners may arrive in any order. Regular shapes (star, hexagon, pentagon)
//! are inscribed in a circle of radius `min(|dx|, |dy|) / 2` centred on the
//! drag box and start at 12 o'clock.

use std::f32::consts::{FRAC_PI_2, PI};

use egui::Pos2;

use super::ShapeKind;

type VertexBuilder = fn(Pos2, Pos2) -> Vec<Pos2>;

impl ShapeKind {
    fn vertex_builder(self) -> VertexBuilder {
        match self {
            ShapeKind::Line | ShapeKind::Rect | ShapeKind::Oval | ShapeKind::Ellipse => corners,
            ShapeKind::Triangle => triangle,
            ShapeKind::Star => star,
            ShapeKind::Hexagon => |a: Pos2, b: Pos2| regular_polygon(a, b, 6),
            ShapeKind::Pentagon => |a: Pos2, b: Pos2| regular_polygon(a, b, 5),
            ShapeKind::Parallelogram => parallelogram,
            ShapeKind::Trapezoid => trapezoid,
            ShapeKind::Rhombus => rhombus,
            ShapeKind::Text => anchor,
        }
    }

    /// Vertices for a shape of this kind dragged from `start` to `end`.
    pub fn build_vertices(self, start: Pos2, end: Pos2) -> Vec<Pos2> {
        (self.vertex_builder())(start, end)
    }
}

fn corners(start: Pos2, end: Pos2) -> Vec<Pos2> {
    vec![start, end]
}

fn anchor(_start: Pos2, end: Pos2) -> Vec<Pos2> {
    vec![end]
}

fn inscribed(start: Pos2, end: Pos2) -> (Pos2, f32) {
    let radius = (end.x - start.x).abs().min((end.y - start.y).abs()) / 2.0;
    (start.lerp(end, 0.5), radius)
}

fn on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    // Screen y grows downwards, so subtract to keep the first vertex on top.
    Pos2::new(center.x + angle.cos() * radius, center.y - angle.sin() * radius)
}

/// Apex at the middle of the top edge, base along the bottom edge.
pub fn triangle(start: Pos2, end: Pos2) -> Vec<Pos2> {
    let mid_x = (start.x + end.x) / 2.0;
    vec![
        Pos2::new(mid_x, start.y),
        Pos2::new(start.x, end.y),
        Pos2::new(end.x, end.y),
    ]
}

/// Five-pointed star: ten vertices alternating between `r` and `r / 2`.
pub fn star(start: Pos2, end: Pos2) -> Vec<Pos2> {
    let (center, radius) = inscribed(start, end);
    (0..10)
        .map(|i| {
            let angle = FRAC_PI_2 + i as f32 * PI / 5.0;
            let r = if i % 2 == 0 { radius } else { radius / 2.0 };
            on_circle(center, r, angle)
        })
        .collect()
}

pub fn regular_polygon(start: Pos2, end: Pos2, sides: usize) -> Vec<Pos2> {
    let (center, radius) = inscribed(start, end);
    let step = 2.0 * PI / sides as f32;
    (0..sides)
        .map(|i| on_circle(center, radius, FRAC_PI_2 + i as f32 * step))
        .collect()
}

/// Top edge shifted right and bottom edge shifted left by a quarter of the
/// signed width.
pub fn parallelogram(start: Pos2, end: Pos2) -> Vec<Pos2> {
    let dx = (end.x - start.x) / 4.0;
    vec![
        Pos2::new(start.x + dx, start.y),
        Pos2::new(end.x, start.y),
        Pos2::new(end.x - dx, end.y),
        Pos2::new(start.x, end.y),
    ]
}

/// Full-width bottom edge, top edge inset by a quarter of the width.
pub fn trapezoid(start: Pos2, end: Pos2) -> Vec<Pos2> {
    let dx = (end.x - start.x).abs() / 4.0;
    vec![
        Pos2::new(start.x + dx, start.y),
        Pos2::new(end.x - dx, start.y),
        Pos2::new(end.x, end.y),
        Pos2::new(start.x, end.y),
    ]
}

/// Diamond through the edge midpoints of the drag box.
pub fn rhombus(start: Pos2, end: Pos2) -> Vec<Pos2> {
    let mid = start.lerp(end, 0.5);
    vec![
        Pos2::new(mid.x, start.y),
        Pos2::new(end.x, mid.y),
        Pos2::new(mid.x, end.y),
        Pos2::new(start.x, mid.y),
    ]
}
