use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

mod construct;

pub use construct::{parallelogram, regular_polygon, rhombus, star, trapezoid, triangle};

use crate::id_generator::generate_id;

/// Slack added around a shape's vertex extremes when hit-testing.
pub const HIT_MARGIN: f32 = 5.0;

/// Every kind of vector shape the editor can place on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rect,
    Oval,
    Ellipse,
    Triangle,
    Star,
    Hexagon,
    Pentagon,
    Parallelogram,
    Trapezoid,
    Rhombus,
    Text,
}

impl ShapeKind {
    /// Kinds offered in the shape picker, in menu order.
    pub const PICKER: [ShapeKind; 10] = [
        ShapeKind::Rect,
        ShapeKind::Oval,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
        ShapeKind::Star,
        ShapeKind::Hexagon,
        ShapeKind::Pentagon,
        ShapeKind::Parallelogram,
        ShapeKind::Trapezoid,
        ShapeKind::Rhombus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rect => "Rectangle",
            ShapeKind::Oval => "Oval",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Star => "Star",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Parallelogram => "Parallelogram",
            ShapeKind::Trapezoid => "Trapezoid",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::Text => "Text",
        }
    }

    /// Number of vertices a freshly built shape of this kind carries.
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Text => 1,
            ShapeKind::Line | ShapeKind::Rect | ShapeKind::Oval | ShapeKind::Ellipse => 2,
            ShapeKind::Triangle => 3,
            ShapeKind::Parallelogram | ShapeKind::Trapezoid | ShapeKind::Rhombus => 4,
            ShapeKind::Pentagon => 5,
            ShapeKind::Hexagon => 6,
            ShapeKind::Star => 10,
        }
    }

    /// True for kinds drawn as a closed outline through their vertices.
    pub fn is_polygon(self) -> bool {
        matches!(
            self,
            ShapeKind::Triangle
                | ShapeKind::Star
                | ShapeKind::Hexagon
                | ShapeKind::Pentagon
                | ShapeKind::Parallelogram
                | ShapeKind::Trapezoid
                | ShapeKind::Rhombus
        )
    }
}

/// How a line shape is stroked. Other kinds ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Arrow,
}

impl LineStyle {
    pub const ALL: [LineStyle; 3] = [LineStyle::Solid, LineStyle::Dashed, LineStyle::Arrow];

    pub fn label(self) -> &'static str {
        match self {
            LineStyle::Solid => "Solid",
            LineStyle::Dashed => "Dashed",
            LineStyle::Arrow => "Arrow",
        }
    }
}

/// A vector shape placed on the canvas.
///
/// Vertices are absolute canvas coordinates. Their meaning depends on the
/// kind: two opposite corners for lines, rectangles and ovals, the outline
/// points for polygons, and a single anchor for text. The vertex list is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: usize,
    kind: ShapeKind,
    vertices: Vec<Pos2>,
    color: Color32,
    width: f32,
    line_style: LineStyle,
    text: Option<String>,
}

impl Shape {
    /// Create a shape from gesture corners, building the vertices for `kind`.
    pub fn from_corners(kind: ShapeKind, start: Pos2, end: Pos2, color: Color32, width: f32) -> Self {
        Self::with_vertices(kind, kind.build_vertices(start, end), color, width)
    }

    /// Every public constructor funnels through here with vertices built for
    /// `kind`, so the count always matches `kind.vertex_count()`.
    fn with_vertices(kind: ShapeKind, vertices: Vec<Pos2>, color: Color32, width: f32) -> Self {
        debug_assert_eq!(vertices.len(), kind.vertex_count(), "{kind:?} built with wrong vertex count");
        Self {
            id: generate_id(),
            kind,
            vertices,
            color,
            width,
            line_style: LineStyle::Solid,
            text: None,
        }
    }

    pub fn line(start: Pos2, end: Pos2, color: Color32, width: f32, style: LineStyle) -> Self {
        let mut shape = Self::with_vertices(ShapeKind::Line, vec![start, end], color, width);
        shape.line_style = style;
        shape
    }

    pub fn text(anchor: Pos2, content: impl Into<String>, color: Color32, width: f32) -> Self {
        let mut shape = Self::with_vertices(ShapeKind::Text, vec![anchor], color, width);
        shape.text = Some(content.into());
        shape
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Font size used when rendering a text shape.
    pub fn font_size(&self) -> f32 {
        (self.width * 3.0).max(10.0)
    }

    /// Axis-aligned box spanning the vertex extremes, without margin.
    pub fn bounds(&self) -> Rect {
        let mut rect = Rect::NOTHING;
        for v in &self.vertices {
            rect.extend_with(*v);
        }
        rect
    }

    /// Arithmetic mean of the vertices; the pivot for rotation.
    pub fn centroid(&self) -> Pos2 {
        let n = self.vertices.len() as f32;
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::ZERO, |acc, v| acc + v.to_vec2());
        (sum / n).to_pos2()
    }

    /// Bounding-box hit test expanded by [`HIT_MARGIN`].
    ///
    /// This deliberately approximates containment: it is a single pass over
    /// the vertex extremes and accepts clicks near, not only inside, the
    /// outline.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        self.bounds().expand(HIT_MARGIN).contains(pos)
    }

    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Rotate every vertex about the centroid by `degrees`.
    ///
    /// Positive angles turn from +x towards +y, which is clockwise on screen.
    pub fn rotate(&mut self, degrees: f32) {
        let center = self.centroid();
        let (sin, cos) = degrees.to_radians().sin_cos();
        for v in &mut self.vertices {
            let d = *v - center;
            *v = Pos2::new(
                d.x * cos - d.y * sin + center.x,
                d.x * sin + d.y * cos + center.y,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn assert_close(a: &[Pos2], b: &[Pos2]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert!(p.distance(*q) < EPS, "{p:?} != {q:?}");
        }
    }

    fn pentagon() -> Shape {
        Shape::from_corners(
            ShapeKind::Pentagon,
            Pos2::new(40.0, 40.0),
            Pos2::new(140.0, 120.0),
            Color32::BLACK,
            3.0,
        )
    }

    #[test]
    fn test_constructors_always_match_kind_vertex_count() {
        let drags = [
            (Pos2::new(10.0, 10.0), Pos2::new(90.0, 60.0)),
            (Pos2::new(90.0, 60.0), Pos2::new(10.0, 10.0)),
            (Pos2::new(30.0, 30.0), Pos2::new(30.0, 30.0)),
        ];
        for (start, end) in drags {
            for kind in ShapeKind::PICKER.into_iter().chain([ShapeKind::Line, ShapeKind::Text]) {
                let shape = Shape::from_corners(kind, start, end, Color32::BLACK, 1.0);
                assert_eq!(shape.vertices().len(), kind.vertex_count(), "{kind:?}");
                assert!(shape.centroid().x.is_finite() && shape.centroid().y.is_finite());
            }
        }
        let line = Shape::line(drags[0].0, drags[0].1, Color32::RED, 2.0, LineStyle::Dashed);
        assert_eq!(line.vertices().len(), ShapeKind::Line.vertex_count());
        let text = Shape::text(drags[0].0, "abc", Color32::RED, 2.0);
        assert_eq!(text.vertices().len(), ShapeKind::Text.vertex_count());
    }

    #[test]
    fn test_translate_round_trip() {
        let mut shape = pentagon();
        let original = shape.vertices().to_vec();
        shape.translate(Vec2::new(17.0, -4.5));
        assert!(shape.vertices()[0].distance(original[0]) > 1.0);
        shape.translate(Vec2::new(-17.0, 4.5));
        assert_close(shape.vertices(), &original);
    }

    #[test]
    fn test_rotate_round_trip_keeps_centroid() {
        let mut shape = pentagon();
        let original = shape.vertices().to_vec();
        let center = shape.centroid();

        shape.rotate(37.0);
        assert!(shape.centroid().distance(center) < EPS);
        shape.rotate(-37.0);
        assert_close(shape.vertices(), &original);
    }

    #[test]
    fn test_quarter_turn_of_a_line() {
        let mut line = Shape::line(
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 0.0),
            Color32::RED,
            2.0,
            LineStyle::Arrow,
        );
        line.rotate(90.0);
        assert_close(line.vertices(), &[Pos2::new(5.0, -5.0), Pos2::new(5.0, 5.0)]);
        assert_eq!(line.line_style(), LineStyle::Arrow);
    }

    #[test]
    fn test_hit_test_margin() {
        let rect = Shape::from_corners(
            ShapeKind::Rect,
            Pos2::new(10.0, 10.0),
            Pos2::new(50.0, 30.0),
            Color32::BLACK,
            1.0,
        );
        assert!(rect.hit_test(Pos2::new(30.0, 20.0)));
        assert!(rect.hit_test(Pos2::new(6.0, 34.0)));
        assert!(!rect.hit_test(Pos2::new(4.0, 36.0)));
        assert!(!rect.hit_test(Pos2::new(56.0, 20.0)));
    }

    #[test]
    fn test_text_shape() {
        let text = Shape::text(Pos2::new(3.0, 4.0), "hello", Color32::BLACK, 2.0);
        assert_eq!(text.vertices(), &[Pos2::new(3.0, 4.0)]);
        assert_eq!(text.text_content(), Some("hello"));
        assert_eq!(text.font_size(), 10.0);
        assert!(text.hit_test(Pos2::new(7.0, 8.0)));
    }

    #[test]
    fn test_clone_owns_its_vertices() {
        let mut shape = pentagon();
        let snapshot = shape.clone();
        shape.translate(Vec2::new(5.0, 5.0));
        assert_ne!(shape.vertices(), snapshot.vertices());
        assert_eq!(shape.id(), snapshot.id());
    }
}
