use std::f32::consts::TAU;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape as EguiShape, Stroke, TextureHandle, Vec2};

use crate::raster::Raster;
use crate::scene::{ROTATION_HANDLE_RADIUS, Scene};
use crate::shape::{LineStyle, Shape, ShapeKind};

const HIGHLIGHT_COLOR: Color32 = Color32::RED;
const HANDLE_COLOR: Color32 = Color32::from_rgb(255, 165, 0);
const ELLIPSE_SEGMENTS: usize = 64;

/// Draws the raster and the vector overlay on top of it.
///
/// Every frame is a full redraw. The raster is uploaded as a texture and only
/// re-uploaded when its version changes.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    texture_version: u64,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("texture_version", &self.texture_version)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn sync_texture(&mut self, ctx: &egui::Context, raster: &Raster) -> &TextureHandle {
        let stale = self.texture_version != raster.version();
        let image = || raster.to_color_image();
        let texture = match self.texture.take() {
            Some(mut texture) => {
                if stale || texture.size() != [raster.width() as usize, raster.height() as usize] {
                    texture.set(image(), egui::TextureOptions::NEAREST);
                }
                texture
            }
            None => ctx.load_texture("raster", image(), egui::TextureOptions::NEAREST),
        };
        self.texture_version = raster.version();
        self.texture.insert(texture)
    }

    /// Draw the whole scene with canvas coordinate (0, 0) at `origin`.
    pub fn render(&mut self, ctx: &egui::Context, painter: &Painter, origin: Pos2, scene: &Scene) {
        let raster = scene.raster();
        let texture_id = self.sync_texture(ctx, raster).id();
        let size = Vec2::new(raster.width() as f32, raster.height() as f32);
        painter.image(
            texture_id,
            Rect::from_min_size(origin, size),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );

        let offset = origin.to_vec2();
        for shape in scene.shapes() {
            paint_shape(painter, shape, offset);
        }

        if let Some(outline) = scene.selection_outline() {
            let outline = outline.translate(offset);
            let corners = [
                outline.left_top(),
                outline.right_top(),
                outline.right_bottom(),
                outline.left_bottom(),
                outline.left_top(),
            ];
            painter.extend(EguiShape::dashed_line(
                &corners,
                Stroke::new(1.0, HIGHLIGHT_COLOR),
                4.0,
                2.0,
            ));
        }
        if let Some(handle) = scene.rotation_handle() {
            let handle = handle + offset;
            painter.circle_filled(handle, ROTATION_HANDLE_RADIUS, HANDLE_COLOR);
            painter.circle_stroke(handle, ROTATION_HANDLE_RADIUS, Stroke::new(1.0, Color32::BLACK));
        }
    }
}

/// Per-kind drawing of one shape, shifted by `offset` into screen space.
pub fn paint_shape(painter: &Painter, shape: &Shape, offset: Vec2) {
    let stroke = Stroke::new(shape.width(), shape.color());
    let points: Vec<Pos2> = shape.vertices().iter().map(|v| *v + offset).collect();

    match shape.kind() {
        ShapeKind::Line => paint_line(painter, &points, stroke, shape.line_style()),
        ShapeKind::Rect => {
            painter.rect_stroke(Rect::from_two_pos(points[0], points[1]), 0.0, stroke);
        }
        ShapeKind::Oval | ShapeKind::Ellipse => {
            let bounds = Rect::from_two_pos(points[0], points[1]);
            painter.add(EguiShape::closed_line(ellipse_points(bounds), stroke));
        }
        ShapeKind::Text => {
            if let Some(text) = shape.text_content() {
                painter.text(
                    points[0],
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(shape.font_size()),
                    shape.color(),
                );
            }
        }
        kind if kind.is_polygon() => {
            painter.add(EguiShape::closed_line(points, stroke));
        }
        _ => {}
    }
}

fn paint_line(painter: &Painter, points: &[Pos2], stroke: Stroke, style: LineStyle) {
    let [start, end] = [points[0], points[points.len() - 1]];
    match style {
        LineStyle::Solid => {
            painter.line_segment([start, end], stroke);
        }
        LineStyle::Dashed => {
            painter.extend(EguiShape::dashed_line(&[start, end], stroke, 8.0, 4.0));
        }
        LineStyle::Arrow => {
            painter.arrow(start, end - start, stroke);
        }
    }
}

/// Outline of the ellipse inscribed in `bounds`. Rotated two-point shapes
/// are still drawn axis-aligned between their corners.
fn ellipse_points(bounds: Rect) -> Vec<Pos2> {
    let center = bounds.center();
    let radius = bounds.size() / 2.0;
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * TAU;
            Pos2::new(center.x + radius.x * angle.cos(), center.y + radius.y * angle.sin())
        })
        .collect()
}
