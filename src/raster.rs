use egui::{Color32, ColorImage, Pos2, Rect};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

mod fill;

pub use fill::flood_fill;

use crate::color::{WHITE, color32_to_rgb};
use crate::error::PaintResult;

/// Eraser strokes are always this wide, whatever the pen width.
pub const ERASER_WIDTH: f32 = 15.0;

/// The flattened pixel grid under the vector overlay.
///
/// Freehand, eraser and fill write here directly. The version counter bumps
/// on every change so the renderer knows when to re-upload its texture.
pub struct Raster {
    image: RgbImage,
    version: u64,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("version", &self.version)
            .finish()
    }
}

impl Raster {
    /// A blank white raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbImage::from_pixel(width, height, WHITE))
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image, version: 0 }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        (x < self.width() && y < self.height()).then(|| *self.image.get_pixel(x, y))
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Paint a round-capped segment of the given width.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        let rgb = color32_to_rgb(color);
        let radius = (width / 2.0).max(0.5);

        let area = Rect::from_two_pos(from, to).expand(radius);
        let max_x = self.width() as f32 - 1.0;
        let max_y = self.height() as f32 - 1.0;
        if area.max.x < 0.0 || area.max.y < 0.0 || area.min.x > max_x || area.min.y > max_y {
            return;
        }
        let x0 = area.min.x.floor().max(0.0) as u32;
        let y0 = area.min.y.floor().max(0.0) as u32;
        let x1 = area.max.x.ceil().min(max_x) as u32;
        let y1 = area.max.y.ceil().min(max_y) as u32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Pos2::new(x as f32, y as f32);
                if distance_to_segment(center, from, to) <= radius {
                    self.image.put_pixel(x, y, rgb);
                }
            }
        }
        self.touch();
    }

    /// Seed-fill the region under `pos` with `color`. Returns pixels painted.
    pub fn fill(&mut self, pos: Pos2, color: Color32) -> PaintResult<usize> {
        let painted = flood_fill(
            &mut self.image,
            pos.x.floor() as i64,
            pos.y.floor() as i64,
            color32_to_rgb(color),
        )?;
        if painted > 0 {
            self.touch();
        }
        Ok(painted)
    }

    /// Reset to white, keeping the current size.
    pub fn clear(&mut self) {
        self.image = RgbImage::from_pixel(self.width(), self.height(), WHITE);
        self.touch();
    }

    /// Resample to a new size with a bicubic filter.
    pub fn resize(&mut self, width: u32, height: u32) {
        if [width, height] == self.size() || width == 0 || height == 0 {
            return;
        }
        self.image = imageops::resize(&self.image, width, height, FilterType::CatmullRom);
        self.touch();
    }

    /// Swap in a decoded image, taking over its size.
    pub fn replace(&mut self, image: RgbImage) {
        self.image = image;
        self.touch();
    }

    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.width() as usize, self.height() as usize];
        ColorImage::from_rgb(size, self.image.as_raw())
    }
}

/// Distance from `point` to the segment `start..end`.
fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let len_sq = line.length_sq();
    if len_sq == 0.0 {
        return point.distance(start);
    }
    let t = ((point - start).dot(line) / len_sq).clamp(0.0, 1.0);
    point.distance(start + line * t)
}
