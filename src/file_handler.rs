use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::error::PaintResult;
use crate::raster::Raster;

/// Write the raster as a PNG. A missing extension defaults to `.png`.
///
/// Only pixels are stored; the vector shapes are not part of the file.
pub fn save_raster(raster: &Raster, path: impl AsRef<Path>) -> PaintResult<PathBuf> {
    let mut path = path.as_ref().to_path_buf();
    if path.extension().is_none() {
        path.set_extension("png");
    }
    raster.image().save_with_format(&path, ImageFormat::Png)?;
    log::info!("Saved {}x{} raster to {}", raster.width(), raster.height(), path.display());
    Ok(path)
}

/// Read an image file and convert it to RGB.
pub fn load_raster(path: impl AsRef<Path>) -> PaintResult<RgbImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let image = decode_raster(&bytes)?;
    log::info!("Loaded {}x{} image from {}", image.width(), image.height(), path.display());
    Ok(image)
}

pub fn decode_raster(bytes: &[u8]) -> PaintResult<RgbImage> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Collects image files dropped onto the window.
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up files dropped this frame. Returns true if there are any.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decode the most recently dropped image file, if any.
    ///
    /// Dropping several files loads the last image among them; the raster
    /// can only hold one.
    pub fn take_dropped_image(&mut self) -> Option<(String, PaintResult<RgbImage>)> {
        let files = std::mem::take(&mut self.dropped_files);
        let file = files.into_iter().filter(is_image_file).last()?;
        let name = file_name(&file);

        let decoded = if let Some(bytes) = &file.bytes {
            decode_raster(bytes)
        } else if let Some(path) = &file.path {
            load_raster(path)
        } else {
            log::warn!("Dropped file has no accessible data: {name}");
            return None;
        };
        Some((name, decoded))
    }
}

fn file_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let is_image = file
        .path
        .as_ref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| ext == "png");
    if !is_image {
        log::warn!("Dropped file is not a supported type: {}", file_name(file));
    }
    is_image
}
