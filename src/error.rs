use thiserror::Error;

/// Failures that abort an operation and leave the editor state untouched.
///
/// User-guidance conditions (nothing selected, empty history, fill miss) are
/// not errors; they are reported as [`crate::notify::Notice`]s instead.
#[derive(Error, Debug)]
pub enum PaintError {
    #[error("image codec failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("point ({x}, {y}) lies outside the raster")]
    OutOfBounds { x: i64, y: i64 },
}

pub type PaintResult<T> = Result<T, PaintError>;
