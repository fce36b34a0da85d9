use egui::Color32;
use image::Rgb;

use crate::error::{PaintError, PaintResult};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Parses a `#RRGGBB` string (leading `#` optional) into an RGB triple.
pub fn hex_to_rgb(hex: &str) -> PaintResult<Rgb<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(PaintError::InvalidColor(hex.to_owned()));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let pair = &digits[i * 2..i * 2 + 2];
        *channel = u8::from_str_radix(pair, 16)
            .map_err(|_| PaintError::InvalidColor(hex.to_owned()))?;
    }
    Ok(Rgb(rgb))
}

/// Formats a color as lowercase `#rrggbb`, the form the color picker reports.
pub fn rgb_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

pub fn color32_to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

pub fn rgb_to_color32(rgb: Rgb<u8>) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Shorthand for the picker path: hex string straight to an egui color.
pub fn hex_to_color32(hex: &str) -> PaintResult<Color32> {
    hex_to_rgb(hex).map(rgb_to_color32)
}
