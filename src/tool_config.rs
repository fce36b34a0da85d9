use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::shape::LineStyle;

pub const MIN_PEN_WIDTH: f32 = 1.0;
pub const MAX_PEN_WIDTH: f32 = 10.0;

/// The drawing settings a gesture is performed with.
///
/// This is a plain value: changing a setting builds a new config, and every
/// gesture call receives the config it should use. Nothing about the pen is
/// remembered inside the editor between gestures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub pen_color: Color32,
    pub pen_width: f32,
    pub line_style: LineStyle,
    pub fill_color: Color32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            pen_color: Color32::BLACK,
            pen_width: 3.0,
            line_style: LineStyle::Solid,
            fill_color: Color32::BLACK,
        }
    }
}

impl ToolConfig {
    pub fn with_pen_color(self, pen_color: Color32) -> Self {
        Self { pen_color, ..self }
    }

    /// Width is clamped to the range offered by the toolbar.
    pub fn with_pen_width(self, pen_width: f32) -> Self {
        Self {
            pen_width: pen_width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH),
            ..self
        }
    }

    pub fn with_line_style(self, line_style: LineStyle) -> Self {
        Self { line_style, ..self }
    }

    pub fn with_fill_color(self, fill_color: Color32) -> Self {
        Self { fill_color, ..self }
    }
}
