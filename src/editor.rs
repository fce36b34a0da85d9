//! The interaction state machine sitting between pointer events and the scene.
//!
//! The active [`Mode`] only changes through [`Editor::set_mode`]. Within a
//! mode, each pointer-down → move → pointer-up sequence is tracked as a
//! [`Gesture`]:
//!
//! ```text
//! Idle ──down──► Stroke  ──move──► (paint raster) ──up──► Idle    freehand, eraser
//! Idle ──down──► Drag    ─────────────────────────up──► Idle      shapes (+ checkpoint)
//! Idle ──down──► Move    ──move──► (translate)    ──up──► Idle    select (+ checkpoint)
//! Idle ──down──► Rotate  ──move──► (rotate)       ──up──► Idle    select, on handle
//! ```
//!
//! Text placement ends in a pending prompt instead of a shape; the caller
//! answers it with [`Editor::submit_text`]. Fill acts entirely on pointer-down.

use egui::{Color32, Pos2};
use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::history::{History, Snapshot};
use crate::notify::Notifier;
use crate::raster::ERASER_WIDTH;
use crate::scene::Scene;
use crate::shape::{Shape, ShapeKind};
use crate::tool_config::ToolConfig;

/// Rotation applied by the toolbar rotate buttons.
pub const ROTATE_STEP: f32 = 15.0;
/// Rotation applied by the `R` shortcut.
pub const ROTATE_KEY_STEP: f32 = 30.0;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
/// Surface resizes smaller than this are ignored.
pub const MIN_WIDTH: u32 = 600;
pub const MIN_HEIGHT: u32 = 400;

/// The active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Freehand,
    Eraser,
    /// Drag out a parametric shape (line, rectangle, ..., rhombus).
    Shape(ShapeKind),
    Text,
    Select,
    Fill,
}

impl Mode {
    /// Mode that places shapes of `kind`.
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Text => Mode::Text,
            kind => Mode::Shape(kind),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Freehand => "Freehand",
            Mode::Eraser => "Eraser",
            Mode::Shape(kind) => kind.label(),
            Mode::Text => "Text",
            Mode::Select => "Select",
            Mode::Fill => "Fill",
        }
    }
}

/// Whether an operation changed anything worth redrawing.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

impl Outcome {
    pub fn changed(self) -> bool {
        self == Outcome::Changed
    }
}

/// Drag-rotate bookkeeping: the last pointer sample and the pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRotation {
    pub origin: Pos2,
    pub center: Pos2,
}

/// The pointer interaction in progress.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Freehand or eraser stroke; `last` is where the next segment starts
    Stroke { last: Pos2 },
    /// Parametric shape being dragged out from `start`
    Drag { start: Pos2 },
    /// Selected shape following the pointer
    Move { last: Pos2, before: Snapshot },
    /// Selected shape turning around its centroid
    Rotate {
        rotation: PendingRotation,
        before: Snapshot,
    },
}

/// Owns the scene and its history, and turns gestures into edits.
#[derive(Debug)]
pub struct Editor {
    scene: Scene,
    history: History,
    mode: Mode,
    gesture: Gesture,
    pending_text: Option<Pos2>,
    /// Last accepted drawing-surface size; the raster may differ after a load
    surface: [u32; 2],
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Editor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scene: Scene::new(width, height),
            history: History::new(),
            mode: Mode::default(),
            gesture: Gesture::Idle,
            pending_text: None,
            surface: [width, height],
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Where the current stroke or drag started, if one is in progress.
    pub fn gesture_start(&self) -> Option<Pos2> {
        match &self.gesture {
            Gesture::Stroke { last } => Some(*last),
            Gesture::Drag { start } => Some(*start),
            _ => None,
        }
    }

    pub fn pending_rotation(&self) -> Option<PendingRotation> {
        match &self.gesture {
            Gesture::Rotate { rotation, .. } => Some(*rotation),
            _ => None,
        }
    }

    /// Anchor of a text shape waiting for its string.
    pub fn pending_text(&self) -> Option<Pos2> {
        self.pending_text
    }

    /// Switch tools. Drops the selection and any unfinished gesture.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("Tool changed: {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
        self.gesture = Gesture::Idle;
        self.pending_text = None;
        self.scene.clear_selection();
    }

    pub fn pointer_down(
        &mut self,
        pos: Pos2,
        config: ToolConfig,
        notifier: &mut dyn Notifier,
    ) -> Outcome {
        match self.mode {
            Mode::Freehand | Mode::Eraser => {
                self.gesture = Gesture::Stroke { last: pos };
                Outcome::Unchanged
            }
            Mode::Shape(_) | Mode::Text => {
                self.gesture = Gesture::Drag { start: pos };
                Outcome::Unchanged
            }
            Mode::Select => self.begin_select(pos, notifier),
            Mode::Fill => self.fill_at(pos, config, notifier),
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2, config: ToolConfig) -> Outcome {
        match &mut self.gesture {
            Gesture::Idle | Gesture::Drag { .. } => Outcome::Unchanged,
            Gesture::Stroke { last } => {
                let (color, width) = match self.mode {
                    Mode::Eraser => (Color32::WHITE, ERASER_WIDTH),
                    _ => (config.pen_color, config.pen_width),
                };
                self.scene
                    .raster_mut()
                    .stroke_segment(*last, pos, color, width);
                *last = pos;
                Outcome::Changed
            }
            Gesture::Move { last, .. } => {
                let delta = pos - *last;
                *last = pos;
                match self.scene.selected_shape_mut() {
                    Some(shape) => {
                        shape.translate(delta);
                        Outcome::Changed
                    }
                    None => Outcome::Unchanged,
                }
            }
            Gesture::Rotate { rotation, .. } => {
                let degrees = swept_angle(rotation.center, rotation.origin, pos);
                rotation.origin = pos;
                match self.scene.selected_shape_mut() {
                    Some(shape) => {
                        shape.rotate(degrees);
                        Outcome::Changed
                    }
                    None => Outcome::Unchanged,
                }
            }
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2, config: ToolConfig) -> Outcome {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle | Gesture::Stroke { .. } => Outcome::Unchanged,
            Gesture::Drag { start } => match self.mode {
                Mode::Shape(kind) => self.place_shape(kind, start, pos, config),
                Mode::Text => {
                    self.pending_text = Some(pos);
                    Outcome::Unchanged
                }
                _ => Outcome::Unchanged,
            },
            // A click that selects without dragging leaves nothing to undo
            Gesture::Move { before, .. } | Gesture::Rotate { before, .. } => {
                if self.scene.selected().is_some() && before.as_slice() != self.scene.shapes() {
                    self.history.push_snapshot(before);
                    Outcome::Changed
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    /// Answer the text prompt opened by a text-mode click.
    ///
    /// `None` (cancelled) or an empty string places nothing.
    pub fn submit_text(&mut self, text: Option<&str>, config: ToolConfig) -> Outcome {
        let Some(anchor) = self.pending_text.take() else {
            return Outcome::Unchanged;
        };
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            log::debug!("Text entry cancelled");
            return Outcome::Unchanged;
        };

        self.history.checkpoint(self.scene.shapes());
        self.scene
            .add_shape(Shape::text(anchor, text, config.pen_color, config.pen_width));
        log::info!("Placed text at ({}, {})", anchor.x, anchor.y);
        Outcome::Changed
    }

    /// Rotate the selection by a fixed step (toolbar buttons, `R` key).
    pub fn rotate_selected(&mut self, degrees: f32, notifier: &mut dyn Notifier) -> Outcome {
        if self.scene.selected().is_none() {
            notifier.warning("Warning", "Select a shape first.");
            return Outcome::Unchanged;
        }
        self.history.checkpoint(self.scene.shapes());
        if let Some(shape) = self.scene.selected_shape_mut() {
            shape.rotate(degrees);
        }
        Outcome::Changed
    }

    pub fn delete_selected(&mut self, notifier: &mut dyn Notifier) -> Outcome {
        if self.scene.selected().is_none() {
            notifier.warning("Warning", "Select a shape first.");
            return Outcome::Unchanged;
        }
        self.history.checkpoint(self.scene.shapes());
        if let Some(shape) = self.scene.remove_selected() {
            log::info!("Deleted {} #{}", shape.kind().label(), shape.id());
        }
        Outcome::Changed
    }

    pub fn undo(&mut self, notifier: &mut dyn Notifier) -> Outcome {
        match self.history.undo(self.scene.shapes()) {
            Some(snapshot) => {
                self.restore(snapshot);
                Outcome::Changed
            }
            None => {
                notifier.info("Info", "Nothing to undo.");
                Outcome::Unchanged
            }
        }
    }

    pub fn redo(&mut self, notifier: &mut dyn Notifier) -> Outcome {
        match self.history.redo(self.scene.shapes()) {
            Some(snapshot) => {
                self.restore(snapshot);
                Outcome::Changed
            }
            None => {
                notifier.info("Info", "Nothing to redo.");
                Outcome::Unchanged
            }
        }
    }

    /// Remove every shape and blank the raster. Only the shapes can be undone.
    pub fn clear(&mut self) -> Outcome {
        self.history.checkpoint(self.scene.shapes());
        self.scene.clear_shapes();
        self.scene.raster_mut().clear();
        self.gesture = Gesture::Idle;
        Outcome::Changed
    }

    /// Follow a drawing-surface resize. Shapes keep their absolute coordinates.
    ///
    /// Only a change of the surface itself resamples; a raster loaded at a
    /// different size is left alone until the surface next changes.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Outcome {
        if width < MIN_WIDTH || height < MIN_HEIGHT || [width, height] == self.surface {
            return Outcome::Unchanged;
        }
        self.surface = [width, height];
        log::debug!("Resampling raster to {width}x{height}");
        self.scene.raster_mut().resize(width, height);
        Outcome::Changed
    }

    /// Swap the raster for a freshly decoded image. Shapes are left alone.
    pub fn replace_raster(&mut self, image: RgbImage) -> Outcome {
        self.scene.raster_mut().replace(image);
        Outcome::Changed
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.gesture = Gesture::Idle;
        self.scene.restore(snapshot);
    }

    fn place_shape(&mut self, kind: ShapeKind, start: Pos2, end: Pos2, config: ToolConfig) -> Outcome {
        let shape = match kind {
            ShapeKind::Line => Shape::line(start, end, config.pen_color, config.pen_width, config.line_style),
            kind => Shape::from_corners(kind, start, end, config.pen_color, config.pen_width),
        };
        self.history.checkpoint(self.scene.shapes());
        let index = self.scene.add_shape(shape);
        log::info!("Placed {} as shape {index}", kind.label());
        Outcome::Changed
    }

    fn begin_select(&mut self, pos: Pos2, notifier: &mut dyn Notifier) -> Outcome {
        if let Some(shape) = self.scene.selected_shape() {
            if self.scene.hits_rotation_handle(pos) {
                let center = shape.centroid();
                self.gesture = Gesture::Rotate {
                    rotation: PendingRotation { origin: pos, center },
                    before: self.scene.shapes().to_vec(),
                };
                return Outcome::Unchanged;
            }
        }

        match self.scene.select_at(pos) {
            Some(index) => {
                log::debug!("Selected shape {index}");
                self.gesture = Gesture::Move {
                    last: pos,
                    before: self.scene.shapes().to_vec(),
                };
            }
            None => {
                self.gesture = Gesture::Idle;
                notifier.info("Info", "No shape selected.");
            }
        }
        Outcome::Changed
    }

    fn fill_at(&mut self, pos: Pos2, config: ToolConfig, notifier: &mut dyn Notifier) -> Outcome {
        if self.scene.hit_test(pos).is_none() {
            notifier.info("Info", "Click inside a shape to fill it.");
            return Outcome::Unchanged;
        }
        match self.scene.raster_mut().fill(pos, config.fill_color) {
            Ok(_) => {
                self.history.checkpoint(self.scene.shapes());
                Outcome::Changed
            }
            Err(err) => {
                notifier.error("Error", &format!("Flood fill failed: {err}"));
                Outcome::Unchanged
            }
        }
    }
}

/// Signed angle in degrees swept about `center` going from `from` to `to`,
/// normalised to (-180, 180].
fn swept_angle(center: Pos2, from: Pos2, to: Pos2) -> f32 {
    let a = from - center;
    let b = to - center;
    let mut degrees = (b.y.atan2(b.x) - a.y.atan2(a.x)).to_degrees();
    if degrees > 180.0 {
        degrees -= 360.0;
    } else if degrees <= -180.0 {
        degrees += 360.0;
    }
    degrees
}
