use egui::{Pos2, Rect};

use crate::history::Snapshot;
use crate::raster::Raster;
use crate::shape::{HIT_MARGIN, Shape};

/// Distance of the rotation handle above the selection's bounding box.
pub const ROTATION_HANDLE_OFFSET: f32 = 25.0;
pub const ROTATION_HANDLE_RADIUS: f32 = 8.0;

/// The shapes on the canvas plus the raster underneath them.
///
/// Shapes are kept in z-order: later entries draw on top and are hit first.
/// The selection is an index into `shapes` and is dropped whenever the list
/// changes shape underneath it.
#[derive(Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<usize>,
    raster: Raster,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            raster: Raster::new(width, height),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut Raster {
        &mut self.raster
    }

    /// Append on top of everything else; returns the new shape's index.
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Index of the topmost shape whose hit box contains `pos`.
    pub fn hit_test(&self, pos: Pos2) -> Option<usize> {
        self.shapes.iter().rposition(|shape| shape.hit_test(pos))
    }

    /// Select the topmost shape under `pos`, or clear the selection on a miss.
    pub fn select_at(&mut self, pos: Pos2) -> Option<usize> {
        self.selected = self.hit_test(pos);
        self.selected
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        self.selected.and_then(|i| self.shapes.get_mut(i))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove the selected shape and clear the selection.
    pub fn remove_selected(&mut self) -> Option<Shape> {
        let index = self.selected.take()?;
        (index < self.shapes.len()).then(|| self.shapes.remove(index))
    }

    /// Replace every shape with a history snapshot.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.shapes = snapshot;
        self.selected = None;
    }

    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }

    /// Dashed highlight box around the selection.
    pub fn selection_outline(&self) -> Option<Rect> {
        self.selected_shape()
            .map(|shape| shape.bounds().expand(HIT_MARGIN))
    }

    /// Centre of the rotation handle drawn above the selection.
    pub fn rotation_handle(&self) -> Option<Pos2> {
        self.selected_shape().map(|shape| {
            let bounds = shape.bounds();
            Pos2::new(bounds.center().x, bounds.min.y - ROTATION_HANDLE_OFFSET)
        })
    }

    pub fn hits_rotation_handle(&self, pos: Pos2) -> bool {
        self.rotation_handle()
            .is_some_and(|handle| handle.distance(pos) <= ROTATION_HANDLE_RADIUS)
    }
}
