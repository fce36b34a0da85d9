use crate::shape::Shape;

/// One saved copy of the shape list.
pub type Snapshot = Vec<Shape>;

/// Snapshot-based undo/redo over the shape collection.
///
/// Each entry owns its own vertex storage, so editing the live scene never
/// reaches back into history. The raster is not tracked here.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// States that can be returned to with undo, most recent last
    undo_stack: Vec<Snapshot>,
    /// States undone since the last checkpoint, most recent last
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `shapes` as the state to return to, dropping any redo branch.
    pub fn checkpoint(&mut self, shapes: &[Shape]) {
        self.push_snapshot(shapes.to_vec());
    }

    /// Store an already-copied snapshot, e.g. one taken at the start of a drag.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Step back. `current` is kept for redo; `None` when nothing to undo.
    pub fn undo(&mut self, current: &[Shape]) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_vec());
        Some(previous)
    }

    /// Step forward again. `current` is kept for undo; `None` when nothing to redo.
    pub fn redo(&mut self, current: &[Shape]) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_vec());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use egui::{Color32, Pos2, Vec2};

    fn rect() -> Shape {
        Shape::from_corners(
            ShapeKind::Rect,
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 10.0),
            Color32::BLACK,
            1.0,
        )
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(history.undo(&[]).is_none());
        assert!(history.redo(&[]).is_none());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let mut history = History::new();
        let s0: Vec<Shape> = Vec::new();

        history.checkpoint(&s0);
        let s1 = vec![rect()];
        history.checkpoint(&s1);
        let s2: Vec<Shape> = Vec::new();

        let back = history.undo(&s2).unwrap();
        assert_eq!(back, s1);
        let back = history.undo(&back).unwrap();
        assert_eq!(back, s0);
        assert!(history.undo(&back).is_none());

        let forward = history.redo(&back).unwrap();
        assert_eq!(forward, s1);
        let forward = history.redo(&forward).unwrap();
        assert_eq!(forward, s2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_checkpoint_clears_redo() {
        let mut history = History::new();
        history.checkpoint(&[]);
        history.undo(&[rect()]);
        assert!(history.can_redo());
        history.checkpoint(&[]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_snapshot_is_not_aliased() {
        let mut history = History::new();
        let mut live = vec![rect()];
        history.checkpoint(&live);
        live[0].translate(Vec2::new(50.0, 50.0));

        let restored = history.undo(&live).unwrap();
        assert_eq!(restored[0].vertices()[0], Pos2::new(0.0, 0.0));
    }
}
