use std::sync::atomic::{AtomicUsize, Ordering};

// Shape ids are unique for the life of the process, across undo and redo
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed)
}
