use egui::Pos2;
use image::Rgb;
use mini_paint::editor::{Editor, Mode, ROTATE_KEY_STEP};
use mini_paint::notify::{NoticeLevel, NoticeLog};
use mini_paint::shape::{Shape, ShapeKind};
use mini_paint::tool_config::ToolConfig;

fn gesture(editor: &mut Editor, log: &mut NoticeLog, config: ToolConfig, from: Pos2, to: Pos2) {
    let _ = editor.pointer_down(from, config, log);
    let _ = editor.pointer_move(to, config);
    let _ = editor.pointer_up(to, config);
}

fn vertices(shapes: &[Shape]) -> Vec<Vec<Pos2>> {
    shapes.iter().map(|s| s.vertices().to_vec()).collect()
}

#[test]
fn test_add_delete_undo_redo_round_trip() {
    let mut editor = Editor::default();
    let mut log = NoticeLog::new();
    let config = ToolConfig::default();

    // S0: empty
    let s0: Vec<Shape> = editor.scene().shapes().to_vec();
    assert!(s0.is_empty());

    // S1: add a star
    editor.set_mode(Mode::Shape(ShapeKind::Star));
    gesture(&mut editor, &mut log, config, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    let s1 = editor.scene().shapes().to_vec();
    assert_eq!(s1.len(), 1);

    // S2: select and delete it
    editor.set_mode(Mode::Select);
    let _ = editor.pointer_down(Pos2::new(150.0, 150.0), config, &mut log);
    let _ = editor.pointer_up(Pos2::new(150.0, 150.0), config);
    assert_eq!(editor.scene().selected(), Some(0));
    let _ = editor.delete_selected(&mut log);
    assert!(editor.scene().shapes().is_empty());

    let _ = editor.undo(&mut log);
    assert_eq!(editor.scene().shapes(), s1.as_slice());
    let _ = editor.undo(&mut log);
    assert_eq!(editor.scene().shapes(), s0.as_slice());

    let _ = editor.redo(&mut log);
    assert_eq!(editor.scene().shapes(), s1.as_slice());
    let _ = editor.redo(&mut log);
    assert!(editor.scene().shapes().is_empty());
    assert!(log.is_empty(), "{:?}", log.notices());
}

#[test]
fn test_empty_history_notifies_without_change() {
    let mut editor = Editor::default();
    let mut log = NoticeLog::new();

    assert!(!editor.undo(&mut log).changed());
    assert!(!editor.redo(&mut log).changed());
    assert_eq!(log.len(), 2);
    assert!(log.notices().iter().all(|n| n.level == NoticeLevel::Info));
    assert!(editor.scene().shapes().is_empty());
}

#[test]
fn test_delete_only_shape_then_delete_again_warns() {
    let mut editor = Editor::default();
    let mut log = NoticeLog::new();
    let config = ToolConfig::default();

    editor.set_mode(Mode::Shape(ShapeKind::Hexagon));
    gesture(&mut editor, &mut log, config, Pos2::new(300.0, 200.0), Pos2::new(360.0, 260.0));
    editor.set_mode(Mode::Select);
    let _ = editor.pointer_down(Pos2::new(330.0, 230.0), config, &mut log);
    let _ = editor.pointer_up(Pos2::new(330.0, 230.0), config);

    assert!(editor.delete_selected(&mut log).changed());
    assert_eq!(editor.scene().selected(), None);
    assert!(editor.scene().shapes().is_empty());

    let depth = editor.history().undo_depth();
    assert!(!editor.delete_selected(&mut log).changed());
    assert_eq!(editor.history().undo_depth(), depth);
    assert_eq!(log.last().map(|n| n.level), Some(NoticeLevel::Warning));
}

#[test]
fn test_drag_move_is_one_undo_step() {
    let mut editor = Editor::default();
    let mut log = NoticeLog::new();
    let config = ToolConfig::default();

    editor.set_mode(Mode::Shape(ShapeKind::Rhombus));
    gesture(&mut editor, &mut log, config, Pos2::new(100.0, 100.0), Pos2::new(180.0, 160.0));
    let placed = vertices(editor.scene().shapes());

    editor.set_mode(Mode::Select);
    let _ = editor.pointer_down(Pos2::new(140.0, 130.0), config, &mut log);
    for step in 1..=10 {
        let _ = editor.pointer_move(Pos2::new(140.0 + step as f32 * 5.0, 130.0), config);
    }
    let _ = editor.pointer_up(Pos2::new(190.0, 130.0), config);

    let moved = vertices(editor.scene().shapes());
    assert_eq!(moved[0][0].x, placed[0][0].x + 50.0);
    assert_eq!(editor.history().undo_depth(), 2);

    let _ = editor.undo(&mut log);
    assert_eq!(vertices(editor.scene().shapes()), placed);
    assert_eq!(editor.scene().selected(), None);
}

#[test]
fn test_rotate_key_step_without_and_with_selection() {
    let mut editor = Editor::default();
    let mut log = NoticeLog::new();
    let config = ToolConfig::default();

    assert!(!editor.rotate_selected(ROTATE_KEY_STEP, &mut log).changed());
    assert_eq!(log.last().map(|n| n.level), Some(NoticeLevel::Warning));

    editor.set_mode(Mode::Shape(ShapeKind::Triangle));
    gesture(&mut editor, &mut log, config, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    editor.set_mode(Mode::Select);
    let _ = editor.pointer_down(Pos2::new(150.0, 150.0), config, &mut log);
    let _ = editor.pointer_up(Pos2::new(150.0, 150.0), config);

    let before = editor.scene().shapes()[0].centroid();
    for _ in 0..12 {
        let _ = editor.rotate_selected(ROTATE_KEY_STEP, &mut log);
    }
    let after = editor.scene().shapes()[0].centroid();
    assert!((after - before).length() < 1e-3);
    // Twelve 30 degree turns come back around
    let apex = editor.scene().shapes()[0].vertices()[0];
    assert!((apex - Pos2::new(150.0, 100.0)).length() < 1e-2, "{apex:?}");
}

#[test]
fn test_fill_inside_shape_recolors_raster() {
    let mut editor = Editor::default();
    let mut log = NoticeLog::new();
    let config = ToolConfig::default().with_fill_color(egui::Color32::from_rgb(0, 128, 255));

    editor.set_mode(Mode::Shape(ShapeKind::Rect));
    gesture(&mut editor, &mut log, config, Pos2::new(50.0, 50.0), Pos2::new(100.0, 100.0));

    editor.set_mode(Mode::Fill);
    assert!(editor.pointer_down(Pos2::new(75.0, 75.0), config, &mut log).changed());
    // Shapes are an overlay, so the whole blank raster takes the fill
    assert_eq!(editor.scene().raster().pixel(75, 75), Some(Rgb([0, 128, 255])));
    assert_eq!(editor.scene().raster().pixel(500, 500), Some(Rgb([0, 128, 255])));
    assert_eq!(editor.mode(), Mode::Fill);

    assert!(!editor.pointer_down(Pos2::new(700.0, 500.0), config, &mut log).changed());
    assert_eq!(log.last().map(|n| n.level), Some(NoticeLevel::Info));
}

#[test]
fn test_resize_does_not_rescale_shapes() {
    // Known limitation: shape coordinates stay absolute when the surface is resampled
    let mut editor = Editor::default();
    let mut log = NoticeLog::new();
    let config = ToolConfig::default();

    editor.set_mode(Mode::Shape(ShapeKind::Oval));
    gesture(&mut editor, &mut log, config, Pos2::new(700.0, 500.0), Pos2::new(780.0, 580.0));
    let placed = vertices(editor.scene().shapes());

    assert!(editor.resize_surface(640, 480).changed());
    assert_eq!(editor.scene().raster().size(), [640, 480]);
    assert_eq!(vertices(editor.scene().shapes()), placed);
}
