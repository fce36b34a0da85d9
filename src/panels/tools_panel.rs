use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::PaintApp;
use crate::editor::{Mode, ROTATE_STEP};
use crate::shape::{LineStyle, ShapeKind};
use crate::tool_config::{MAX_PEN_WIDTH, MIN_PEN_WIDTH};

/// Toolbar across the top of the window.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let mode = app.editor().mode();
            let config = app.config();

            ui.menu_button("Shapes", |ui| {
                for kind in ShapeKind::PICKER {
                    let selected = mode == Mode::for_kind(kind);
                    if ui.selectable_label(selected, kind.label()).clicked() {
                        app.set_mode(Mode::for_kind(kind));
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button(format!("Line: {}", config.line_style.label()), |ui| {
                for style in LineStyle::ALL {
                    if ui
                        .selectable_label(config.line_style == style, style.label())
                        .clicked()
                    {
                        app.choose_line_style(style);
                        ui.close_menu();
                    }
                }
            });

            let mut fill = config.fill_color;
            if color_edit_button_srgba(ui, &mut fill, Alpha::Opaque).changed() {
                app.choose_fill_color(fill);
            }
            if ui.selectable_label(mode == Mode::Fill, "Fill").clicked() {
                app.set_mode(Mode::Fill);
            }

            ui.separator();

            let has_selection = app.editor().scene().selected().is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("⟲"))
                .on_hover_text("Rotate left")
                .clicked()
            {
                app.rotate_selected(-ROTATE_STEP);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("⟳"))
                .on_hover_text("Rotate right")
                .clicked()
            {
                app.rotate_selected(ROTATE_STEP);
            }

            ui.separator();

            let history = app.editor().history();
            let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.redo();
            }
            if ui.button("Clear").clicked() {
                app.clear();
            }

            ui.separator();

            for tool in [Mode::Freehand, Mode::Eraser, Mode::Select, Mode::Text] {
                if ui.selectable_label(mode == tool, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.label());
                    app.set_mode(tool);
                }
            }
            if ui.button("Delete").clicked() {
                app.delete_selected();
            }

            ui.separator();

            let mut pen = config.pen_color;
            if color_edit_button_srgba(ui, &mut pen, Alpha::Opaque).changed() {
                app.set_config(config.with_pen_color(pen));
            }
            let hex = ui.add(egui::TextEdit::singleline(app.pen_hex_mut()).desired_width(64.0));
            if hex.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                app.apply_pen_hex();
            }

            ui.label("Width:");
            let mut width = config.pen_width;
            if ui
                .add(egui::DragValue::new(&mut width).range(MIN_PEN_WIDTH..=MAX_PEN_WIDTH).speed(0.1))
                .changed()
            {
                app.set_config(config.with_pen_width(width));
            }
        });
    });
}
