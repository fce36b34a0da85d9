use crate::PaintApp;
use crate::panels::Dialog;

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save").clicked() {
                    *app.dialog_mut() = Dialog::Save {
                        path: "drawing.png".to_owned(),
                    };
                    ui.close_menu();
                }
                if ui.button("Open").clicked() {
                    *app.dialog_mut() = Dialog::Open {
                        path: String::new(),
                    };
                    ui.close_menu();
                }
                if ui.button("Clear").clicked() {
                    app.clear();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Undo").clicked() {
                    app.undo();
                    ui.close_menu();
                }
                if ui.button("Redo").clicked() {
                    app.redo();
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    *app.dialog_mut() = Dialog::About;
                    ui.close_menu();
                }
            });
        });
    });
}
