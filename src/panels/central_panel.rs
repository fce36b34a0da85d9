use crate::PaintApp;

/// The drawing surface. Fills whatever space the other panels leave.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            let _ = ui.allocate_rect(canvas_rect, egui::Sense::hover());

            app.resize_surface(canvas_rect);

            // Open dialogs are modal for the canvas
            if app.is_modal_open() {
                app.suspend_input();
            } else {
                app.handle_input(ctx, canvas_rect);
            }

            let painter = ui.painter_at(canvas_rect);
            app.render(ctx, &painter, canvas_rect.min);
        });
}
