use crate::PaintApp;
use crate::color::rgb_to_hex;

/// `Mode: Rectangle | Color: #000000 | Position: (12, 40)`
pub fn status_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        let position = match app.pointer() {
            Some(pos) => format!("({:.0}, {:.0})", pos.x, pos.y),
            None => "-".to_owned(),
        };
        ui.label(format!(
            "Mode: {} | Color: {} | Position: {}",
            app.editor().mode().label(),
            rgb_to_hex(app.config().pen_color),
            position
        ));
    });
}
