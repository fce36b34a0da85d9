use crate::PaintApp;
use crate::notify::NoticeLevel;

/// The window currently asking the user for something.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    None,
    /// Text for the pending text shape
    Text { buffer: String },
    Save { path: String },
    Open { path: String },
    About,
}

enum Answer {
    Pending,
    Accept(String),
    Cancel,
}

fn prompt(ctx: &egui::Context, title: &str, label: &str, buffer: &mut String) -> Answer {
    let mut answer = Answer::Pending;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(label);
            let edit = ui.text_edit_singleline(buffer);
            edit.request_focus();
            let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || entered {
                    answer = Answer::Accept(buffer.clone());
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    answer = Answer::Cancel;
                }
            });
        });
    answer
}

pub fn dialogs(app: &mut PaintApp, ctx: &egui::Context) {
    let mut dialog = std::mem::take(app.dialog_mut());
    let keep_open = match &mut dialog {
        Dialog::None => false,
        Dialog::Text { buffer } => match prompt(ctx, "Input Text", "Enter text:", buffer) {
            Answer::Pending => true,
            Answer::Accept(text) => {
                app.submit_text(Some(&text));
                false
            }
            Answer::Cancel => {
                app.submit_text(None);
                false
            }
        },
        Dialog::Save { path } => match prompt(ctx, "Save Image", "Save to PNG file:", path) {
            Answer::Pending => true,
            Answer::Accept(path) => {
                app.save(&path);
                false
            }
            Answer::Cancel => false,
        },
        Dialog::Open { path } => match prompt(ctx, "Open Image", "Image file:", path) {
            Answer::Pending => true,
            Answer::Accept(path) => {
                app.open(&path);
                false
            }
            Answer::Cancel => false,
        },
        Dialog::About => {
            let mut open = true;
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label("Mini Paint");
                    ui.label("Freehand, shapes, text, flood fill and a PNG canvas.");
                });
            open
        }
    };
    if keep_open {
        *app.dialog_mut() = dialog;
    }
}

/// Show the oldest undismissed notice.
pub fn notices(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(notice) = app.notices().notices().first().cloned() else {
        return;
    };
    let color = match notice.level {
        NoticeLevel::Info => ctx.style().visuals.text_color(),
        NoticeLevel::Warning => ctx.style().visuals.warn_fg_color,
        NoticeLevel::Error => ctx.style().visuals.error_fg_color,
    };
    egui::Window::new(&notice.title)
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.colored_label(color, &notice.message);
            if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                app.notices_mut().dismiss(0);
            }
        });
}
