use egui::{Key, Modifiers, Pos2, Rect};

use crate::color::{hex_to_color32, rgb_to_hex};
use crate::editor::{Editor, Mode, Outcome, ROTATE_KEY_STEP};
use crate::file_handler::{FileHandler, load_raster, save_raster};
use crate::input::{InputEvent, InputHandler};
use crate::notify::{NoticeLog, Notifier};
use crate::panels::{self, Dialog};
use crate::renderer::Renderer;
use crate::shape::LineStyle;
use crate::tool_config::ToolConfig;

/// We derive Deserialize/Serialize so we can persist the tool settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    config: ToolConfig,
    mode: Mode,

    #[serde(skip)]
    editor: Editor,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    notices: NoticeLog,
    #[serde(skip)]
    file_handler: FileHandler,
    #[serde(skip)]
    dialog: Dialog,
    #[serde(skip)]
    pen_hex: String,
    #[serde(skip)]
    pointer: Option<Pos2>,
}

impl Default for PaintApp {
    fn default() -> Self {
        let config = ToolConfig::default();
        Self {
            config,
            mode: Mode::default(),
            editor: Editor::default(),
            renderer: Renderer::new(),
            input: InputHandler::new(Rect::NOTHING),
            notices: NoticeLog::new(),
            file_handler: FileHandler::new(),
            dialog: Dialog::None,
            pen_hex: rgb_to_hex(config.pen_color),
            pointer: None,
        }
    }
}

impl std::fmt::Debug for PaintApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintApp")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.editor.set_mode(app.mode);
        app.pen_hex = rgb_to_hex(app.config.pen_color);
        log::info!("Starting in {} mode", app.mode.label());
        app
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn config(&self) -> ToolConfig {
        self.config
    }

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeLog {
        &mut self.notices
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn dialog_mut(&mut self) -> &mut Dialog {
        &mut self.dialog
    }

    /// A prompt or notice is waiting for the user.
    pub fn is_modal_open(&self) -> bool {
        self.dialog != Dialog::None || !self.notices.is_empty()
    }

    pub fn pen_hex_mut(&mut self) -> &mut String {
        &mut self.pen_hex
    }

    /// Explicit tool selection from the toolbar or menus.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.editor.set_mode(mode);
    }

    /// Replace the tool settings with a freshly built config.
    pub fn set_config(&mut self, config: ToolConfig) {
        if config.pen_color != self.config.pen_color {
            self.pen_hex = rgb_to_hex(config.pen_color);
        }
        self.config = config;
    }

    /// Picking a line style also switches to line mode.
    pub fn choose_line_style(&mut self, style: LineStyle) {
        self.set_config(self.config.with_line_style(style));
        self.set_mode(Mode::for_kind(crate::shape::ShapeKind::Line));
    }

    /// Picking a fill color also switches to fill mode.
    pub fn choose_fill_color(&mut self, color: egui::Color32) {
        self.set_config(self.config.with_fill_color(color));
        self.set_mode(Mode::Fill);
    }

    /// Apply the `#RRGGBB` typed into the pen color field.
    pub fn apply_pen_hex(&mut self) {
        match hex_to_color32(&self.pen_hex) {
            Ok(color) => self.set_config(self.config.with_pen_color(color)),
            Err(err) => {
                self.notices.error("Error", &format!("Failed to pick color: {err}"));
                self.pen_hex = rgb_to_hex(self.config.pen_color);
            }
        }
    }

    pub fn undo(&mut self) {
        let _ = self.editor.undo(&mut self.notices);
    }

    pub fn redo(&mut self) {
        let _ = self.editor.redo(&mut self.notices);
    }

    pub fn rotate_selected(&mut self, degrees: f32) {
        let _ = self.editor.rotate_selected(degrees, &mut self.notices);
    }

    pub fn delete_selected(&mut self) {
        let _ = self.editor.delete_selected(&mut self.notices);
    }

    pub fn clear(&mut self) {
        let _ = self.editor.clear();
    }

    pub fn submit_text(&mut self, text: Option<&str>) {
        let _ = self.editor.submit_text(text, self.config);
    }

    pub fn save(&mut self, path: &str) {
        match save_raster(self.editor.scene().raster(), path.trim()) {
            Ok(path) => self
                .notices
                .info("Info", &format!("Image saved to {}", path.display())),
            Err(err) => self.notices.error("Error", &format!("Failed to save image: {err}")),
        }
    }

    pub fn open(&mut self, path: &str) {
        match load_raster(path.trim()) {
            Ok(image) => {
                let _ = self.editor.replace_raster(image);
            }
            Err(err) => self.notices.error("Error", &format!("Failed to load image: {err}")),
        }
    }

    /// Route this frame's canvas input to the editor.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        self.pointer = self.input.hover_pos(ctx);

        for event in self.input.process_input(ctx) {
            let outcome = match event {
                InputEvent::PointerDown { pos } => {
                    self.editor.pointer_down(pos, self.config, &mut self.notices)
                }
                InputEvent::PointerMove { pos } => self.editor.pointer_move(pos, self.config),
                InputEvent::PointerUp { pos } => self.editor.pointer_up(pos, self.config),
                InputEvent::KeyDown { key, modifiers } => match key_rotation(key, modifiers) {
                    Some(degrees) => self.editor.rotate_selected(degrees, &mut self.notices),
                    None => Outcome::Unchanged,
                },
            };
            if outcome.changed() {
                ctx.request_repaint();
            }
        }

        if self.editor.pending_text().is_some() && !matches!(self.dialog, Dialog::Text { .. }) {
            self.dialog = Dialog::Text {
                buffer: String::new(),
            };
        }
    }

    /// Canvas input is held back while a prompt or notice is up. A gesture
    /// in flight is finished where the pointer last was.
    pub fn suspend_input(&mut self) {
        if let Some(InputEvent::PointerUp { pos }) = self.input.suspend() {
            let _ = self.editor.pointer_up(pos, self.config);
        }
    }

    /// Follow the size of the drawing surface.
    pub fn resize_surface(&mut self, canvas_rect: Rect) {
        let width = canvas_rect.width().floor().max(0.0) as u32;
        let height = canvas_rect.height().floor().max(0.0) as u32;
        let _ = self.editor.resize_surface(width, height);
    }

    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, origin: Pos2) {
        self.renderer.render(ctx, painter, origin, self.editor.scene());
    }

    fn load_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        if let Some((name, decoded)) = self.file_handler.take_dropped_image() {
            match decoded {
                Ok(image) => {
                    log::info!("Loading dropped image {name}");
                    let _ = self.editor.replace_raster(image);
                }
                Err(err) => self.notices.error("Error", &format!("Failed to load {name}: {err}")),
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.load_dropped_files(ctx);

        panels::menu_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);
        panels::dialogs(self, ctx);
        panels::notices(self, ctx);
    }
}

/// Plain `R` turns the selection; chorded variants are left to the system.
fn key_rotation(key: Key, modifiers: Modifiers) -> Option<f32> {
    (key == Key::R && modifiers.is_none()).then_some(ROTATE_KEY_STEP)
}
