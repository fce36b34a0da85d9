#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod notify;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod tool_config;

pub use app::PaintApp;
pub use editor::{Editor, Mode, Outcome};
pub use error::{PaintError, PaintResult};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use notify::{Notice, NoticeLevel, NoticeLog, Notifier};
pub use raster::Raster;
pub use renderer::Renderer;
pub use scene::Scene;
pub use shape::{LineStyle, Shape, ShapeKind};
pub use tool_config::ToolConfig;
