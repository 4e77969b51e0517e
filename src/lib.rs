#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod dialogs;
pub mod download;
pub mod element;
pub mod error;
pub mod export;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod tools;
pub mod view;

pub use app::WhiteboardApp;
pub use command::{Command, History};
pub use element::{Element, ElementDraft, ElementId, ElementUpdate, Shape, Style};
pub use error::{ExportError, SettingsError};
pub use export::{ExportFormat, ExportOptions, ExportQuality};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use interaction::{Interaction, InteractionState, TextKind, TextRequest};
pub use renderer::{DrawCommand, Frame, RenderInput};
pub use settings::Settings;
pub use state::DrawingState;
pub use tools::{Tool, ToolAction, ToolbarItem};
pub use view::ViewTransform;
