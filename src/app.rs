use egui::{Color32, Rect, Vec2};

use crate::command::Command;
use crate::dialogs::{ExportDialog, ShareDialog, TextEntryDialog};
use crate::export::{self, ExportOptions};
use crate::input::InputHandler;
use crate::interaction::Interaction;
use crate::panels;
use crate::renderer::{self, Frame, RenderInput};
use crate::settings::Settings;
use crate::state::DrawingState;
use crate::tools::ToolbarItem;

/// Only the settings survive a restart; the drawing starts empty every time.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct WhiteboardApp {
    settings: Settings,
    #[serde(skip)]
    drawing: DrawingState,
    #[serde(skip)]
    interaction: Interaction,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    text_entry: Option<TextEntryDialog>,
    #[serde(skip)]
    pub(crate) export_dialog: ExportDialog,
    #[serde(skip)]
    pub(crate) share_dialog: ShareDialog,
    #[serde(skip)]
    pub(crate) editing_title: bool,
    #[serde(skip)]
    pub(crate) focus_title: bool,
    #[serde(skip)]
    pub(crate) voice_active: bool,
    #[serde(skip)]
    last_saved: Option<f64>,
    #[serde(skip)]
    last_error: Option<String>,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(not(target_arch = "wasm32"))]
        let settings = settings.with_env_overrides();

        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        let settings = settings.sanitized();
        Self {
            drawing: DrawingState::with_style(settings.default_color, settings.default_stroke_width),
            settings,
            interaction: Interaction::new(),
            input: InputHandler::new(),
            text_entry: None,
            export_dialog: ExportDialog::default(),
            share_dialog: ShareDialog::default(),
            editing_title: false,
            focus_title: false,
            voice_active: false,
            last_saved: None,
            last_error: None,
        }
    }

    pub fn drawing(&self) -> &DrawingState {
        &self.drawing
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn execute(&mut self, commands: Vec<Command>) {
        self.drawing.execute_all(commands);
    }

    /// Changes the drawing color and remembers it for the next session.
    pub fn set_color(&mut self, color: Color32) {
        self.settings.default_color = color;
        self.drawing.execute(Command::SetColor(color));
    }

    /// Changes the stroke width and remembers it for the next session.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.drawing.execute(Command::SetStrokeWidth(width));
        self.settings.default_stroke_width = self.drawing.current_stroke_width();
    }

    /// A toolbar click: a tool selection or a one-shot action.
    pub fn activate(&mut self, item: ToolbarItem) {
        let commands = self.interaction.activate(item, &self.drawing);
        self.execute(commands);
    }

    fn modal_open(&self) -> bool {
        self.export_dialog.open || self.share_dialog.open
    }

    /// Runs this frame's canvas input through the interaction state machine.
    /// Presses inside `obstructions` (widgets drawn over the canvas) are
    /// left to those widgets.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect, obstructions: &[Rect]) {
        let view = self.drawing.view();
        let events = self.input.process_input(ctx, canvas_rect, obstructions, &view);
        if self.modal_open() {
            self.end_gesture();
        } else {
            self.interaction.process(&events, &mut self.drawing);
        }

        if let Some(request) = self.interaction.take_text_request() {
            self.text_entry = Some(TextEntryDialog::new(request));
        }
        self.poll_text_input();
    }

    /// A modal dialog took over the pointer: a drag that moved is committed,
    /// anything else in progress is dropped.
    fn end_gesture(&mut self) {
        if self.interaction.is_idle() || self.interaction.is_awaiting_text() {
            return;
        }
        self.input.cancel_gesture();
        let commands = self.interaction.select_tool(self.interaction.tool());
        self.execute(commands);
    }

    fn poll_text_input(&mut self) {
        let commands = self.interaction.poll_text_input(&self.drawing);
        self.execute(commands);
    }

    /// Display list of the canvas for the current state.
    pub fn render_frame(&self, viewport: Vec2) -> Frame {
        let preview = self.interaction.preview(self.drawing.current_style());
        renderer::render(&RenderInput {
            elements: self.drawing.elements(),
            selected: self.drawing.selected_elements(),
            hovered: self.interaction.hovered(),
            tool: self.interaction.tool(),
            preview: preview.as_ref(),
            view: self.drawing.view(),
            viewport,
            grid: self.settings.show_grid.then_some(self.settings.grid_spacing),
        })
    }

    pub fn export(&mut self, options: &ExportOptions) {
        let options = &ExportOptions {
            grid_spacing: self.settings.grid_spacing,
            ..*options
        };
        let file_name = export::file_name(&self.settings.title, options.format);
        let result = export::export(self.drawing.elements(), options)
            .and_then(|bytes| crate::download::save_file(&bytes, &file_name, options.format));
        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                log::error!("export failed: {}", err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub(crate) fn mark_saved(&mut self, now: f64) {
        log::info!("saved \"{}\"", self.settings.title);
        self.last_saved = Some(now);
    }

    pub(crate) fn last_saved_label(&self, now: f64) -> String {
        match self.last_saved {
            None => "Not saved".to_owned(),
            Some(saved) => {
                let minutes = ((now - saved) / 60.0).floor() as u64;
                if minutes < 1 {
                    "Saved just now".to_owned()
                } else {
                    format!("Saved {minutes}m ago")
                }
            }
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = &mut self.text_entry {
            if dialog.show(ctx) {
                self.text_entry = None;
                self.poll_text_input();
                ctx.request_repaint();
            }
        }

        if let Some(options) = self.export_dialog.show(ctx) {
            self.export(&options);
        }
        self.share_dialog.show(ctx);

        if let Some(message) = self.last_error.clone() {
            egui::Window::new("Export failed")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.last_error = None;
                    }
                });
        }
    }
}

impl eframe::App for WhiteboardApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::top_bar(self, ctx);
        panels::bottom_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::side_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_dialogs(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{Tool, ToolAction};

    #[test]
    fn starts_from_settings_style() {
        let settings = Settings {
            default_color: egui::Color32::RED,
            default_stroke_width: 6.0,
            ..Default::default()
        };
        let app = WhiteboardApp::with_settings(settings);
        assert_eq!(app.drawing().current_color(), egui::Color32::RED);
        assert_eq!(app.drawing().current_stroke_width(), 6.0);
    }

    #[test]
    fn zoom_actions_keep_the_active_tool() {
        let mut app = WhiteboardApp::default();
        app.activate(Tool::Pencil.into());
        app.activate(ToolAction::ZoomIn.into());

        assert_eq!(app.interaction().tool(), Tool::Pencil);
        assert!((app.drawing().zoom() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn last_saved_label_counts_minutes() {
        let mut app = WhiteboardApp::default();
        assert_eq!(app.last_saved_label(0.0), "Not saved");
        app.mark_saved(10.0);
        assert_eq!(app.last_saved_label(30.0), "Saved just now");
        assert_eq!(app.last_saved_label(190.0), "Saved 3m ago");
    }

    #[test]
    fn frame_includes_grid_only_when_enabled() {
        let mut app = WhiteboardApp::default();
        let plain = app.render_frame(egui::vec2(100.0, 100.0));
        app.settings_mut().show_grid = true;
        let gridded = app.render_frame(egui::vec2(100.0, 100.0));

        assert_eq!(plain.commands.len(), 1);
        assert!(gridded.commands.len() > 1);
    }

    const CANVAS: Rect = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1000.0, 800.0));
    const DELETE_BUTTON: Rect = Rect::from_min_max(egui::pos2(900.0, 16.0), egui::pos2(984.0, 40.0));

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn run_frame(app: &mut WhiteboardApp, ctx: &egui::Context, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.handle_canvas_input(ctx, CANVAS, &[DELETE_BUTTON]));
    }

    #[test]
    fn drag_released_over_an_overlay_button_still_ends() {
        let ctx = egui::Context::default();
        let mut app = WhiteboardApp::default();
        let style = app.drawing.current_style();
        app.drawing.add_element(crate::element::factory::rectangle(
            style,
            egui::pos2(100.0, 100.0),
            egui::pos2(200.0, 200.0),
        ));

        let press_at = egui::pos2(150.0, 150.0);
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(press_at), button(press_at, true)]);
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(egui::pos2(500.0, 300.0))]);
        let release_at = egui::pos2(950.0, 30.0);
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(release_at), button(release_at, false)]);

        assert!(app.interaction().is_idle());
        assert_eq!(app.drawing().history_len(), 3);
        let moved = app.drawing().elements()[0].bounds().unwrap().min;
        assert_eq!(moved, egui::pos2(900.0, -20.0));

        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(egui::pos2(400.0, 600.0))]);
        assert_eq!(app.drawing().elements()[0].bounds().unwrap().min, moved);
    }

    #[test]
    fn presses_on_an_overlay_button_leave_the_selection_alone() {
        let ctx = egui::Context::default();
        let mut app = WhiteboardApp::default();
        let style = app.drawing.current_style();
        let id = app.drawing.add_element(crate::element::factory::rectangle(
            style,
            egui::pos2(100.0, 100.0),
            egui::pos2(200.0, 200.0),
        ));
        app.drawing.select_elements(&[id]);

        let at = egui::pos2(940.0, 28.0);
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(at), button(at, true), button(at, false)]);

        assert!(app.drawing().is_selected(id));
        assert!(app.interaction().is_idle());
    }

    #[test]
    fn opening_a_dialog_abandons_a_shape_in_progress() {
        let ctx = egui::Context::default();
        let mut app = WhiteboardApp::default();
        app.activate(Tool::Rectangle.into());

        let at = egui::pos2(100.0, 100.0);
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(at), button(at, true)]);
        assert!(!app.interaction().is_idle());

        app.export_dialog.open_with(crate::export::ExportFormat::Png);
        run_frame(&mut app, &ctx, vec![button(at, false)]);
        app.export_dialog.open = false;

        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(egui::pos2(300.0, 300.0))]);
        assert!(app.interaction().is_idle());
        assert!(app.interaction().preview(app.drawing().current_style()).is_none());

        let (from, to) = (egui::pos2(300.0, 300.0), egui::pos2(400.0, 350.0));
        run_frame(&mut app, &ctx, vec![button(from, true)]);
        run_frame(&mut app, &ctx, vec![egui::Event::PointerMoved(to), button(to, false)]);

        assert_eq!(app.drawing().elements().len(), 1);
        let bounds = app.drawing().elements()[0].bounds().unwrap();
        assert_eq!(bounds.min, egui::pos2(300.0, 300.0));
    }

    #[test]
    fn style_changes_become_the_saved_defaults() {
        let mut app = WhiteboardApp::default();
        app.set_color(egui::Color32::BLUE);
        app.set_stroke_width(9.0);
        app.set_stroke_width(-1.0);

        assert_eq!(app.settings().default_color, egui::Color32::BLUE);
        assert_eq!(app.settings().default_stroke_width, 9.0);
        assert_eq!(app.drawing().current_stroke_width(), 9.0);
    }
}
