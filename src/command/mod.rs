mod history;

use egui::{Color32, Vec2};

use crate::element::{ElementDraft, ElementId, ElementUpdate};
use crate::state::DrawingState;

pub use history::History;

/// A mutation intent relayed to the [`DrawingState`].
///
/// The interaction state machine and the panels never touch elements
/// directly; they produce commands and the app executes them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddElement(ElementDraft),
    /// Live preview of a gesture; no history entry.
    UpdateElements(Vec<(ElementId, ElementUpdate)>),
    /// Closes a drag gesture with exactly one history entry.
    CommitDrag,
    DeleteElements(Vec<ElementId>),
    SelectElements(Vec<ElementId>),
    SelectAll,
    ClearSelection,
    Undo,
    Redo,
    SetZoom(f32),
    SetPan(Vec2),
    SetColor(Color32),
    SetStrokeWidth(f32),
    ClearCanvas,
}

impl Command {
    pub fn execute(self, state: &mut DrawingState) {
        match self {
            Command::AddElement(draft) => {
                state.add_element(draft);
            }
            Command::UpdateElements(updates) => state.update_elements(&updates),
            Command::CommitDrag => state.commit_drag(),
            Command::DeleteElements(ids) => state.delete_elements(&ids),
            Command::SelectElements(ids) => state.select_elements(&ids),
            Command::SelectAll => state.select_all(),
            Command::ClearSelection => state.clear_selection(),
            Command::Undo => state.undo(),
            Command::Redo => state.redo(),
            Command::SetZoom(zoom) => state.set_zoom(zoom),
            Command::SetPan(pan) => state.set_pan(pan),
            Command::SetColor(color) => state.set_color(color),
            Command::SetStrokeWidth(width) => state.set_stroke_width(width),
            Command::ClearCanvas => state.clear_canvas(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement(_) => "Add Element",
            Command::UpdateElements(_) => "Update Elements",
            Command::CommitDrag => "Move Elements",
            Command::DeleteElements(_) => "Delete Elements",
            Command::SelectElements(_) => "Select",
            Command::SelectAll => "Select All",
            Command::ClearSelection => "Clear Selection",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::SetZoom(_) => "Zoom",
            Command::SetPan(_) => "Pan",
            Command::SetColor(_) => "Set Color",
            Command::SetStrokeWidth(_) => "Set Stroke Width",
            Command::ClearCanvas => "Clear Canvas",
        }
    }
}

impl DrawingState {
    pub fn execute(&mut self, command: Command) {
        log::trace!("executing {}", command.name());
        command.execute(self);
    }

    /// Executes commands in order.
    pub fn execute_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.execute(command);
        }
    }
}
