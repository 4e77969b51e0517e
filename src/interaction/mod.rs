//! Pointer and keyboard gestures turned into [`Command`]s.
//!
//! The machine only reads the [`DrawingState`]; every mutation leaves as a
//! command. Callers must execute the commands of one event before handing
//! it the next, which [`Interaction::process`] does for them.

mod shortcuts;

use egui::{Pos2, Vec2};
use futures::channel::oneshot;

use crate::command::Command;
use crate::element::{factory, ElementDraft, ElementId, ElementUpdate, Style, DEFAULT_NOTE, DEFAULT_TEXT};
use crate::input::{InputEvent, InputLocation};
use crate::state::DrawingState;
use crate::tools::{Tool, ToolAction, ToolbarItem};
use crate::view::ZOOM_STEP;

pub use shortcuts::{shortcut_for, Shortcut};

/// Element kinds that ask the user for their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Text,
    Sticky,
}

impl TextKind {
    pub fn prompt(&self) -> &'static str {
        match self {
            TextKind::Text => "Enter text:",
            TextKind::Sticky => "Enter note text:",
        }
    }

    pub fn default_text(&self) -> &'static str {
        match self {
            TextKind::Text => DEFAULT_TEXT,
            TextKind::Sticky => DEFAULT_NOTE,
        }
    }

    fn draft(&self, style: Style, anchor: Pos2, text: &str) -> ElementDraft {
        match self {
            TextKind::Text => factory::text(style, anchor, text),
            TextKind::Sticky => factory::sticky(style, anchor, text),
        }
    }
}

/// Handed to the text-entry collaborator; answering it unblocks the machine.
#[derive(Debug)]
pub struct TextRequest {
    pub kind: TextKind,
    pub anchor: Pos2,
    sender: oneshot::Sender<Option<String>>,
}

impl TextRequest {
    /// `None` cancels; the element is then created with the default text.
    pub fn respond(self, text: Option<String>) {
        if self.sender.send(text).is_err() {
            log::debug!("text prompt answered after it was abandoned");
        }
    }
}

pub enum InteractionState {
    Idle,
    Drawing {
        tool: Tool,
        start: Pos2,
        current: Pos2,
        path: Vec<Pos2>,
    },
    Dragging {
        ids: Vec<ElementId>,
        start: Pos2,
        offset: Vec2,
    },
    Panning {
        last_screen: Pos2,
    },
    AwaitingTextInput {
        kind: TextKind,
        anchor: Pos2,
        receiver: oneshot::Receiver<Option<String>>,
    },
}

impl std::fmt::Debug for InteractionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Drawing { tool, start, path, .. } => f
                .debug_struct("Drawing")
                .field("tool", tool)
                .field("start", start)
                .field("points", &path.len())
                .finish_non_exhaustive(),
            Self::Dragging { ids, offset, .. } => f
                .debug_struct("Dragging")
                .field("elements", &ids.len())
                .field("offset", offset)
                .finish_non_exhaustive(),
            Self::Panning { .. } => write!(f, "Panning"),
            Self::AwaitingTextInput { kind, anchor, .. } => f
                .debug_struct("AwaitingTextInput")
                .field("kind", kind)
                .field("anchor", anchor)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug)]
pub struct Interaction {
    tool: Tool,
    state: InteractionState,
    hovered: Option<ElementId>,
    pending_request: Option<TextRequest>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            tool: Tool::default(),
            state: InteractionState::Idle,
            hovered: None,
            pending_request: None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Element under the pointer, tracked for the select and eraser tools.
    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, InteractionState::Idle)
    }

    pub fn is_awaiting_text(&self) -> bool {
        matches!(self.state, InteractionState::AwaitingTextInput { .. })
    }

    /// Makes `tool` active. A gesture in progress is abandoned; a drag that
    /// already moved something is committed first. Ignored while waiting for
    /// text.
    pub fn select_tool(&mut self, tool: Tool) -> Vec<Command> {
        if self.is_awaiting_text() {
            return Vec::new();
        }
        let mut commands = Vec::new();
        if let InteractionState::Dragging { offset, .. } = &self.state {
            if *offset != Vec2::ZERO {
                commands.push(Command::CommitDrag);
            }
        }
        if tool != self.tool {
            log::debug!("tool {} -> {}", self.tool.name(), tool.name());
        }
        self.tool = tool;
        self.state = InteractionState::Idle;
        self.hovered = None;
        commands
    }

    /// One-shot toolbar actions. The active tool is left unchanged.
    pub fn apply_action(&self, action: ToolAction, drawing: &DrawingState) -> Vec<Command> {
        if self.is_awaiting_text() {
            return Vec::new();
        }
        let command = match action {
            ToolAction::Undo => Command::Undo,
            ToolAction::Redo => Command::Redo,
            ToolAction::ZoomIn => Command::SetZoom(drawing.zoom() * ZOOM_STEP),
            ToolAction::ZoomOut => Command::SetZoom(drawing.zoom() / ZOOM_STEP),
        };
        vec![command]
    }

    /// Dispatches a toolbar click.
    pub fn activate(&mut self, item: ToolbarItem, drawing: &DrawingState) -> Vec<Command> {
        match item {
            ToolbarItem::Tool(tool) => self.select_tool(tool),
            ToolbarItem::Action(action) => self.apply_action(action, drawing),
        }
    }

    /// Feeds events one at a time, executing each event's commands before
    /// the next event is handled.
    pub fn process(&mut self, events: &[InputEvent], drawing: &mut DrawingState) {
        for event in events {
            let commands = self.handle_event(event, drawing);
            drawing.execute_all(commands);
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent, drawing: &DrawingState) -> Vec<Command> {
        if let InteractionState::AwaitingTextInput { .. } = self.state {
            return self.handle_event_awaiting_text(event, drawing);
        }

        match event {
            InputEvent::PointerDown { location } => self.pointer_down(*location, drawing),
            InputEvent::PointerMove { location } => self.pointer_move(*location, drawing),
            InputEvent::PointerUp { location } => self.pointer_up(*location, drawing),
            InputEvent::PointerLeave { location } => {
                self.hovered = None;
                self.pointer_up(*location, drawing)
            }
            InputEvent::KeyDown { key, modifiers } => match shortcut_for(*key, *modifiers) {
                Some(shortcut) if self.is_idle() => self.apply_shortcut(shortcut, drawing),
                _ => Vec::new(),
            },
        }
    }

    fn handle_event_awaiting_text(&mut self, event: &InputEvent, drawing: &DrawingState) -> Vec<Command> {
        match event {
            InputEvent::KeyDown { key, modifiers }
                if shortcut_for(*key, *modifiers) == Some(Shortcut::Cancel) =>
            {
                self.pending_request = None;
                self.finish_text(None, drawing)
            }
            _ => Vec::new(),
        }
    }

    fn apply_shortcut(&mut self, shortcut: Shortcut, drawing: &DrawingState) -> Vec<Command> {
        match shortcut {
            Shortcut::Undo => vec![Command::Undo],
            Shortcut::Redo => vec![Command::Redo],
            Shortcut::SelectAll => vec![Command::SelectAll],
            Shortcut::DeleteSelection => {
                let selected = drawing.selected_ids();
                if selected.is_empty() {
                    Vec::new()
                } else {
                    self.hovered = None;
                    vec![Command::DeleteElements(selected)]
                }
            }
            Shortcut::Cancel => Vec::new(),
        }
    }

    fn pointer_down(&mut self, location: InputLocation, drawing: &DrawingState) -> Vec<Command> {
        if !self.is_idle() {
            return Vec::new();
        }
        let world = location.world;

        if self.tool.is_drawing_tool() {
            self.state = InteractionState::Drawing {
                tool: self.tool,
                start: world,
                current: world,
                path: vec![world],
            };
            return vec![Command::ClearSelection];
        }

        match self.tool {
            Tool::Select => match drawing.get_element_at(world) {
                Some(element) => {
                    let id = element.id();
                    let mut commands = Vec::new();
                    let ids = if drawing.is_selected(id) {
                        drawing.selected_ids()
                    } else {
                        commands.push(Command::SelectElements(vec![id]));
                        vec![id]
                    };
                    log::debug!("dragging {} element(s)", ids.len());
                    self.state = InteractionState::Dragging {
                        ids,
                        start: world,
                        offset: Vec2::ZERO,
                    };
                    commands
                }
                None => vec![Command::ClearSelection],
            },
            Tool::Eraser => match drawing.get_element_at(world) {
                Some(element) => {
                    self.hovered = None;
                    vec![Command::DeleteElements(vec![element.id()])]
                }
                None => Vec::new(),
            },
            Tool::Hand => {
                self.state = InteractionState::Panning {
                    last_screen: location.screen,
                };
                Vec::new()
            }
            Tool::Pencil | Tool::Rectangle | Tool::Circle | Tool::Line | Tool::Sticky | Tool::Text => {
                Vec::new()
            }
        }
    }

    fn pointer_move(&mut self, location: InputLocation, drawing: &DrawingState) -> Vec<Command> {
        let world = location.world;

        match &mut self.state {
            InteractionState::Idle => {
                self.hovered = match self.tool {
                    Tool::Select | Tool::Eraser => drawing.get_element_at(world).map(|element| element.id()),
                    _ => None,
                };
                Vec::new()
            }
            InteractionState::Drawing {
                tool, current, path, ..
            } => {
                *current = world;
                if *tool == Tool::Pencil {
                    path.push(world);
                }
                Vec::new()
            }
            InteractionState::Dragging { ids, start, offset } => {
                let delta = (world - *start) - *offset;
                if delta == Vec2::ZERO {
                    return Vec::new();
                }
                *offset += delta;
                let updates: Vec<(ElementId, ElementUpdate)> = ids
                    .iter()
                    .filter_map(|id| drawing.element(*id))
                    .map(|element| (element.id(), ElementUpdate::translation(element, delta)))
                    .collect();
                vec![Command::UpdateElements(updates)]
            }
            InteractionState::Panning { last_screen } => {
                let delta = (location.screen - *last_screen) / drawing.zoom();
                *last_screen = location.screen;
                if delta == Vec2::ZERO {
                    return Vec::new();
                }
                vec![Command::SetPan(drawing.pan() + delta)]
            }
            InteractionState::AwaitingTextInput { .. } => Vec::new(),
        }
    }

    fn pointer_up(&mut self, location: InputLocation, drawing: &DrawingState) -> Vec<Command> {
        match self.state {
            InteractionState::Idle | InteractionState::AwaitingTextInput { .. } => Vec::new(),
            InteractionState::Panning { .. } => {
                let commands = self.pointer_move(location, drawing);
                self.state = InteractionState::Idle;
                commands
            }
            InteractionState::Dragging { .. } => {
                let mut commands = self.pointer_move(location, drawing);
                if let InteractionState::Dragging { offset, .. } =
                    std::mem::replace(&mut self.state, InteractionState::Idle)
                {
                    if offset != Vec2::ZERO {
                        log::debug!("drag committed with offset {:?}", offset);
                        commands.push(Command::CommitDrag);
                    }
                }
                commands
            }
            InteractionState::Drawing { .. } => {
                let InteractionState::Drawing {
                    tool, start, mut path, ..
                } = std::mem::replace(&mut self.state, InteractionState::Idle)
                else {
                    return Vec::new();
                };
                if tool.needs_text() {
                    let kind = if tool == Tool::Sticky {
                        TextKind::Sticky
                    } else {
                        TextKind::Text
                    };
                    return self.request_text(kind, start);
                }
                let end = location.world;
                let style = drawing.current_style();
                let draft = match tool {
                    Tool::Pencil => {
                        if path.last() != Some(&end) {
                            path.push(end);
                        }
                        factory::path(style, path)
                    }
                    Tool::Rectangle => factory::rectangle(style, start, end),
                    Tool::Circle => factory::circle(style, start, end),
                    Tool::Line => factory::line(style, start, end),
                    Tool::Text | Tool::Sticky | Tool::Select | Tool::Eraser | Tool::Hand => {
                        return Vec::new();
                    }
                };
                vec![Command::AddElement(draft)]
            }
        }
    }

    fn request_text(&mut self, kind: TextKind, anchor: Pos2) -> Vec<Command> {
        let (sender, receiver) = oneshot::channel();
        log::debug!("awaiting text for {:?} at {:?}", kind, anchor);
        self.pending_request = Some(TextRequest {
            kind,
            anchor,
            sender,
        });
        self.state = InteractionState::AwaitingTextInput {
            kind,
            anchor,
            receiver,
        };
        Vec::new()
    }

    /// The prompt raised by the last text/sticky gesture, for the text-entry
    /// collaborator to show. Returns it once.
    pub fn take_text_request(&mut self) -> Option<TextRequest> {
        self.pending_request.take()
    }

    /// Finalizes a text/sticky element once its prompt was answered (or its
    /// request dropped). Returns nothing while still waiting.
    pub fn poll_text_input(&mut self, drawing: &DrawingState) -> Vec<Command> {
        let InteractionState::AwaitingTextInput { receiver, .. } = &mut self.state else {
            return Vec::new();
        };
        match receiver.try_recv() {
            Ok(None) => Vec::new(),
            Ok(Some(answer)) => self.finish_text(answer, drawing),
            Err(oneshot::Canceled) => self.finish_text(None, drawing),
        }
    }

    fn finish_text(&mut self, answer: Option<String>, drawing: &DrawingState) -> Vec<Command> {
        let InteractionState::AwaitingTextInput { kind, anchor, .. } =
            std::mem::replace(&mut self.state, InteractionState::Idle)
        else {
            return Vec::new();
        };
        let text = answer
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| kind.default_text().to_owned());
        vec![Command::AddElement(kind.draft(drawing.current_style(), anchor, &text))]
    }

    /// The element the current gesture would create, drawn as a live preview.
    pub fn preview(&self, style: Style) -> Option<ElementDraft> {
        let InteractionState::Drawing {
            tool,
            start,
            current,
            path,
        } = &self.state
        else {
            return None;
        };
        match tool {
            Tool::Pencil => Some(factory::path(style, path.clone())),
            Tool::Rectangle => Some(factory::rectangle(style, *start, *current)),
            Tool::Circle => Some(factory::circle(style, *start, *current)),
            Tool::Line => Some(factory::line(style, *start, *current)),
            Tool::Text | Tool::Sticky | Tool::Select | Tool::Eraser | Tool::Hand => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewTransform;
    use egui::{pos2, vec2, Key, Modifiers};

    fn at(x: f32, y: f32) -> InputLocation {
        InputLocation::new(pos2(x, y), &ViewTransform::default())
    }

    fn gesture(interaction: &mut Interaction, drawing: &mut DrawingState, points: &[Pos2]) {
        let mut events = Vec::new();
        for (i, point) in points.iter().enumerate() {
            let location = at(point.x, point.y);
            events.push(match i {
                0 => InputEvent::PointerDown { location },
                i if i + 1 == points.len() => InputEvent::PointerUp { location },
                _ => InputEvent::PointerMove { location },
            });
        }
        interaction.process(&events, drawing);
    }

    #[test]
    fn rectangle_preview_follows_the_pointer() {
        let mut interaction = Interaction::new();
        let drawing = DrawingState::new();
        interaction.select_tool(Tool::Rectangle);

        interaction.handle_event(&InputEvent::PointerDown { location: at(10.0, 10.0) }, &drawing);
        interaction.handle_event(&InputEvent::PointerMove { location: at(30.0, 20.0) }, &drawing);
        interaction.handle_event(&InputEvent::PointerMove { location: at(50.0, 40.0) }, &drawing);

        let preview = interaction.preview(Style::default()).unwrap();
        assert_eq!(preview.shape.bounds().unwrap().size(), vec2(40.0, 30.0));
    }

    #[test]
    fn pencil_accumulates_every_move() {
        let mut interaction = Interaction::new();
        let mut drawing = DrawingState::new();
        interaction.select_tool(Tool::Pencil);

        gesture(
            &mut interaction,
            &mut drawing,
            &[pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 1.0), pos2(3.0, 3.0)],
        );

        assert_eq!(drawing.elements().len(), 1);
        assert_eq!(drawing.elements()[0].points().len(), 4);
        assert!(interaction.is_idle());
    }

    #[test]
    fn select_on_empty_space_clears_selection() {
        let mut interaction = Interaction::new();
        let mut drawing = DrawingState::new();
        let id = drawing.add_element(factory::rectangle(Style::default(), pos2(0.0, 0.0), pos2(10.0, 10.0)));
        drawing.select_all();

        gesture(&mut interaction, &mut drawing, &[pos2(100.0, 100.0), pos2(100.0, 100.0)]);

        assert!(!drawing.is_selected(id));
        assert!(interaction.is_idle());
    }

    #[test]
    fn click_without_movement_records_nothing() {
        let mut interaction = Interaction::new();
        let mut drawing = DrawingState::new();
        drawing.add_element(factory::rectangle(Style::default(), pos2(0.0, 0.0), pos2(10.0, 10.0)));
        let entries = drawing.history_len();

        gesture(&mut interaction, &mut drawing, &[pos2(5.0, 5.0), pos2(5.0, 5.0)]);

        assert_eq!(drawing.history_len(), entries);
        assert_eq!(drawing.selected_ids().len(), 1);
    }

    #[test]
    fn hover_is_tracked_for_select_and_eraser_only() {
        let mut interaction = Interaction::new();
        let mut drawing = DrawingState::new();
        let id = drawing.add_element(factory::rectangle(Style::default(), pos2(0.0, 0.0), pos2(10.0, 10.0)));
        let over = InputEvent::PointerMove { location: at(5.0, 5.0) };

        interaction.handle_event(&over, &drawing);
        assert_eq!(interaction.hovered(), Some(id));

        interaction.select_tool(Tool::Pencil);
        interaction.handle_event(&over, &drawing);
        assert_eq!(interaction.hovered(), None);

        interaction.select_tool(Tool::Eraser);
        interaction.handle_event(&over, &drawing);
        assert_eq!(interaction.hovered(), Some(id));
    }

    #[test]
    fn hand_tool_pans_by_screen_delta_over_zoom() {
        let mut interaction = Interaction::new();
        let mut drawing = DrawingState::new();
        drawing.set_zoom(2.0);
        interaction.select_tool(Tool::Hand);

        gesture(&mut interaction, &mut drawing, &[pos2(0.0, 0.0), pos2(20.0, 10.0), pos2(40.0, 10.0)]);

        assert_eq!(drawing.pan(), vec2(20.0, 5.0));
        assert_eq!(drawing.history_len(), 1);
    }

    #[test]
    fn escape_cancels_a_text_prompt_with_default_text() {
        let mut interaction = Interaction::new();
        let mut drawing = DrawingState::new();
        interaction.select_tool(Tool::Text);

        gesture(&mut interaction, &mut drawing, &[pos2(5.0, 5.0), pos2(5.0, 5.0)]);
        assert!(interaction.is_awaiting_text());
        assert!(interaction.take_text_request().is_some());

        let escape = InputEvent::KeyDown {
            key: Key::Escape,
            modifiers: Modifiers::NONE,
        };
        interaction.process(&[escape], &mut drawing);

        assert!(interaction.is_idle());
        assert_eq!(drawing.elements()[0].text(), Some(DEFAULT_TEXT));
    }

    #[test]
    fn shortcuts_wait_for_the_gesture_to_end() {
        let mut interaction = Interaction::new();
        let drawing = DrawingState::new();
        interaction.select_tool(Tool::Line);
        interaction.handle_event(&InputEvent::PointerDown { location: at(0.0, 0.0) }, &drawing);

        let undo = InputEvent::KeyDown {
            key: Key::Z,
            modifiers: Modifiers::COMMAND,
        };
        assert!(interaction.handle_event(&undo, &drawing).is_empty());
    }
}
