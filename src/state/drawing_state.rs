use std::collections::HashSet;

use egui::{Color32, Pos2, Vec2};

use crate::command::History;
use crate::element::{Element, ElementDraft, ElementId, ElementUpdate, Style};
use crate::geometry;
use crate::view::ViewTransform;

pub const DEFAULT_COLOR: Color32 = Color32::BLACK;
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// The single owner of the drawing: elements, selection, undo log, current
/// style and view transform.
///
/// Every other component reads it and relays mutation intents through these
/// methods (usually via [`crate::command::Command`]). Invalid targets, zoom
/// outside its range and undo/redo past either end are silent no-ops.
#[derive(Debug, Clone)]
pub struct DrawingState {
    elements: Vec<Element>,
    selected: HashSet<ElementId>,
    history: History,
    current_color: Color32,
    current_stroke_width: f32,
    view: ViewTransform,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingState {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected: HashSet::new(),
            history: History::new(),
            current_color: DEFAULT_COLOR,
            current_stroke_width: DEFAULT_STROKE_WIDTH,
            view: ViewTransform::default(),
        }
    }

    /// Starts with the given style instead of the built-in defaults.
    pub fn with_style(color: Color32, stroke_width: f32) -> Self {
        let mut state = Self::new();
        state.set_color(color);
        state.set_stroke_width(stroke_width);
        state
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn selected_elements(&self) -> &HashSet<ElementId> {
        &self.selected
    }

    /// Selected ids in paint order.
    pub fn selected_ids(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .map(Element::id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    pub fn current_color(&self) -> Color32 {
        self.current_color
    }

    pub fn current_stroke_width(&self) -> f32 {
        self.current_stroke_width
    }

    /// Style given to newly created elements.
    pub fn current_style(&self) -> Style {
        Style::new(self.current_color, self.current_stroke_width)
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn zoom(&self) -> f32 {
        self.view.zoom()
    }

    pub fn pan(&self) -> Vec2 {
        self.view.pan()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    /// Assigns a fresh id, appends the element on top and records a snapshot.
    pub fn add_element(&mut self, draft: ElementDraft) -> ElementId {
        let id = crate::id_generator::generate_id();
        log::debug!("adding {} {}", draft.shape.element_type(), id);
        self.elements.push(Element::new(id, draft));
        self.snapshot();
        id
    }

    /// Live edit without a snapshot; pair with [`Self::commit_drag`].
    pub fn update_element(&mut self, id: ElementId, update: &ElementUpdate) {
        if let Some(element) = self.elements.iter_mut().find(|element| element.id() == id) {
            element.apply_update(update);
        }
    }

    /// Batch form of [`Self::update_element`], applied in order.
    pub fn update_elements(&mut self, updates: &[(ElementId, ElementUpdate)]) {
        for (id, update) in updates {
            self.update_element(*id, update);
        }
    }

    /// Records the current elements (after live updates) as one undo step.
    pub fn commit_drag(&mut self) {
        self.snapshot();
    }

    /// Removes every element whose id is listed, clears the selection and
    /// records a snapshot. Nothing happens if no listed id exists.
    pub fn delete_elements(&mut self, ids: &[ElementId]) {
        let before = self.elements.len();
        self.elements.retain(|element| !ids.contains(&element.id()));
        if self.elements.len() == before {
            return;
        }
        log::debug!("deleted {} element(s)", before - self.elements.len());
        self.selected.clear();
        self.snapshot();
    }

    /// Replaces the selection. Unknown ids are dropped.
    pub fn select_elements(&mut self, ids: &[ElementId]) {
        let existing: HashSet<ElementId> = self.elements.iter().map(Element::id).collect();
        self.selected = ids.iter().copied().filter(|id| existing.contains(id)).collect();
    }

    pub fn select_all(&mut self) {
        self.selected = self.elements.iter().map(Element::id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn set_color(&mut self, color: Color32) {
        self.current_color = color;
    }

    /// Non-positive or NaN widths are ignored.
    pub fn set_stroke_width(&mut self, width: f32) {
        if width > 0.0 {
            self.current_stroke_width = width;
        }
    }

    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.elements = snapshot.to_vec();
            self.selected.clear();
            log::debug!("undo -> history index {}", self.history.index());
        }
    }

    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.elements = snapshot.to_vec();
            self.selected.clear();
            log::debug!("redo -> history index {}", self.history.index());
        }
    }

    /// Clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.view.set_zoom(zoom);
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.view.set_pan(pan);
    }

    pub fn clear_canvas(&mut self) {
        self.elements.clear();
        self.selected.clear();
        self.snapshot();
    }

    /// Topmost element under the world-space point.
    pub fn get_element_at(&self, pos: Pos2) -> Option<&Element> {
        geometry::element_at(&self.elements, pos)
    }

    fn snapshot(&mut self) {
        self.history.push(self.elements.clone());
    }
}
