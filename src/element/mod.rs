//! The element model: one drawable object with its style and geometry.

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

pub mod factory;
mod style;

pub use crate::id_generator::ElementId;
pub use style::{to_hex, Style};

/// Padding added around the points of a committed path or line.
pub const SHAPE_PADDING: f32 = 5.0;
/// Default size of a sticky note, independent of zoom.
pub const STICKY_SIZE: Vec2 = Vec2::new(150.0, 100.0);
/// Width reserved per character of a text element.
pub const TEXT_CHAR_WIDTH: f32 = 10.0;
pub const TEXT_HEIGHT: f32 = 20.0;

pub const DEFAULT_TEXT: &str = "New text";
pub const DEFAULT_NOTE: &str = "New note";

/// Kind-specific geometry.
///
/// Rectangles and circles keep the two drag points that produced them; the
/// bounds are stored alongside and never re-derived from those points.
/// Paths and lines carry bounds once committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Path { points: Vec<Pos2>, bounds: Option<Rect> },
    Rectangle { corners: [Pos2; 2], bounds: Rect },
    Circle { corners: [Pos2; 2], bounds: Rect },
    Line { endpoints: [Pos2; 2], bounds: Option<Rect> },
    Text { anchor: Pos2, text: String, bounds: Rect },
    Sticky { anchor: Pos2, text: String, bounds: Rect },
}

impl Shape {
    pub fn element_type(&self) -> &'static str {
        match self {
            Shape::Path { .. } => "path",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
            Shape::Line { .. } => "line",
            Shape::Text { .. } => "text",
            Shape::Sticky { .. } => "sticky",
        }
    }

    pub fn points(&self) -> &[Pos2] {
        match self {
            Shape::Path { points, .. } => points,
            Shape::Rectangle { corners, .. } | Shape::Circle { corners, .. } => corners,
            Shape::Line { endpoints, .. } => endpoints,
            Shape::Text { anchor, .. } | Shape::Sticky { anchor, .. } => std::slice::from_ref(anchor),
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Shape::Path { bounds, .. } | Shape::Line { bounds, .. } => *bounds,
            Shape::Rectangle { bounds, .. }
            | Shape::Circle { bounds, .. }
            | Shape::Text { bounds, .. }
            | Shape::Sticky { bounds, .. } => Some(*bounds),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Shape::Text { text, .. } | Shape::Sticky { text, .. } => Some(text.as_str()),
            Shape::Path { .. } | Shape::Rectangle { .. } | Shape::Circle { .. } | Shape::Line { .. } => {
                None
            }
        }
    }

    /// Moves points and bounds together so neither needs re-deriving.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Path { points, bounds } => {
                for point in points.iter_mut() {
                    *point += delta;
                }
                if let Some(bounds) = bounds {
                    *bounds = bounds.translate(delta);
                }
            }
            Shape::Rectangle { corners, bounds } | Shape::Circle { corners, bounds } => {
                for corner in corners.iter_mut() {
                    *corner += delta;
                }
                *bounds = bounds.translate(delta);
            }
            Shape::Line { endpoints, bounds } => {
                for endpoint in endpoints.iter_mut() {
                    *endpoint += delta;
                }
                if let Some(bounds) = bounds {
                    *bounds = bounds.translate(delta);
                }
            }
            Shape::Text { anchor, bounds, .. } | Shape::Sticky { anchor, bounds, .. } => {
                *anchor += delta;
                *bounds = bounds.translate(delta);
            }
        }
    }

    fn set_points(&mut self, new_points: &[Pos2]) -> bool {
        match self {
            Shape::Path { points, .. } => {
                *points = new_points.to_vec();
                true
            }
            Shape::Rectangle { corners: pair, .. }
            | Shape::Circle { corners: pair, .. }
            | Shape::Line { endpoints: pair, .. } => match new_points {
                [a, b] => {
                    *pair = [*a, *b];
                    true
                }
                _ => false,
            },
            Shape::Text { anchor, .. } | Shape::Sticky { anchor, .. } => match new_points {
                [point] => {
                    *anchor = *point;
                    true
                }
                _ => false,
            },
        }
    }

    fn set_bounds(&mut self, new_bounds: Rect) {
        match self {
            Shape::Path { bounds, .. } | Shape::Line { bounds, .. } => *bounds = Some(new_bounds),
            Shape::Rectangle { bounds, .. }
            | Shape::Circle { bounds, .. }
            | Shape::Text { bounds, .. }
            | Shape::Sticky { bounds, .. } => *bounds = new_bounds,
        }
    }

    fn set_text(&mut self, new_text: &str) -> bool {
        match self {
            Shape::Text { text, .. } | Shape::Sticky { text, .. } => {
                *text = new_text.to_owned();
                true
            }
            Shape::Path { .. } | Shape::Rectangle { .. } | Shape::Circle { .. } | Shape::Line { .. } => {
                false
            }
        }
    }
}

/// An element that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementDraft {
    pub style: Style,
    pub shape: Shape,
}

/// A drawable object. Paint order is the order of the owning list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    style: Style,
    shape: Shape,
}

impl Element {
    pub fn new(id: ElementId, draft: ElementDraft) -> Self {
        Self {
            id,
            style: draft.style,
            shape: draft.shape,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn element_type(&self) -> &'static str {
        self.shape.element_type()
    }

    pub fn points(&self) -> &[Pos2] {
        self.shape.points()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.shape.bounds()
    }

    pub fn text(&self) -> Option<&str> {
        self.shape.text()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.shape.translate(delta);
    }

    /// Merges the fields present in `update`. Fields that do not apply to
    /// this kind (text on a rectangle, three points on a line) are skipped.
    pub fn apply_update(&mut self, update: &ElementUpdate) {
        if let Some(points) = &update.points {
            if !self.shape.set_points(points) {
                log::debug!(
                    "ignoring {} point(s) for {} {}",
                    points.len(),
                    self.element_type(),
                    self.id
                );
            }
        }
        if let Some(bounds) = update.bounds {
            self.shape.set_bounds(bounds);
        }
        if let Some(style) = update.style {
            self.style = style;
        }
        if let Some(text) = &update.text {
            if !self.shape.set_text(text) {
                log::debug!("ignoring text for {} {}", self.element_type(), self.id);
            }
        }
    }
}

/// Partial update of an element. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementUpdate {
    pub points: Option<Vec<Pos2>>,
    pub bounds: Option<Rect>,
    pub style: Option<Style>,
    pub text: Option<String>,
}

impl ElementUpdate {
    /// Update that moves `element` rigidly by `delta`. Bounds are only
    /// included when the element has them.
    pub fn translation(element: &Element, delta: Vec2) -> Self {
        Self {
            points: Some(element.points().iter().map(|point| *point + delta).collect()),
            bounds: element.bounds().map(|bounds| bounds.translate(delta)),
            ..Default::default()
        }
    }
}
