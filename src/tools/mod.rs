use serde::{Deserialize, Serialize};

/// The active tool of the canvas. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Select,
    Pencil,
    Rectangle,
    Circle,
    Line,
    Sticky,
    Text,
    Eraser,
    Hand,
}

impl Tool {
    pub const ALL: [Tool; 9] = [
        Tool::Select,
        Tool::Pencil,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
        Tool::Sticky,
        Tool::Text,
        Tool::Eraser,
        Tool::Hand,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Pencil => "pencil",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Sticky => "sticky",
            Tool::Text => "text",
            Tool::Eraser => "eraser",
            Tool::Hand => "hand",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pencil => "Pencil",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Line => "Line",
            Tool::Sticky => "Sticky Note",
            Tool::Text => "Text",
            Tool::Eraser => "Eraser",
            Tool::Hand => "Pan",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Select => "⬉",
            Tool::Pencil => "✏",
            Tool::Rectangle => "⬜",
            Tool::Circle => "⭕",
            Tool::Line => "➖",
            Tool::Sticky => "🗒",
            Tool::Text => "T",
            Tool::Eraser => "⌫",
            Tool::Hand => "✋",
        }
    }

    /// Short usage hint shown over the canvas. The select tool has none.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Tool::Select => None,
            Tool::Pencil => Some("Pencil Tool - Click and drag to draw"),
            Tool::Rectangle => Some("Rectangle Tool - Click and drag to create rectangle"),
            Tool::Circle => Some("Circle Tool - Click and drag to create circle"),
            Tool::Line => Some("Line Tool - Click and drag to create line"),
            Tool::Sticky => Some("Sticky Note Tool - Click to add sticky note"),
            Tool::Text => Some("Text Tool - Click to add text"),
            Tool::Eraser => Some("Eraser Tool - Click elements to delete"),
            Tool::Hand => Some("Pan Tool - Click and drag to move the canvas"),
        }
    }

    /// Tools whose pointer-down starts a new element.
    pub fn is_drawing_tool(&self) -> bool {
        matches!(
            self,
            Tool::Pencil | Tool::Rectangle | Tool::Circle | Tool::Line | Tool::Sticky | Tool::Text
        )
    }

    /// Tools whose element is finalized only after text entry.
    pub fn needs_text(&self) -> bool {
        matches!(self, Tool::Sticky | Tool::Text)
    }

    pub fn cursor(&self) -> egui::CursorIcon {
        match self {
            Tool::Select => egui::CursorIcon::Default,
            Tool::Hand => egui::CursorIcon::Grab,
            Tool::Eraser => egui::CursorIcon::NotAllowed,
            Tool::Text => egui::CursorIcon::Text,
            Tool::Pencil | Tool::Rectangle | Tool::Circle | Tool::Line | Tool::Sticky => {
                egui::CursorIcon::Crosshair
            }
        }
    }
}

/// Toolbar buttons that act once instead of becoming the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
}

impl ToolAction {
    pub const ALL: [ToolAction; 4] = [
        ToolAction::Undo,
        ToolAction::Redo,
        ToolAction::ZoomIn,
        ToolAction::ZoomOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolAction::Undo => "Undo",
            ToolAction::Redo => "Redo",
            ToolAction::ZoomIn => "Zoom In",
            ToolAction::ZoomOut => "Zoom Out",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolAction::Undo => "⟲",
            ToolAction::Redo => "⟳",
            ToolAction::ZoomIn => "🔍",
            ToolAction::ZoomOut => "🔎",
        }
    }
}

/// Anything the toolbar can emit when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Tool(Tool),
    Action(ToolAction),
}

impl From<Tool> for ToolbarItem {
    fn from(tool: Tool) -> Self {
        ToolbarItem::Tool(tool)
    }
}

impl From<ToolAction> for ToolbarItem {
    fn from(action: ToolAction) -> Self {
        ToolbarItem::Action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_shape_tools_draw() {
        let drawing: Vec<Tool> = Tool::ALL.into_iter().filter(Tool::is_drawing_tool).collect();
        assert_eq!(drawing.len(), 6);
        assert!(!Tool::Select.is_drawing_tool());
        assert!(!Tool::Eraser.is_drawing_tool());
        assert!(!Tool::Hand.is_drawing_tool());
    }

    #[test]
    fn select_has_no_hint() {
        assert!(Tool::Select.hint().is_none());
        assert!(Tool::ALL.iter().skip(1).all(|tool| tool.hint().is_some()));
    }
}
