//! The render pass.
//!
//! [`render`] is a pure function of its [`RenderInput`]: it produces a
//! display list of world-space [`DrawCommand`]s which a backend
//! ([`painter::paint`] on screen, SVG in [`crate::export`]) turns into pixels.
//! Equal inputs give equal display lists.

pub mod painter;

use std::collections::HashSet;

use egui::{vec2, Color32, Pos2, Rect, Stroke, Vec2};

use crate::element::{Element, ElementDraft, ElementId, Shape, Style};
use crate::tools::Tool;
use crate::view::ViewTransform;

pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
pub const GRID_COLOR: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
pub const DEFAULT_GRID_SPACING: f32 = 20.0;
pub const SELECTION_COLOR: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const ERASE_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const STICKY_FILL: Color32 = Color32::from_rgb(0xfe, 0xf3, 0xc7);
pub const STICKY_BORDER: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const STICKY_TEXT: Color32 = Color32::from_rgb(0x92, 0x40, 0x0e);
pub const STICKY_FONT_SIZE: f32 = 14.0;
pub const STICKY_LINE_HEIGHT: f32 = 16.0;
/// Font size of a text element per unit of stroke width.
pub const TEXT_SIZE_PER_WIDTH: f32 = 8.0;

const SELECTION_PADDING: f32 = 5.0;
const SELECTION_WIDTH: f32 = 2.0;
const HANDLE_SIZE: f32 = 8.0;
const HOVER_PADDING: f32 = 2.0;

/// One world-space drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fills the whole surface.
    Clear(Color32),
    Polyline {
        points: Vec<Pos2>,
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        fill: Option<Color32>,
        stroke: Stroke,
        dashed: bool,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Option<Color32>,
        stroke: Stroke,
    },
    Segment {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    /// `pos` is the left end of the baseline.
    Text {
        pos: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Everything the render pass reads. Nothing else influences the output.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub elements: &'a [Element],
    pub selected: &'a HashSet<ElementId>,
    pub hovered: Option<ElementId>,
    /// Decides the hover affordance: eraser or select.
    pub tool: Tool,
    pub preview: Option<&'a ElementDraft>,
    pub view: ViewTransform,
    /// Size of the surface in screen pixels.
    pub viewport: Vec2,
    /// Grid spacing in world units, `None` when the grid is hidden.
    pub grid: Option<f32>,
}

/// A display list together with the transform it is meant to be shown with.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub view: ViewTransform,
    pub commands: Vec<DrawCommand>,
}

pub fn render(input: &RenderInput<'_>) -> Frame {
    let mut commands = vec![DrawCommand::Clear(BACKGROUND_COLOR)];

    if let Some(spacing) = input.grid {
        grid_commands(input.view.visible_world_rect(input.viewport), spacing, &mut commands);
    }

    for element in input.elements {
        shape_commands(element.shape(), element.style(), &mut commands);
    }

    if let Some(preview) = input.preview {
        shape_commands(&preview.shape, &preview.style, &mut commands);
    }

    for element in input.elements {
        if input.selected.contains(&element.id()) {
            if let Some(bounds) = element.bounds() {
                selection_commands(bounds, &mut commands);
            }
        }
    }

    let hovered = input
        .hovered
        .and_then(|id| input.elements.iter().find(|element| element.id() == id));
    if let Some(element) = hovered {
        if let Some(bounds) = element.bounds() {
            hover_commands(bounds, element.style().stroke_width, input.tool, &mut commands);
        }
    }

    Frame {
        view: input.view,
        commands,
    }
}

/// Per-kind drawing rules shared by the screen and the exporters.
pub fn shape_commands(shape: &Shape, style: &Style, out: &mut Vec<DrawCommand>) {
    let stroke = Stroke::new(style.stroke_width, style.color);
    match shape {
        Shape::Path { points, .. } => {
            if points.len() >= 2 {
                out.push(DrawCommand::Polyline {
                    points: points.clone(),
                    stroke,
                });
            }
        }
        Shape::Rectangle { bounds, .. } => out.push(DrawCommand::Rect {
            rect: *bounds,
            fill: style.fill,
            stroke,
            dashed: false,
        }),
        Shape::Circle { bounds, .. } => out.push(DrawCommand::Circle {
            center: bounds.center(),
            radius: bounds.width().min(bounds.height()) / 2.0,
            fill: style.fill,
            stroke,
        }),
        Shape::Line { endpoints, .. } => out.push(DrawCommand::Segment {
            from: endpoints[0],
            to: endpoints[1],
            stroke,
        }),
        Shape::Text { text, bounds, .. } => {
            let size = style.stroke_width * TEXT_SIZE_PER_WIDTH;
            out.push(DrawCommand::Text {
                pos: bounds.min + vec2(0.0, size),
                text: text.clone(),
                size,
                color: style.color,
            });
        }
        Shape::Sticky { text, bounds, .. } => {
            out.push(DrawCommand::Rect {
                rect: *bounds,
                fill: Some(STICKY_FILL),
                stroke: Stroke::new(style.stroke_width, STICKY_BORDER),
                dashed: false,
            });
            for (i, line) in text.split('\n').enumerate() {
                out.push(DrawCommand::Text {
                    pos: bounds.min + vec2(8.0, 20.0 + STICKY_LINE_HEIGHT * i as f32),
                    text: line.to_owned(),
                    size: STICKY_FONT_SIZE,
                    color: STICKY_TEXT,
                });
            }
        }
    }
}

/// Grid lines aligned to multiples of `spacing` covering `area`.
pub fn grid_commands(area: Rect, spacing: f32, out: &mut Vec<DrawCommand>) {
    if spacing.is_nan() || spacing <= 0.0 {
        return;
    }
    let stroke = Stroke::new(1.0, GRID_COLOR);

    let mut x = (area.min.x / spacing).floor() * spacing;
    while x <= area.max.x {
        out.push(DrawCommand::Segment {
            from: Pos2::new(x, area.min.y),
            to: Pos2::new(x, area.max.y),
            stroke,
        });
        x += spacing;
    }

    let mut y = (area.min.y / spacing).floor() * spacing;
    while y <= area.max.y {
        out.push(DrawCommand::Segment {
            from: Pos2::new(area.min.x, y),
            to: Pos2::new(area.max.x, y),
            stroke,
        });
        y += spacing;
    }
}

fn selection_commands(bounds: Rect, out: &mut Vec<DrawCommand>) {
    let outline = bounds.expand(SELECTION_PADDING);
    out.push(DrawCommand::Rect {
        rect: outline,
        fill: None,
        stroke: Stroke::new(SELECTION_WIDTH, SELECTION_COLOR),
        dashed: true,
    });
    for corner in [
        outline.left_top(),
        outline.right_top(),
        outline.left_bottom(),
        outline.right_bottom(),
    ] {
        out.push(DrawCommand::Rect {
            rect: Rect::from_center_size(corner, Vec2::splat(HANDLE_SIZE)),
            fill: Some(Color32::WHITE),
            stroke: Stroke::new(1.0, SELECTION_COLOR),
            dashed: false,
        });
    }
}

fn hover_commands(bounds: Rect, stroke_width: f32, tool: Tool, out: &mut Vec<DrawCommand>) {
    let rect = bounds.expand(HOVER_PADDING);
    let command = match tool {
        Tool::Eraser => DrawCommand::Rect {
            rect,
            fill: Some(ERASE_COLOR.gamma_multiply(0.2)),
            stroke: Stroke::new(SELECTION_WIDTH, ERASE_COLOR),
            dashed: false,
        },
        _ => DrawCommand::Rect {
            rect,
            fill: None,
            stroke: Stroke::new(stroke_width + 4.0, SELECTION_COLOR.gamma_multiply(0.35)),
            dashed: false,
        },
    };
    out.push(command);
}
