//! Screen backend for the render pass.

use egui::{Align2, FontId, Painter, Pos2, Rect, Shape, Stroke};

use super::{DrawCommand, Frame};
use crate::view::ViewTransform;

const DASH_LENGTH: f32 = 5.0;
const GAP_LENGTH: f32 = 5.0;

/// Maps world coordinates of a frame to absolute screen coordinates.
#[derive(Debug, Clone, Copy)]
struct ScreenMapping {
    view: ViewTransform,
    origin: Pos2,
}

impl ScreenMapping {
    fn pos(&self, world: Pos2) -> Pos2 {
        self.origin + self.view.world_to_screen(world).to_vec2()
    }

    fn rect(&self, world: Rect) -> Rect {
        Rect::from_min_max(self.pos(world.min), self.pos(world.max))
    }

    fn len(&self, world: f32) -> f32 {
        world * self.view.zoom()
    }

    fn stroke(&self, stroke: Stroke) -> Stroke {
        Stroke::new(self.len(stroke.width), stroke.color)
    }
}

/// Paints `frame` with its canvas origin at `origin`, clipped to the painter.
pub fn paint(frame: &Frame, painter: &Painter, origin: Pos2) {
    let mapping = ScreenMapping {
        view: frame.view,
        origin,
    };

    for command in &frame.commands {
        match command {
            DrawCommand::Clear(color) => {
                painter.rect_filled(painter.clip_rect(), 0.0, *color);
            }
            DrawCommand::Polyline { points, stroke } => {
                let points = points.iter().map(|point| mapping.pos(*point)).collect();
                painter.add(Shape::line(points, mapping.stroke(*stroke)));
            }
            DrawCommand::Rect {
                rect,
                fill,
                stroke,
                dashed,
            } => {
                let rect = mapping.rect(*rect);
                if let Some(fill) = fill {
                    painter.rect_filled(rect, 0.0, *fill);
                }
                if *dashed {
                    let outline = [
                        rect.left_top(),
                        rect.right_top(),
                        rect.right_bottom(),
                        rect.left_bottom(),
                        rect.left_top(),
                    ];
                    painter.extend(Shape::dashed_line(
                        &outline,
                        mapping.stroke(*stroke),
                        mapping.len(DASH_LENGTH),
                        mapping.len(GAP_LENGTH),
                    ));
                } else {
                    painter.rect_stroke(rect, 0.0, mapping.stroke(*stroke));
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let center = mapping.pos(*center);
                let radius = mapping.len(*radius);
                if let Some(fill) = fill {
                    painter.circle_filled(center, radius, *fill);
                }
                painter.circle_stroke(center, radius, mapping.stroke(*stroke));
            }
            DrawCommand::Segment { from, to, stroke } => {
                painter.line_segment([mapping.pos(*from), mapping.pos(*to)], mapping.stroke(*stroke));
            }
            DrawCommand::Text {
                pos,
                text,
                size,
                color,
            } => {
                painter.text(
                    mapping.pos(*pos),
                    Align2::LEFT_BOTTOM,
                    text,
                    FontId::proportional(mapping.len(*size)),
                    *color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Color32, Vec2};

    #[test]
    fn mapping_applies_zoom_and_pan_then_origin() {
        let mapping = ScreenMapping {
            view: ViewTransform::new(2.0, vec2(5.0, 0.0)),
            origin: pos2(100.0, 10.0),
        };
        assert_eq!(mapping.pos(pos2(0.0, 0.0)), pos2(110.0, 10.0));
        assert_eq!(mapping.len(3.0), 6.0);
    }

    #[test]
    fn paints_every_command_kind() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let stroke = Stroke::new(1.0, Color32::BLACK);
        let frame = Frame {
            view: ViewTransform::default(),
            commands: vec![
                DrawCommand::Clear(Color32::WHITE),
                DrawCommand::Polyline {
                    points: vec![pos2(0.0, 0.0), pos2(5.0, 5.0)],
                    stroke,
                },
                DrawCommand::Rect {
                    rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(10.0)),
                    fill: Some(Color32::RED),
                    stroke,
                    dashed: true,
                },
                DrawCommand::Circle {
                    center: pos2(50.0, 50.0),
                    radius: 5.0,
                    fill: None,
                    stroke,
                },
                DrawCommand::Segment {
                    from: pos2(0.0, 0.0),
                    to: pos2(1.0, 1.0),
                    stroke,
                },
            ],
        };

        paint(&frame, &painter, Pos2::ZERO);
    }
}
