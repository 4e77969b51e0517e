use egui::Pos2;

use crate::element::{Element, Shape};
use crate::geometry::distance_to_line_segment;

/// Pick tolerance in world units, added to the stroke width for
/// unbounded paths and lines. Independent of zoom.
pub const PICK_TOLERANCE: f32 = 5.0;

/// Whether `pos` (world space) picks `element`.
///
/// Boxed elements use an edge-inclusive point-in-box test. Paths and lines
/// without bounds fall back to segment distance.
pub fn hit_test(element: &Element, pos: Pos2) -> bool {
    if let Some(bounds) = element.bounds() {
        return bounds.contains(pos);
    }

    let reach = element.style().stroke_width + PICK_TOLERANCE;
    match element.shape() {
        Shape::Path { points, .. } => points
            .windows(2)
            .any(|pair| distance_to_line_segment(pos, pair[0], pair[1]) <= reach),
        Shape::Line { endpoints: [start, end], .. } => {
            distance_to_line_segment(pos, *start, *end) <= reach
        }
        // Always carry bounds, handled above.
        Shape::Rectangle { .. }
        | Shape::Circle { .. }
        | Shape::Text { .. }
        | Shape::Sticky { .. } => false,
    }
}

/// Topmost element under `pos`: scans in reverse paint order so the
/// last-drawn element wins.
pub fn element_at(elements: &[Element], pos: Pos2) -> Option<&Element> {
    elements.iter().rev().find(|element| hit_test(element, pos))
}
