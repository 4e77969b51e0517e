//! Pure geometry helpers shared by the element model, hit-testing and rendering.

pub mod hit_testing;

pub use hit_testing::{element_at, hit_test, PICK_TOLERANCE};

use egui::{Pos2, Rect, Vec2};

/// Distance from `point` to the segment `start..=end`.
///
/// The point is projected onto the infinite line through the segment, the
/// projection parameter is clamped to `[0, 1]`, and the Euclidean distance to
/// the clamped projection is returned. A zero-length segment degenerates to
/// the distance to `start`.
pub fn distance_to_line_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let segment = end - start;
    let to_point = point - start;

    let len_sq = segment.length_sq();
    if len_sq == 0.0 {
        return to_point.length();
    }

    let t = (to_point.dot(segment) / len_sq).clamp(0.0, 1.0);
    let projection = start + segment * t;
    point.distance(projection)
}

/// Tight axis-aligned box around `points`, or `None` for an empty slice.
pub fn bounding_box(points: &[Pos2]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;

    let mut min = *first;
    let mut max = *first;
    for point in rest {
        min = min.min(*point);
        max = max.max(*point);
    }

    Some(Rect::from_min_max(min, max))
}

/// Bounding box of `points` grown by `padding` on every side.
pub fn padded_bounds(points: &[Pos2], padding: f32) -> Option<Rect> {
    bounding_box(points).map(|rect| rect.expand(padding))
}

/// Normalized box spanned by two corner points, whatever the drag direction.
pub fn normalized_rect(a: Pos2, b: Pos2) -> Rect {
    Rect::from_two_pos(a, b)
}

/// Square enclosing the circle centred on `center` that passes through `edge`.
pub fn circle_bounds(center: Pos2, edge: Pos2) -> Rect {
    let radius = center.distance(edge);
    Rect::from_center_size(center, Vec2::splat(radius * 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn distance_is_perpendicular_inside_segment() {
        let d = distance_to_line_segment(pos2(5.0, 3.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let before = distance_to_line_segment(pos2(-3.0, 4.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((before - 5.0).abs() < 1e-6);

        let after = distance_to_line_segment(pos2(13.0, 4.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((after - 5.0).abs() < 1e-6);
    }

    #[test]
    fn zero_length_segment_measures_to_start() {
        let d = distance_to_line_segment(pos2(3.0, 4.0), pos2(0.0, 0.0), pos2(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn bounding_box_of_empty_slice_is_none() {
        assert_eq!(bounding_box(&[]), None);
    }

    #[test]
    fn padded_bounds_grow_on_all_sides() {
        let rect = padded_bounds(&[pos2(10.0, 20.0), pos2(30.0, 5.0)], 5.0).unwrap();
        assert_eq!(rect.min, pos2(5.0, 0.0));
        assert_eq!(rect.max, pos2(35.0, 25.0));
    }

    #[test]
    fn normalized_rect_ignores_drag_direction() {
        let forward = normalized_rect(pos2(10.0, 10.0), pos2(50.0, 40.0));
        let backward = normalized_rect(pos2(50.0, 40.0), pos2(10.0, 10.0));
        assert_eq!(forward, backward);
        assert_eq!(forward.width(), 40.0);
        assert_eq!(forward.height(), 30.0);
    }
}
