//! Construction rules turning gesture points into element drafts.
//!
//! The interaction state machine uses these on pointer-up and the render pass
//! uses them for the in-progress preview, so a preview always matches the
//! element it commits to.

use egui::{vec2, Pos2, Rect};

use super::{ElementDraft, Shape, Style, SHAPE_PADDING, STICKY_SIZE, TEXT_CHAR_WIDTH, TEXT_HEIGHT};
use crate::geometry;

/// Free-form polyline; bounds are the padded box of all points.
pub fn path(style: Style, points: Vec<Pos2>) -> ElementDraft {
    let bounds = geometry::padded_bounds(&points, SHAPE_PADDING);
    ElementDraft {
        style,
        shape: Shape::Path { points, bounds },
    }
}

/// Box normalized from two corner points regardless of drag direction.
pub fn rectangle(style: Style, start: Pos2, end: Pos2) -> ElementDraft {
    ElementDraft {
        style,
        shape: Shape::Rectangle {
            corners: [start, end],
            bounds: geometry::normalized_rect(start, end),
        },
    }
}

/// Circle centred on `center` with radius `|edge - center|`; bounds are the
/// enclosing square.
pub fn circle(style: Style, center: Pos2, edge: Pos2) -> ElementDraft {
    ElementDraft {
        style,
        shape: Shape::Circle {
            corners: [center, edge],
            bounds: geometry::circle_bounds(center, edge),
        },
    }
}

pub fn line(style: Style, start: Pos2, end: Pos2) -> ElementDraft {
    ElementDraft {
        style,
        shape: Shape::Line {
            endpoints: [start, end],
            bounds: geometry::padded_bounds(&[start, end], SHAPE_PADDING),
        },
    }
}

/// Text anchored at `anchor`, sized from its character count.
pub fn text(style: Style, anchor: Pos2, text: &str) -> ElementDraft {
    let width = TEXT_CHAR_WIDTH * text.chars().count() as f32;
    ElementDraft {
        style,
        shape: Shape::Text {
            anchor,
            text: text.to_owned(),
            bounds: Rect::from_min_size(anchor, vec2(width, TEXT_HEIGHT)),
        },
    }
}

pub fn sticky(style: Style, anchor: Pos2, text: &str) -> ElementDraft {
    ElementDraft {
        style,
        shape: Shape::Sticky {
            anchor,
            text: text.to_owned(),
            bounds: Rect::from_min_size(anchor, STICKY_SIZE),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn text_width_follows_character_count() {
        let draft = text(Style::default(), pos2(5.0, 5.0), "héllo");
        let bounds = draft.shape.bounds().unwrap();
        assert_eq!(bounds.width(), 50.0);
        assert_eq!(bounds.height(), TEXT_HEIGHT);
        assert_eq!(bounds.min, pos2(5.0, 5.0));
    }

    #[test]
    fn sticky_has_fixed_size() {
        let draft = sticky(Style::default(), pos2(-10.0, 0.0), "a\nb");
        assert_eq!(
            draft.shape.bounds(),
            Some(Rect::from_min_size(pos2(-10.0, 0.0), STICKY_SIZE))
        );
        assert_eq!(draft.shape.points(), &[pos2(-10.0, 0.0)]);
    }

    #[test]
    fn degenerate_shapes_are_still_built() {
        let draft = rectangle(Style::default(), pos2(3.0, 3.0), pos2(3.0, 3.0));
        let bounds = draft.shape.bounds().unwrap();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);

        let dot = line(Style::default(), pos2(1.0, 1.0), pos2(1.0, 1.0));
        assert_eq!(
            dot.shape.bounds(),
            Some(Rect::from_min_max(pos2(-4.0, -4.0), pos2(6.0, 6.0)))
        );
    }
}
