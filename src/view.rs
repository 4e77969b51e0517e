use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;
/// Factor applied by the zoom-in/zoom-out toolbar actions.
pub const ZOOM_STEP: f32 = 1.2;

/// World-to-screen mapping of the canvas.
///
/// The canvas is scaled by `zoom` and then translated by `pan`, so `pan` is
/// expressed in pre-scale world units: `screen = (world + pan) * zoom`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn new(zoom: f32, pan: Vec2) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            pan,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = clamp_zoom(zoom);
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Canvas-local screen position of a world point.
    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        ((world.to_vec2() + self.pan) * self.zoom).to_pos2()
    }

    /// World position under a canvas-local screen point.
    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        (screen.to_vec2() / self.zoom - self.pan).to_pos2()
    }

    /// World-space area visible through a viewport of the given screen size.
    pub fn visible_world_rect(&self, viewport: Vec2) -> Rect {
        Rect::from_min_max(
            self.screen_to_world(Pos2::ZERO),
            self.screen_to_world(viewport.to_pos2()),
        )
    }
}

/// Clamps to `[MIN_ZOOM, MAX_ZOOM]`. A NaN request keeps the view usable.
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_nan() {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn screen_and_world_are_inverse() {
        let view = ViewTransform::new(2.0, vec2(10.0, -5.0));
        let world = pos2(3.0, 4.0);
        let screen = view.world_to_screen(world);
        assert_eq!(screen, pos2(26.0, -2.0));
        assert_eq!(view.screen_to_world(screen), world);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut view = ViewTransform::default();
        view.set_zoom(100.0);
        assert_eq!(view.zoom(), MAX_ZOOM);
        view.set_zoom(0.0001);
        assert_eq!(view.zoom(), MIN_ZOOM);
        view.set_zoom(f32::NAN);
        assert_eq!(view.zoom(), 1.0);
    }
}
