use egui::Color32;
use serde::{Deserialize, Serialize};

/// Visual style of an element. Captured from the current color and stroke
/// width when the element is created.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color32,
    pub stroke_width: f32,
    pub fill: Option<Color32>,
}

impl Style {
    pub fn new(color: Color32, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
            fill: None,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color32::BLACK, 2.0)
    }
}

/// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(to_hex(Color32::from_rgb(255, 165, 0)), "#ffa500");
        assert_eq!(to_hex(Color32::BLACK), "#000000");
        assert_eq!(to_hex(Color32::TRANSPARENT).len(), 9);
    }
}
