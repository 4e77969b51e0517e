use eframe::egui;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(36.0, 36.0);
const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(0xdb, 0xea, 0xfe);
const SELECTED_BORDER: egui::Color32 = egui::Color32::from_rgb(0x3b, 0x82, 0xf6);

/// Square icon button of the left toolbar.
pub struct ToolButton {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub selected: bool,
    pub enabled: bool,
}

impl ToolButton {
    pub fn new(icon: &'static str, tooltip: &'static str, selected: bool) -> Self {
        Self {
            icon,
            tooltip,
            selected,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let sense = if self.enabled {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                SELECTED_FILL
            } else if response.hovered() && self.enabled {
                egui::Color32::from_gray(235)
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if !self.enabled {
                egui::Color32::from_gray(180)
            } else if self.selected {
                SELECTED_BORDER
            } else {
                egui::Color32::from_gray(60)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter()
                    .rect_stroke(rect, 6.0, egui::Stroke::new(1.5, SELECTED_BORDER));
            }
        }

        response.on_hover_text(self.tooltip)
    }
}
