use egui::{Align2, Vec2};

use crate::export::{ExportFormat, ExportOptions, ExportQuality};

#[derive(Debug, Default)]
pub struct ExportDialog {
    pub open: bool,
    pub options: ExportOptions,
}

impl ExportDialog {
    /// Opens the dialog with `format` preselected.
    pub fn open_with(&mut self, format: ExportFormat) {
        self.options.format = format;
        self.open = true;
    }

    /// Returns the chosen options when the user confirms.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ExportOptions> {
        if !self.open {
            return None;
        }

        let mut confirmed = false;
        let mut open = self.open;
        egui::Window::new("⬇ Export Whiteboard")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.strong("Export Format");
                for format in ExportFormat::ALL {
                    ui.radio_value(&mut self.options.format, format, format.label())
                        .on_hover_text(format.description());
                }
                ui.separator();

                ui.strong("Quality");
                egui::ComboBox::from_id_salt("export_quality")
                    .selected_text(self.options.quality.label())
                    .show_ui(ui, |ui| {
                        for quality in ExportQuality::ALL {
                            ui.selectable_value(&mut self.options.quality, quality, quality.label());
                        }
                    });
                ui.separator();

                ui.strong("Options");
                ui.checkbox(&mut self.options.include_background, "Include background");
                ui.checkbox(&mut self.options.include_grid, "Include grid lines");
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                    if ui.button(format!("Export {}", self.options.format.extension().to_uppercase())).clicked() {
                        confirmed = true;
                    }
                });
            });

        self.open &= open;
        if confirmed {
            self.open = false;
            Some(self.options)
        } else {
            None
        }
    }
}
