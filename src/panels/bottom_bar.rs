use crate::WhiteboardApp;

const CONNECTED_COLOR: egui::Color32 = egui::Color32::from_rgb(0x16, 0xa3, 0x4a);
const VOICE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xdc, 0x26, 0x26);

pub fn bottom_bar(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_bar")
        .exact_height(28.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.colored_label(CONNECTED_COLOR, "● Connected");
                ui.weak("3 collaborators online");
                ui.separator();
                ui.label("Current tool:");
                ui.strong(format!("{} Tool", app.interaction().tool().label()));

                if app.voice_active {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(VOICE_COLOR, "🎤 Voice Active");
                    });
                }
            });
        });
}
