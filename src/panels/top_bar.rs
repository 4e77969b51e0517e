use crate::export::ExportFormat;
use crate::WhiteboardApp;

pub fn top_bar(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(48.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.strong("W");
                ui.heading("Whiteboard");
                ui.separator();

                if app.editing_title {
                    let response = ui.text_edit_singleline(&mut app.settings_mut().title);
                    if std::mem::take(&mut app.focus_title) {
                        response.request_focus();
                    } else if response.lost_focus() {
                        app.editing_title = false;
                    }
                } else if ui
                    .add(egui::Label::new(&app.settings().title).sense(egui::Sense::click()))
                    .on_hover_text("Click to rename")
                    .clicked()
                {
                    app.editing_title = true;
                    app.focus_title = true;
                }

                ui.weak(app.last_saved_label(ui.input(|input| input.time)));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.menu_button("⬇ Export", |ui| {
                        for format in ExportFormat::ALL {
                            if ui.button(format!("Export as {}", format.extension().to_uppercase())).clicked() {
                                app.export_dialog.open_with(format);
                                ui.close_menu();
                            }
                        }
                    });
                    if ui.button("Share").clicked() {
                        app.share_dialog.open = true;
                    }
                    if ui.button("💾 Save").clicked() {
                        app.mark_saved(ui.input(|input| input.time));
                    }
                    ui.label(format!("{} elements", app.drawing().elements().len()));
                });
            });
        });
}
