use crate::command::Command;
use crate::settings::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::WhiteboardApp;

const SWATCH_SIZE: egui::Vec2 = egui::vec2(24.0, 24.0);
const ACTIVE_LAYER_FILL: egui::Color32 = egui::Color32::from_rgb(0xef, 0xf6, 0xff);

const AI_SUGGESTIONS: [(&str, &str); 2] = [
    ("Auto Layout", "Organize elements automatically"),
    ("Smart Connect", "Connect related elements"),
];

pub fn side_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::SidePanel::right("side_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            let mut commands = Vec::new();

            ui.heading("Colors");
            let current = app.drawing().current_color();
            let mut picked_color = None;
            ui.horizontal_wrapped(|ui| {
                for &color in &app.settings().palette {
                    let (rect, response) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::click());
                    ui.painter().rect_filled(rect, 4.0, color);
                    let border = if color == current {
                        egui::Stroke::new(2.0, egui::Color32::from_rgb(0x3b, 0x82, 0xf6))
                    } else {
                        egui::Stroke::new(1.0, egui::Color32::from_gray(200))
                    };
                    ui.painter().rect_stroke(rect, 4.0, border);
                    if response.on_hover_text(crate::element::to_hex(color)).clicked() {
                        picked_color = Some(color);
                    }
                }
            });
            let mut custom = current;
            ui.horizontal(|ui| {
                ui.label("Custom:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut custom,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    picked_color = Some(custom);
                }
            });

            if let Some(color) = picked_color {
                app.set_color(color);
            }

            ui.separator();
            ui.heading("Stroke Width");
            let mut width = app.drawing().current_stroke_width();
            if ui
                .add(egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).suffix("px"))
                .changed()
            {
                app.set_stroke_width(width);
            }

            ui.separator();
            ui.heading("Canvas");
            ui.checkbox(&mut app.settings_mut().show_grid, "Show grid");
            if ui.button("🗑 Clear Canvas").clicked() {
                commands.push(Command::ClearCanvas);
            }
            ui.weak(format!(
                "Elements: {} | Zoom: {}%",
                app.drawing().elements().len(),
                (app.drawing().zoom() * 100.0).round()
            ));

            ui.separator();
            egui::CollapsingHeader::new("🗐 Layers")
                .default_open(true)
                .show(ui, |ui| {
                    layer_row(ui, "Drawing Layer", true);
                    layer_row(ui, "Background", false);
                });

            ui.separator();
            ui.heading("✨ AI Suggestions");
            for (title, detail) in AI_SUGGESTIONS {
                let clicked = ui
                    .add_sized(
                        [ui.available_width(), 40.0],
                        egui::Button::new(format!("{title}\n{detail}")),
                    )
                    .clicked();
                if clicked {
                    log::info!("{title} is not available yet");
                }
            }

            ui.separator();
            ui.heading("Voice Input");
            let label = if app.voice_active {
                "Stop Recording"
            } else {
                "Start Recording"
            };
            if ui.button(label).clicked() {
                app.voice_active = !app.voice_active;
                log::info!("voice input {}", if app.voice_active { "on" } else { "off" });
            }

            app.execute(commands);
        });
}

/// The whiteboard has a single drawing layer; these rows are informational.
fn layer_row(ui: &mut egui::Ui, name: &str, active: bool) {
    let fill = if active {
        ACTIVE_LAYER_FILL
    } else {
        egui::Color32::TRANSPARENT
    };
    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(220)))
        .rounding(4.0)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(name);
                if active {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small("Active");
                    });
                }
            });
        });
}
