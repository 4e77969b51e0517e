use egui::{Align2, Color32, FontId, Rect, Sense, Vec2};

use crate::command::Command;
use crate::renderer::painter;
use crate::WhiteboardApp;

const HINT_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 190);
const OVERLAY_MARGIN: f32 = 16.0;

pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, canvas_painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            let canvas_rect = response.rect;
            let delete_rect = Rect::from_min_size(
                canvas_rect.right_top() + egui::vec2(-100.0, OVERLAY_MARGIN),
                egui::vec2(84.0, 24.0),
            );

            let obstructions: &[Rect] = if app.drawing().selected_elements().is_empty() {
                &[]
            } else {
                std::slice::from_ref(&delete_rect)
            };
            app.handle_canvas_input(ctx, canvas_rect, obstructions);

            let frame = app.render_frame(canvas_rect.size());
            painter::paint(&frame, &canvas_painter, canvas_rect.min);

            if response.hovered() {
                ctx.set_cursor_icon(app.interaction().tool().cursor());
            }

            if let Some(hint) = app.interaction().tool().hint() {
                let galley = canvas_painter.layout_no_wrap(hint.to_owned(), FontId::proportional(12.0), Color32::WHITE);
                let pos = canvas_rect.min + Vec2::splat(OVERLAY_MARGIN);
                canvas_painter.rect_filled(
                    Rect::from_min_size(pos, galley.size()).expand(4.0),
                    4.0,
                    HINT_BACKGROUND,
                );
                canvas_painter.galley(pos, galley, Color32::WHITE);
            }

            canvas_painter.text(
                canvas_rect.right_bottom() - Vec2::splat(OVERLAY_MARGIN),
                Align2::RIGHT_BOTTOM,
                format!("{}%", (app.drawing().zoom() * 100.0).round()),
                FontId::proportional(12.0),
                Color32::from_gray(90),
            );

            let selected = app.drawing().selected_ids();
            if !selected.is_empty() {
                if ui.put(delete_rect, egui::Button::new("🗑 Delete")).clicked() {
                    app.execute(vec![Command::DeleteElements(selected)]);
                }
            }
        });
}

