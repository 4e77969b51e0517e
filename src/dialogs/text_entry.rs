use egui::{Align2, Key, Vec2};

use crate::interaction::{TextKind, TextRequest};

/// Modal prompt answering a [`TextRequest`] of the interaction state machine.
#[derive(Debug)]
pub struct TextEntryDialog {
    request: Option<TextRequest>,
    text: String,
    focused: bool,
}

impl TextEntryDialog {
    pub fn new(request: TextRequest) -> Self {
        Self {
            request: Some(request),
            text: String::new(),
            focused: false,
        }
    }

    pub fn kind(&self) -> Option<TextKind> {
        self.request.as_ref().map(|request| request.kind)
    }

    /// Shows the prompt. Returns `true` once it has been answered and can be
    /// dropped.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let Some(kind) = self.kind() else {
            return true;
        };
        let title = match kind {
            TextKind::Text => "Add Text",
            TextKind::Sticky => "Add Sticky Note",
        };

        let mut answer: Option<Option<String>> = None;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(kind.prompt());
                let edit = match kind {
                    TextKind::Text => egui::TextEdit::singleline(&mut self.text),
                    TextKind::Sticky => egui::TextEdit::multiline(&mut self.text).desired_rows(4),
                };
                let response = ui.add(edit.hint_text(kind.default_text()));
                if !self.focused {
                    response.request_focus();
                    self.focused = true;
                }

                let submitted = kind == TextKind::Text
                    && response.lost_focus()
                    && ui.input(|input| input.key_pressed(Key::Enter));
                if ui.input(|input| input.key_pressed(Key::Escape)) {
                    answer = Some(None);
                }

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        answer = Some(Some(self.text.clone()));
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(None);
                    }
                });
            });

        match answer {
            Some(text) => {
                if let Some(request) = self.request.take() {
                    request.respond(text);
                }
                true
            }
            None => false,
        }
    }
}
