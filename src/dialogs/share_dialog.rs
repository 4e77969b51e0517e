//! Cosmetic sharing UI; nothing leaves the machine.

use egui::{Align2, Vec2};

pub const SHARE_LINK: &str = "https://whiteboard.app/share/abc123xyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Edit,
    View,
}

impl Permission {
    pub fn label(&self) -> &'static str {
        match self {
            Permission::Edit => "Edit",
            Permission::View => "View",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collaborator {
    pub email: String,
    pub permission: Permission,
    pub pending: bool,
}

#[derive(Debug)]
pub struct ShareDialog {
    pub open: bool,
    email: String,
    permission: Permission,
    collaborators: Vec<Collaborator>,
}

impl Default for ShareDialog {
    fn default() -> Self {
        Self {
            open: false,
            email: String::new(),
            permission: Permission::Edit,
            collaborators: vec![
                Collaborator {
                    email: "alex@example.com".to_owned(),
                    permission: Permission::Edit,
                    pending: false,
                },
                Collaborator {
                    email: "sarah@example.com".to_owned(),
                    permission: Permission::View,
                    pending: true,
                },
            ],
        }
    }
}

impl ShareDialog {
    pub fn collaborators(&self) -> &[Collaborator] {
        &self.collaborators
    }

    /// Adds a pending collaborator. Blank addresses are ignored.
    pub fn invite(&mut self, email: &str, permission: Permission) {
        let email = email.trim();
        if email.is_empty() {
            return;
        }
        self.collaborators.push(Collaborator {
            email: email.to_owned(),
            permission,
            pending: true,
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        let mut removed = None;
        egui::Window::new("Share Whiteboard")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.strong("Share Link");
                ui.horizontal(|ui| {
                    let mut link = SHARE_LINK;
                    ui.text_edit_singleline(&mut link);
                    if ui.button("📋").on_hover_text("Copy link").clicked() {
                        ui.ctx().copy_text(SHARE_LINK.to_owned());
                    }
                });
                ui.small("Anyone with this link can view the whiteboard");
                ui.separator();

                ui.strong("Invite Collaborators");
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut self.email).hint_text("Enter email address"));
                    egui::ComboBox::from_id_salt("invite_permission")
                        .selected_text(self.permission.label())
                        .show_ui(ui, |ui| {
                            for permission in [Permission::Edit, Permission::View] {
                                ui.selectable_value(&mut self.permission, permission, permission.label());
                            }
                        });
                    if ui.button("Invite").clicked() {
                        let email = std::mem::take(&mut self.email);
                        self.invite(&email, self.permission);
                    }
                });
                ui.separator();

                ui.strong("Current Collaborators");
                for (index, collaborator) in self.collaborators.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(&collaborator.email);
                        ui.weak(if collaborator.pending { "pending" } else { "active" });
                        egui::ComboBox::from_id_salt(("collaborator_permission", index))
                            .selected_text(collaborator.permission.label())
                            .show_ui(ui, |ui| {
                                for permission in [Permission::Edit, Permission::View] {
                                    ui.selectable_value(&mut collaborator.permission, permission, permission.label());
                                }
                            });
                        if ui.small_button("✖").clicked() {
                            removed = Some(index);
                        }
                    });
                }
            });

        if let Some(index) = removed {
            self.collaborators.remove(index);
        }
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invites_are_pending_and_blank_ones_ignored() {
        let mut dialog = ShareDialog::default();
        dialog.invite("  ", Permission::Edit);
        dialog.invite("kim@example.com", Permission::View);

        assert_eq!(dialog.collaborators().len(), 3);
        let last = dialog.collaborators().last().unwrap();
        assert!(last.pending);
        assert_eq!(last.permission, Permission::View);
    }
}
