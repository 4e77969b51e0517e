use egui::{Key, Modifiers};

/// Keyboard shortcuts honoured regardless of the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
    SelectAll,
    DeleteSelection,
    /// Abandons a pending text prompt.
    Cancel,
}

/// Ctrl on Windows/Linux, Cmd on macOS. Either is accepted everywhere.
fn command_held(modifiers: Modifiers) -> bool {
    modifiers.command || modifiers.ctrl || modifiers.mac_cmd
}

pub fn shortcut_for(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
    let command = command_held(modifiers);
    match key {
        Key::Z if command && modifiers.shift => Some(Shortcut::Redo),
        Key::Z if command => Some(Shortcut::Undo),
        Key::Y if command => Some(Shortcut::Redo),
        Key::A if command => Some(Shortcut::SelectAll),
        Key::Delete | Key::Backspace => Some(Shortcut::DeleteSelection),
        Key::Escape => Some(Shortcut::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_and_both_redo_chords() {
        assert_eq!(shortcut_for(Key::Z, Modifiers::COMMAND), Some(Shortcut::Undo));
        assert_eq!(shortcut_for(Key::Z, Modifiers::CTRL), Some(Shortcut::Undo));
        assert_eq!(
            shortcut_for(Key::Z, Modifiers::COMMAND | Modifiers::SHIFT),
            Some(Shortcut::Redo)
        );
        assert_eq!(shortcut_for(Key::Y, Modifiers::MAC_CMD), Some(Shortcut::Redo));
    }

    #[test]
    fn letters_without_command_do_nothing() {
        assert_eq!(shortcut_for(Key::Z, Modifiers::NONE), None);
        assert_eq!(shortcut_for(Key::A, Modifiers::SHIFT), None);
    }

    #[test]
    fn delete_and_backspace_need_no_modifier() {
        assert_eq!(shortcut_for(Key::Delete, Modifiers::NONE), Some(Shortcut::DeleteSelection));
        assert_eq!(shortcut_for(Key::Backspace, Modifiers::NONE), Some(Shortcut::DeleteSelection));
    }
}
