mod export_dialog;
mod share_dialog;
mod text_entry;

pub use export_dialog::ExportDialog;
pub use share_dialog::{Collaborator, Permission, ShareDialog};
pub use text_entry::TextEntryDialog;
