mod dialogs;
mod editor;
mod terminal;

pub(super) use dialogs::{dialog_action_for_key, dialog_action_for_paste};
pub(super) use editor::editor_action_for_key;
pub(super) use terminal::{terminal_bytes_for_key_event, terminal_bytes_for_paste};
