use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::{Action, DialogState};

/// Keys inside a modal dialog. Anything unmapped is swallowed by the caller.
pub(in crate::app::workbench) fn dialog_action_for_key(
    dialog: &DialogState,
    event: &KeyEvent,
) -> Option<Action> {
    match dialog {
        DialogState::Warning { .. } => match event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DialogAccept),
            _ => None,
        },
        DialogState::OpenFile(_) => match event.code {
            KeyCode::Esc => Some(Action::DialogCancel),
            KeyCode::Enter => Some(Action::DialogAccept),
            KeyCode::Backspace => Some(Action::OpenPromptBackspace),
            KeyCode::Left => Some(Action::OpenPromptCursorLeft),
            KeyCode::Right => Some(Action::OpenPromptCursorRight),
            KeyCode::Char(ch)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::OpenPromptInsert(ch.to_string()))
            }
            _ => None,
        },
    }
}

pub(in crate::app::workbench) fn dialog_action_for_paste(
    dialog: &DialogState,
    text: &str,
) -> Option<Action> {
    match dialog {
        DialogState::OpenFile(_) => {
            let line = text.lines().next().unwrap_or_default();
            (!line.is_empty()).then(|| Action::OpenPromptInsert(line.to_string()))
        }
        DialogState::Warning { .. } => None,
    }
}
