use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::EditorAction;

pub(in crate::app::workbench) fn editor_action_for_key(
    event: &KeyEvent,
    page_rows: usize,
) -> Option<EditorAction> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }

    let action = match event.code {
        KeyCode::Char(ch) => EditorAction::InsertChar(ch),
        KeyCode::Enter => EditorAction::InsertChar('\n'),
        KeyCode::Tab => EditorAction::InsertChar('\t'),
        KeyCode::Backspace => EditorAction::Backspace,
        KeyCode::Delete => EditorAction::Delete,
        KeyCode::Left => EditorAction::MoveLeft,
        KeyCode::Right => EditorAction::MoveRight,
        KeyCode::Up => EditorAction::MoveUp,
        KeyCode::Down => EditorAction::MoveDown,
        KeyCode::Home => EditorAction::MoveLineStart,
        KeyCode::End => EditorAction::MoveLineEnd,
        KeyCode::PageUp => EditorAction::PageUp { rows: page_rows },
        KeyCode::PageDown => EditorAction::PageDown { rows: page_rows },
        _ => return None,
    };
    Some(action)
}
