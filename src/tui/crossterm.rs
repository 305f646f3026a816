use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Convert a raw crossterm event. Key releases and focus changes are dropped.
pub fn into_input_event(event: crossterm::event::Event) -> Option<InputEvent> {
    match event {
        crossterm::event::Event::Key(key) if key.kind == KeyEventKind::Release => None,
        crossterm::event::Event::Key(key) => Some(InputEvent::Key(into_key_event(key))),
        crossterm::event::Event::Mouse(mouse) => Some(InputEvent::Mouse(mouse)),
        crossterm::event::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        crossterm::event::Event::Paste(s) => Some(InputEvent::Paste(s)),
        crossterm::event::Event::FocusGained | crossterm::event::Event::FocusLost => None,
    }
}

pub fn into_key_event(mut event: KeyEvent) -> KeyEvent {
    match event.code {
        // Some terminals report Ctrl+Space as NUL.
        KeyCode::Null => {
            event.code = KeyCode::Char(' ');
            event.modifiers |= KeyModifiers::CONTROL;
        }
        KeyCode::BackTab => {
            event.modifiers |= KeyModifiers::SHIFT;
        }
        _ => {}
    }
    event
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
