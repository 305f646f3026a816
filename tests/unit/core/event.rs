use super::*;

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event_lowercases_ctrl_chars() {
    let event = key_event(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    let key = Key::from(&event);
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_ne!(key, Key::ctrl(KeyCode::Char('s')));
}

#[test]
fn test_key_from_event_drops_shift_on_plain_chars() {
    let event = key_event(KeyCode::Char('A'), KeyModifiers::SHIFT);
    assert_eq!(Key::from(&event), Key::simple(KeyCode::Char('A')));
}

#[test]
fn test_key_from_event_keeps_function_keys() {
    let event = key_event(KeyCode::F(5), KeyModifiers::NONE);
    assert_eq!(Key::from(&event), Key::simple(KeyCode::F(5)));
}

#[test]
fn test_input_event_accessors() {
    let event = InputEvent::Key(key_event(KeyCode::Enter, KeyModifiers::NONE));
    assert!(event.as_key().is_some());
    assert!(event.as_mouse().is_none());
    assert!(InputEvent::Paste("x".into()).as_key().is_none());
}
