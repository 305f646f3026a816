use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};

/// xterm byte sequence for a key, or `None` when the shell has no use for it.
pub(in crate::app::workbench) fn terminal_bytes_for_key_event(event: &KeyEvent) -> Option<Vec<u8>> {
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    let mut mods = event.modifiers;
    mods.remove(KeyModifiers::ALT);

    let mut bytes = match (event.code, mods) {
        (KeyCode::Char(ch), KeyModifiers::CONTROL) => control_byte(ch).map(|b| vec![b])?,
        (KeyCode::Char(ch), mods) if mods.is_empty() || mods == KeyModifiers::SHIFT => {
            let mut buf = [0u8; 4];
            let s = ch.encode_utf8(&mut buf);
            s.as_bytes().to_vec()
        }
        (KeyCode::Enter, _) => vec![b'\r'],
        (KeyCode::Backspace, _) => vec![0x7f],
        (KeyCode::Tab, _) => vec![b'\t'],
        (KeyCode::BackTab, _) => b"\x1b[Z".to_vec(),
        (KeyCode::Esc, _) => vec![0x1b],
        (KeyCode::Up, _) => b"\x1b[A".to_vec(),
        (KeyCode::Down, _) => b"\x1b[B".to_vec(),
        (KeyCode::Right, _) => b"\x1b[C".to_vec(),
        (KeyCode::Left, _) => b"\x1b[D".to_vec(),
        (KeyCode::Home, _) => b"\x1b[H".to_vec(),
        (KeyCode::End, _) => b"\x1b[F".to_vec(),
        (KeyCode::Insert, _) => b"\x1b[2~".to_vec(),
        (KeyCode::Delete, _) => b"\x1b[3~".to_vec(),
        (KeyCode::PageUp, _) => b"\x1b[5~".to_vec(),
        (KeyCode::PageDown, _) => b"\x1b[6~".to_vec(),
        (KeyCode::F(n), _) => function_key(n)?,
        _ => return None,
    };

    if alt {
        bytes.insert(0, 0x1b);
    }
    Some(bytes)
}

/// Pasted text as typed input: line breaks become carriage returns.
pub(in crate::app::workbench) fn terminal_bytes_for_paste(text: &str) -> Vec<u8> {
    text.replace("\r\n", "\r").replace('\n', "\r").into_bytes()
}

fn control_byte(ch: char) -> Option<u8> {
    match ch.to_ascii_lowercase() {
        ch @ 'a'..='z' => Some((ch as u8) & 0x1f),
        ' ' | '@' | '2' => Some(0x00),
        '[' | '3' => Some(0x1b),
        '\\' | '4' => Some(0x1c),
        ']' | '5' => Some(0x1d),
        '^' | '6' => Some(0x1e),
        '_' | '-' | '7' => Some(0x1f),
        _ => None,
    }
}

fn function_key(n: u8) -> Option<Vec<u8>> {
    let seq: &[u8] = match n {
        1 => b"\x1bOP",
        2 => b"\x1bOQ",
        3 => b"\x1bOR",
        4 => b"\x1bOS",
        5 => b"\x1b[15~",
        6 => b"\x1b[17~",
        7 => b"\x1b[18~",
        8 => b"\x1b[19~",
        9 => b"\x1b[20~",
        10 => b"\x1b[21~",
        11 => b"\x1b[23~",
        12 => b"\x1b[24~",
        _ => return None,
    };
    Some(seq.to_vec())
}
