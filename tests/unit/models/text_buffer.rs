use super::*;

#[test]
fn test_text_buffer_basic() {
    let mut buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.cursor(), (0, 0));

    buffer.set_cursor(1, 2);
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_set_cursor_clamps_to_document() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(9, 9);
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_pos_to_char() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.pos_to_char((0, 0)), 0);
    assert_eq!(buffer.pos_to_char((1, 0)), 6);
}

#[test]
fn test_set_text_replaces_content_and_resets_cursor() {
    let mut buffer = TextBuffer::from_text("old\ncontent");
    buffer.set_cursor(1, 3);

    buffer.set_text("new");
    assert_eq!(buffer.text(), "new");
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_insert_char_and_newline() {
    let mut buffer = TextBuffer::new();
    buffer.insert_char('a');
    buffer.insert_char('\n');
    buffer.insert_char('b');

    assert_eq!(buffer.text(), "a\nb");
    assert_eq!(buffer.cursor(), (1, 1));
}

#[test]
fn test_insert_str_moves_cursor_past_text() {
    let mut buffer = TextBuffer::from_text("xy");
    buffer.set_cursor(0, 1);
    buffer.insert_str("12\n345");

    assert_eq!(buffer.text(), "x12\n345y");
    assert_eq!(buffer.cursor(), (1, 3));
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut buffer = TextBuffer::from_text("ab\r\ncd");
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));
}

#[test]
fn test_delete_backward_at_start_is_noop() {
    let mut buffer = TextBuffer::from_text("ab");
    assert!(!buffer.delete_backward());
    assert_eq!(buffer.text(), "ab");
}

#[test]
fn test_delete_forward_removes_grapheme_and_line_break() {
    let mut buffer = TextBuffer::from_text("e\u{301}x\nz");
    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "x\nz");

    buffer.set_cursor(0, 1);
    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "xz");
    assert!(buffer.move_line_end());
    assert!(!buffer.delete_forward());
}

#[test]
fn test_line_grapheme_len_ignores_line_breaks() {
    let buffer = TextBuffer::from_text("hello\r\nworld\n");

    assert_eq!(buffer.line_grapheme_len(0), 5);
    assert_eq!(buffer.line_grapheme_len(1), 5);
    assert_eq!(buffer.line(0).as_deref(), Some("hello"));
}

#[test]
fn test_move_vertical_keeps_preferred_column() {
    let mut buffer = TextBuffer::from_text("long line\nab\nanother line");
    buffer.set_cursor(0, 7);

    assert!(buffer.move_vertical(1));
    assert_eq!(buffer.cursor(), (1, 2));
    assert!(buffer.move_vertical(1));
    assert_eq!(buffer.cursor(), (2, 7));
    assert!(!buffer.move_vertical(5));
}

#[test]
fn test_move_left_right_wraps_lines() {
    let mut buffer = TextBuffer::from_text("a\nb");
    buffer.set_cursor(1, 0);

    assert!(buffer.move_left());
    assert_eq!(buffer.cursor(), (0, 1));
    assert!(buffer.move_right());
    assert_eq!(buffer.cursor(), (1, 0));
    buffer.move_line_end();
    assert!(!buffer.move_right());
}
