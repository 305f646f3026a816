use super::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn numbered_lines(count: usize) -> TextBuffer {
    let text = (0..count)
        .map(|i| format!("l{i}"))
        .collect::<Vec<_>>()
        .join("\n");
    TextBuffer::from_text(&text)
}

fn draw(view: &mut TextView, buffer: &TextBuffer, width: u16, height: u16) -> (Vec<String>, Option<(u16, u16)>) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut cursor = None;
    terminal
        .draw(|frame| {
            let area = frame.area();
            cursor = view.render(frame, area, buffer, Style::default());
        })
        .unwrap();

    let screen = terminal.backend().buffer();
    let rows = screen
        .content
        .chunks(usize::from(width))
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();
    (rows, cursor)
}

#[test]
fn test_wrap_line_breaks_after_whitespace() {
    assert_eq!(wrap_line("hello world", 8), vec![(0, 6), (6, 11)]);
    assert_eq!(wrap_line("short", 8), vec![(0, 5)]);
}

#[test]
fn test_wrap_line_hard_breaks_long_words() {
    assert_eq!(wrap_line("abcdefgh", 3), vec![(0, 3), (3, 6), (6, 8)]);
}

#[test]
fn test_wrap_line_lets_spaces_hang() {
    assert_eq!(wrap_line("abc def", 3), vec![(0, 4), (4, 7)]);
}

#[test]
fn test_wrap_line_empty_line_has_one_segment() {
    assert_eq!(wrap_line("", 10), vec![(0, 0)]);
}

#[test]
fn test_wrap_line_counts_wide_graphemes() {
    assert_eq!(wrap_line("日本語", 4), vec![(0, 2), (2, 3)]);
}

#[test]
fn test_segment_for_col_prefers_next_segment_on_boundary() {
    let segments = vec![(0, 6), (6, 11)];
    assert_eq!(segment_for_col(&segments, 3), 0);
    assert_eq!(segment_for_col(&segments, 6), 1);
    assert_eq!(segment_for_col(&segments, 11), 1);
}

#[test]
fn test_render_wraps_and_places_cursor() {
    let mut buffer = TextBuffer::from_text("hello world\nsecond");
    buffer.set_cursor(0, 6);
    let mut view = TextView::new();

    let (rows, cursor) = draw(&mut view, &buffer, 8, 3);
    assert_eq!(rows, vec!["hello", "world", "second"]);
    assert_eq!(cursor, Some((0, 1)));
}

#[test]
fn test_render_expands_tabs() {
    let buffer = TextBuffer::from_text("\tx");
    let mut view = TextView::new();

    let (rows, _) = draw(&mut view, &buffer, 10, 1);
    assert_eq!(rows, vec!["    x"]);
}

#[test]
fn test_ensure_cursor_visible_scrolls_both_ways() {
    let mut buffer = numbered_lines(10);
    let mut view = TextView::new();

    buffer.set_cursor(9, 0);
    view.ensure_cursor_visible(&buffer, 10, 3);
    assert_eq!(view.top(), (7, 0));

    buffer.set_cursor(0, 0);
    view.ensure_cursor_visible(&buffer, 10, 3);
    assert_eq!(view.top(), (0, 0));
}

#[test]
fn test_render_follows_cursor_to_last_line() {
    let mut buffer = numbered_lines(10);
    buffer.set_cursor(9, 1);
    let mut view = TextView::new();

    let (rows, cursor) = draw(&mut view, &buffer, 6, 3);
    assert_eq!(rows, vec!["l7", "l8", "l9"]);
    assert_eq!(cursor, Some((1, 2)));
}

#[test]
fn test_scroll_moves_viewport_within_document() {
    let buffer = numbered_lines(10);
    let mut view = TextView::new();
    draw(&mut view, &buffer, 6, 3);

    assert!(view.scroll(&buffer, 2));
    assert_eq!(view.top(), (2, 0));
    assert!(view.scroll(&buffer, -5));
    assert_eq!(view.top(), (0, 0));
    assert!(!view.scroll(&buffer, -1));
}

#[test]
fn test_scroll_is_kept_while_cursor_is_still() {
    let buffer = numbered_lines(10);
    let mut view = TextView::new();
    draw(&mut view, &buffer, 6, 3);

    view.scroll(&buffer, 4);
    let (rows, cursor) = draw(&mut view, &buffer, 6, 3);
    assert_eq!(rows, vec!["l4", "l5", "l6"]);
    assert_eq!(cursor, None);
}

#[test]
fn test_reset_returns_to_top_after_buffer_replaced() {
    let buffer = numbered_lines(10);
    let mut view = TextView::new();
    draw(&mut view, &buffer, 6, 3);
    view.scroll(&buffer, 4);
    assert_eq!(view.top(), (4, 0));

    let replaced = numbered_lines(10);
    view.reset();
    let (rows, cursor) = draw(&mut view, &replaced, 6, 3);
    assert_eq!(rows, vec!["l0", "l1", "l2"]);
    assert_eq!(cursor, Some((0, 0)));
}

#[test]
fn test_hit_test_maps_cells_to_positions() {
    let buffer = TextBuffer::from_text("hello world\nsecond");
    let mut view = TextView::new();
    draw(&mut view, &buffer, 8, 3);

    assert_eq!(view.hit_test(&buffer, 2, 1), Some((0, 8)));
    assert_eq!(view.hit_test(&buffer, 7, 1), Some((0, 11)));
    assert_eq!(view.hit_test(&buffer, 3, 2), Some((1, 3)));
    assert_eq!(view.hit_test(&buffer, 9, 0), None);
}

#[test]
fn test_hit_test_past_wrapped_segment_stays_on_that_line() {
    let buffer = TextBuffer::from_text("hello world");
    let mut view = TextView::new();
    draw(&mut view, &buffer, 8, 2);

    assert_eq!(view.hit_test(&buffer, 7, 0), Some((0, 5)));
}

#[test]
fn test_page_rows_uses_last_area() {
    let buffer = numbered_lines(3);
    let mut view = TextView::new();
    assert_eq!(view.page_rows(), 1);

    draw(&mut view, &buffer, 6, 5);
    assert_eq!(view.page_rows(), 4);
}
