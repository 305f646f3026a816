//! Text buffer model.
//!
//! - text storage (Rope)
//! - a single cursor addressed as (row, grapheme column)
//! - row/column <-> char offset mapping

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Borrow the slice as `&str` when it is contiguous, copy otherwise.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// Strip one trailing line break (`\r\n`, `\n` or `\r`).
pub fn strip_line_break(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    preferred_col: Option<usize>,
    cached_char_pos: Option<usize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            preferred_col: None,
            cached_char_pos: Some(0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            preferred_col: None,
            cached_char_pos: Some(0),
        }
    }

    /// Replace the whole content and move the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = (0, 0);
        self.preferred_col = None;
        self.cached_char_pos = Some(0);
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Place the cursor, clamped to the document.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.last_row());
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
        self.preferred_col = None;
        self.invalidate_char_pos_cache();
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Line content without its trailing line break.
    pub fn line(&self, row: usize) -> Option<String> {
        if row < self.rope.len_lines() {
            let slice = self.rope.line(row);
            Some(strip_line_break(&slice_to_cow(slice)).to_string())
        } else {
            None
        }
    }

    pub fn cursor_char_offset(&mut self) -> usize {
        match self.cached_char_pos {
            Some(offset) => offset,
            None => {
                let offset = self.pos_to_char(self.cursor);
                self.cached_char_pos = Some(offset);
                offset
            }
        }
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        strip_line_break(&line)
            .graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        strip_line_break(&line).graphemes(true).count()
    }

    fn last_row(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }

    // ==================== editing ====================

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let char_offset = self.cursor_char_offset();
        self.rope.insert(char_offset, s);
        self.move_to_char(char_offset + s.chars().count());
    }

    /// Backspace. Returns false at the start of the document.
    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let end = self.cursor_char_offset();
        let start = if col > 0 {
            self.pos_to_char((row, col - 1))
        } else if row > 0 {
            // Join with the previous line: drop its whole line break.
            self.pos_to_char((row - 1, self.line_grapheme_len(row - 1)))
        } else {
            return false;
        };

        self.rope.remove(start..end);
        self.move_to_char(start);
        true
    }

    /// Delete. Returns false at the end of the document.
    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let start = self.cursor_char_offset();
        let end = if col < self.line_grapheme_len(row) {
            self.pos_to_char((row, col + 1))
        } else if row < self.last_row() {
            self.rope.line_to_char(row + 1)
        } else {
            return false;
        };

        self.rope.remove(start..end);
        self.cached_char_pos = Some(start);
        true
    }

    // ==================== cursor movement ====================

    pub fn move_left(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            self.set_cursor(row, col - 1);
        } else if row > 0 {
            self.set_cursor(row - 1, self.line_grapheme_len(row - 1));
        } else {
            return false;
        }
        true
    }

    pub fn move_right(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.set_cursor(row, col + 1);
        } else if row < self.last_row() {
            self.set_cursor(row + 1, 0);
        } else {
            return false;
        }
        true
    }

    /// Move by `delta` rows, keeping the column the vertical run started from.
    pub fn move_vertical(&mut self, delta: isize) -> bool {
        let (row, col) = self.cursor;
        let target = if delta < 0 {
            row.saturating_sub(delta.unsigned_abs())
        } else {
            row.saturating_add(delta as usize).min(self.last_row())
        };
        if target == row {
            return false;
        }

        let preferred = self.preferred_col.unwrap_or(col);
        let col = preferred.min(self.line_grapheme_len(target));
        self.cursor = (target, col);
        self.preferred_col = Some(preferred);
        self.invalidate_char_pos_cache();
        true
    }

    pub fn move_line_start(&mut self) -> bool {
        let (row, col) = self.cursor;
        self.set_cursor(row, 0);
        col != 0
    }

    pub fn move_line_end(&mut self) -> bool {
        let (row, col) = self.cursor;
        let end = self.line_grapheme_len(row);
        self.set_cursor(row, end);
        col != end
    }

    fn move_to_char(&mut self, char_offset: usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_offset);
        let line_start = self.rope.line_to_char(row);
        let prefix = self.rope.slice(line_start..char_offset);
        let col = slice_to_cow(prefix).graphemes(true).count();

        self.cursor = (row, col);
        self.preferred_col = None;
        self.cached_char_pos = Some(char_offset);
    }

    fn invalidate_char_pos_cache(&mut self) {
        self.cached_char_pos = None;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("len_chars", &self.rope.len_chars())
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
