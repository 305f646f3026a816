//! Word-wrapped view over a `TextBuffer`.
//!
//! Logical rows are split into visual segments of grapheme ranges. The
//! viewport is anchored at a (row, segment) pair so only the visible part of
//! the document is ever wrapped.

use crate::models::TextBuffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const TAB_WIDTH: usize = 4;

/// A visual line: graphemes `start..end` of one logical row.
pub type Segment = (usize, usize);

fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        TAB_WIDTH
    } else if g.chars().any(char::is_control) {
        1
    } else {
        g.width().max(1)
    }
}

fn push_display(out: &mut String, g: &str) {
    if g == "\t" {
        out.extend(std::iter::repeat(' ').take(TAB_WIDTH));
    } else if g.chars().any(char::is_control) {
        out.push('?');
    } else {
        out.push_str(g);
    }
}

/// Split `line` into segments no wider than `width`, breaking after
/// whitespace when possible. Always returns at least one segment.
pub fn wrap_line(line: &str, width: u16) -> Vec<Segment> {
    let width = usize::from(width.max(1));
    let mut segments = Vec::new();
    let mut seg_start = 0usize;
    let mut seg_width = 0usize;
    let mut last_break: Option<(usize, usize)> = None;

    for (idx, g) in line.graphemes(true).enumerate() {
        let w = grapheme_width(g);
        let is_space = g.chars().all(char::is_whitespace);
        // Whitespace may hang past the edge; it is where the next break goes.
        if seg_width + w > width && idx > seg_start && !is_space {
            match last_break {
                Some((brk, brk_width)) if brk > seg_start => {
                    segments.push((seg_start, brk));
                    seg_start = brk;
                    seg_width -= brk_width;
                }
                _ => {
                    segments.push((seg_start, idx));
                    seg_start = idx;
                    seg_width = 0;
                }
            }
            last_break = None;
        }

        seg_width += w;
        if is_space {
            last_break = Some((idx + 1, seg_width));
        }
    }

    let total = line.graphemes(true).count();
    segments.push((seg_start, total));
    segments
}

/// Index of the segment holding grapheme column `col`. A column on a segment
/// boundary belongs to the following segment, except at the end of the row.
pub fn segment_for_col(segments: &[Segment], col: usize) -> usize {
    segments
        .iter()
        .position(|&(start, end)| col >= start && col < end)
        .unwrap_or(segments.len().saturating_sub(1))
}

#[derive(Debug, Default)]
pub struct TextView {
    top: (usize, usize),
    last_cursor: Option<(usize, usize)>,
    last_area: Option<Rect>,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> (usize, usize) {
        self.top
    }

    pub fn last_area(&self) -> Option<Rect> {
        self.last_area
    }

    /// Forget the scroll position after the buffer was replaced; the next
    /// render starts from the top and brings the cursor into view.
    pub fn reset(&mut self) {
        self.top = (0, 0);
        self.last_cursor = None;
    }

    /// Rows to move for PageUp/PageDown.
    pub fn page_rows(&self) -> usize {
        self.last_area
            .map(|a| usize::from(a.height).saturating_sub(1))
            .unwrap_or(1)
            .max(1)
    }

    fn segments(buffer: &TextBuffer, row: usize, width: u16) -> Vec<Segment> {
        wrap_line(&buffer.line(row).unwrap_or_default(), width)
    }

    fn clamp_top(&mut self, buffer: &TextBuffer, width: u16) {
        let last_row = buffer.len_lines().saturating_sub(1);
        if self.top.0 > last_row {
            self.top = (last_row, 0);
        }
        let segs = Self::segments(buffer, self.top.0, width).len();
        self.top.1 = self.top.1.min(segs.saturating_sub(1));
    }

    fn next_pos(buffer: &TextBuffer, pos: (usize, usize), width: u16) -> Option<(usize, usize)> {
        let segs = Self::segments(buffer, pos.0, width).len();
        if pos.1 + 1 < segs {
            Some((pos.0, pos.1 + 1))
        } else if pos.0 + 1 < buffer.len_lines() {
            Some((pos.0 + 1, 0))
        } else {
            None
        }
    }

    fn prev_pos(buffer: &TextBuffer, pos: (usize, usize), width: u16) -> Option<(usize, usize)> {
        if pos.1 > 0 {
            Some((pos.0, pos.1 - 1))
        } else if pos.0 > 0 {
            let segs = Self::segments(buffer, pos.0 - 1, width).len();
            Some((pos.0 - 1, segs.saturating_sub(1)))
        } else {
            None
        }
    }

    fn cursor_pos(buffer: &TextBuffer, width: u16) -> (usize, usize) {
        let (row, col) = buffer.cursor();
        let segs = Self::segments(buffer, row, width);
        (row, segment_for_col(&segs, col))
    }

    /// Move the viewport so the cursor's visual line is inside `height` lines.
    pub fn ensure_cursor_visible(&mut self, buffer: &TextBuffer, width: u16, height: u16) {
        self.clamp_top(buffer, width);
        let height = usize::from(height.max(1));
        let cursor = Self::cursor_pos(buffer, width);

        if cursor < self.top {
            self.top = cursor;
            return;
        }

        let mut pos = self.top;
        let mut lines = 1usize;
        while pos != cursor {
            if lines >= height {
                break;
            }
            match Self::next_pos(buffer, pos, width) {
                Some(next) => pos = next,
                None => break,
            }
            lines += 1;
        }
        if pos == cursor {
            return;
        }

        let mut top = cursor;
        for _ in 1..height {
            match Self::prev_pos(buffer, top, width) {
                Some(prev) => top = prev,
                None => break,
            }
        }
        self.top = top;
    }

    /// Scroll the viewport by visual lines; the cursor stays where it is.
    pub fn scroll(&mut self, buffer: &TextBuffer, delta: isize) -> bool {
        let Some(area) = self.last_area else {
            return false;
        };
        self.clamp_top(buffer, area.width);
        let before = self.top;
        for _ in 0..delta.unsigned_abs() {
            let step = if delta > 0 {
                Self::next_pos(buffer, self.top, area.width)
            } else {
                Self::prev_pos(buffer, self.top, area.width)
            };
            match step {
                Some(pos) => self.top = pos,
                None => break,
            }
        }
        before != self.top
    }

    /// Document position under a screen cell of the last rendered area.
    pub fn hit_test(&self, buffer: &TextBuffer, x: u16, y: u16) -> Option<(usize, usize)> {
        let area = self.last_area?;
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let mut pos = self.top;
        for _ in 0..(y - area.y) {
            pos = Self::next_pos(buffer, pos, area.width)?;
        }

        let line = buffer.line(pos.0).unwrap_or_default();
        let segs = wrap_line(&line, area.width);
        let (start, end) = segs.get(pos.1).copied()?;
        let target = usize::from(x - area.x);
        let mut col = start;
        let mut used = 0usize;
        for g in line.graphemes(true).skip(start).take(end - start) {
            let w = grapheme_width(g);
            if used + w > target {
                break;
            }
            used += w;
            col += 1;
        }
        // The last grapheme of a wrapped segment belongs to the next line's start.
        if col == end && pos.1 + 1 < segs.len() {
            col = end.saturating_sub(1).max(start);
        }
        Some((pos.0, col))
    }

    /// Draw the visible segments; returns the cursor's screen cell if visible.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        buffer: &TextBuffer,
        style: Style,
    ) -> Option<(u16, u16)> {
        self.last_area = Some(area);
        if area.width == 0 || area.height == 0 {
            return None;
        }

        if self.last_cursor != Some(buffer.cursor()) {
            self.ensure_cursor_visible(buffer, area.width, area.height);
            self.last_cursor = Some(buffer.cursor());
        } else {
            self.clamp_top(buffer, area.width);
        }

        let (cursor_row, cursor_col) = buffer.cursor();
        let mut cursor_cell = None;
        let mut lines: Vec<Line> = Vec::with_capacity(usize::from(area.height));
        let mut row = self.top.0;
        let mut first_seg = self.top.1;

        'rows: while row < buffer.len_lines() {
            let line = buffer.line(row).unwrap_or_default();
            let graphemes: Vec<&str> = line.graphemes(true).collect();
            let segs = wrap_line(&line, area.width);
            let cursor_seg = (row == cursor_row).then(|| segment_for_col(&segs, cursor_col));

            for (seg_idx, &(start, end)) in segs.iter().enumerate().skip(first_seg) {
                if lines.len() >= usize::from(area.height) {
                    break 'rows;
                }
                let mut text = String::new();
                for g in &graphemes[start..end] {
                    push_display(&mut text, g);
                }
                if cursor_seg == Some(seg_idx) {
                    let x: usize = graphemes[start..cursor_col.min(end)]
                        .iter()
                        .map(|g| grapheme_width(g))
                        .sum();
                    let x = x.min(usize::from(area.width.saturating_sub(1)));
                    cursor_cell = Some((area.x + x as u16, area.y + lines.len() as u16));
                }
                lines.push(Line::raw(text));
            }

            first_seg = 0;
            row += 1;
        }

        frame.render_widget(Paragraph::new(lines).style(style), area);
        cursor_cell
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/text_view.rs"]
mod tests;
