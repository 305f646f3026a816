//! Screen state of the embedded terminal pane.
//!
//! The pane is either absent or holds exactly one `TerminalSession`; the shell
//! process behind it lives in the workbench.

pub struct TerminalParser {
    #[cfg(feature = "terminal")]
    inner: vt100::Parser,
}

impl TerminalParser {
    pub fn new(rows: u16, cols: u16, scrollback_len: usize) -> Self {
        #[cfg(feature = "terminal")]
        {
            return Self {
                inner: vt100::Parser::new(rows, cols, scrollback_len),
            };
        }

        #[cfg(not(feature = "terminal"))]
        {
            let _ = (rows, cols, scrollback_len);
            Self {}
        }
    }

    pub fn process(&mut self, bytes: &[u8]) {
        #[cfg(feature = "terminal")]
        {
            self.inner.process(bytes);
        }

        #[cfg(not(feature = "terminal"))]
        {
            let _ = bytes;
        }
    }

    #[cfg(feature = "terminal")]
    pub fn screen(&self) -> &vt100::Screen {
        self.inner.screen()
    }

    #[cfg(feature = "terminal")]
    pub fn screen_mut(&mut self) -> &mut vt100::Screen {
        self.inner.screen_mut()
    }
}

impl std::fmt::Debug for TerminalParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalParser").finish()
    }
}

#[derive(Debug)]
pub struct TerminalSession {
    pub cols: u16,
    pub rows: u16,
    pub scroll_offset: usize,
    pub parser: TerminalParser,
    pub dirty: bool,
    pub exited: bool,
}

impl TerminalSession {
    pub fn new(cols: u16, rows: u16, scrollback_lines: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scroll_offset: 0,
            parser: TerminalParser::new(rows, cols, scrollback_lines),
            dirty: true,
            exited: false,
        }
    }

    pub fn process_output(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }

        self.parser.process(bytes);

        #[cfg(feature = "terminal")]
        {
            self.scroll_offset = self.parser.screen().scrollback();
        }

        self.dirty = true;
        true
    }

    pub fn mark_exited(&mut self) -> bool {
        if self.exited {
            return false;
        }
        self.exited = true;
        self.dirty = true;
        true
    }

    pub fn resize(&mut self, cols: u16, rows: u16) -> bool {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if self.cols == cols && self.rows == rows {
            return false;
        }

        self.cols = cols;
        self.rows = rows;

        #[cfg(feature = "terminal")]
        {
            self.parser.screen_mut().set_size(rows, cols);
            self.parser.screen_mut().set_scrollback(self.scroll_offset);
            self.scroll_offset = self.parser.screen().scrollback();
        }

        self.dirty = true;
        true
    }

    /// Positive `delta` scrolls back into history.
    pub fn scroll(&mut self, delta: isize) -> bool {
        if delta == 0 {
            return false;
        }

        #[cfg(feature = "terminal")]
        {
            let current = self.parser.screen().scrollback();
            let next = if delta > 0 {
                current.saturating_add(delta as usize)
            } else {
                current.saturating_sub(delta.unsigned_abs())
            };
            self.parser.screen_mut().set_scrollback(next);
            let actual = self.parser.screen().scrollback();
            if actual == self.scroll_offset {
                return false;
            }
            self.scroll_offset = actual;
        }

        self.dirty = true;
        true
    }

    #[cfg(feature = "terminal")]
    pub fn visible_rows(&self, width: u16, height: u16) -> Vec<String> {
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let mut rows: Vec<String> = self
            .parser
            .screen()
            .rows(0, width)
            .take(height as usize)
            .collect();

        while rows.len() < height as usize {
            rows.push(String::new());
        }

        rows
    }

    /// Cursor cell relative to the pane, hidden while scrolled back.
    pub fn cursor_position(&self) -> Option<(u16, u16)> {
        if self.scroll_offset > 0 || self.exited {
            return None;
        }

        #[cfg(feature = "terminal")]
        {
            let screen = self.parser.screen();
            if screen.hide_cursor() {
                return None;
            }
            let (row, col) = screen.cursor_position();
            Some((col, row))
        }

        #[cfg(not(feature = "terminal"))]
        {
            None
        }
    }
}
