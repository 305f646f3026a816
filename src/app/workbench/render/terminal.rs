use super::super::Workbench;
use crate::app::theme::ThemeElement;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[cfg(not(feature = "terminal"))]
const TERMINAL_DISABLED: &str = "Terminal disabled";
#[cfg(feature = "terminal")]
const PROCESS_EXITED: &str = "[process exited]";

impl Workbench {
    /// Draw the terminal pane; returns the shell cursor cell when visible.
    pub(super) fn render_terminal(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let style = self.theme.style(ThemeElement::Terminal);
        let muted = style.fg(self.theme.muted_fg).add_modifier(Modifier::ITALIC);
        let session = self.store.state().terminal.as_ref()?;

        #[cfg(not(feature = "terminal"))]
        {
            let _ = session;
            frame.render_widget(
                Paragraph::new(Line::styled(TERMINAL_DISABLED, muted)).style(style),
                area,
            );
            None
        }

        #[cfg(feature = "terminal")]
        {
            let mut lines: Vec<Line> = session
                .visible_rows(area.width, area.height)
                .into_iter()
                .map(Line::raw)
                .collect();
            if session.exited {
                let last = lines.len().saturating_sub(1);
                let trailing_blank = lines.get(last).is_some_and(|l| l.width() == 0);
                let marker = Line::styled(PROCESS_EXITED, muted);
                if trailing_blank {
                    lines[last] = marker;
                } else {
                    if !lines.is_empty() {
                        lines.remove(0);
                    }
                    lines.push(marker);
                }
            }
            frame.render_widget(Paragraph::new(lines).style(style), area);

            let (col, row) = session.cursor_position()?;
            let x = area.x.saturating_add(col).min(area.right().saturating_sub(1));
            let y = area.y.saturating_add(row).min(area.bottom().saturating_sub(1));
            Some((x, y))
        }
    }
}
