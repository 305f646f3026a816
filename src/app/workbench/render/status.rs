use super::super::tick::{status_level, StatusLevel};
use super::super::Workbench;
use crate::app::theme::ThemeElement;
use crate::kernel::FocusTarget;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

impl Workbench {
    fn focus_label(&self) -> &'static str {
        match self.store.state().ui.focus {
            FocusTarget::Editor => "Editor",
            FocusTarget::Terminal => "Terminal",
        }
    }

    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let state = self.store.state();
        let file_name = state
            .current_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[no file]".to_string());
        let (row, col) = state.buffer.cursor();
        let left = format!(
            " {} | Ln {}, Col {} | {}",
            file_name,
            row + 1,
            col + 1,
            self.focus_label()
        );

        let base = self.theme.style(ThemeElement::StatusBar);
        let mut spans = vec![Span::styled(left.clone(), base)];

        if let Some(message) = self.last_status.as_deref() {
            let color = if status_level(message) == Some(StatusLevel::Error) {
                self.theme.error_fg
            } else {
                self.theme.warning_fg
            };
            let used = left.width() + 3;
            let room = usize::from(area.width).saturating_sub(used);
            if room > 0 {
                let message = truncate_to_width(message.trim(), room);
                spans.push(Span::styled(" | ", Style::default().fg(self.theme.muted_fg)));
                spans.push(Span::styled(message, Style::default().fg(color)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
