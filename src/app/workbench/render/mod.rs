use super::Workbench;
use crate::app::theme::ThemeElement;
use crate::kernel::{Action as KernelAction, FocusTarget};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

mod dialogs;
pub(super) mod layout;
mod status;
mod terminal;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_render_area = Some(area);
    let layout = layout::compute_layout(
        area,
        workbench.store.state().ui.split_percent,
        workbench.store.state().terminal_present(),
    );

    frame.render_widget(
        Block::default().style(workbench.theme.style(ThemeElement::Window)),
        area,
    );

    workbench.render_toolbar(frame, &layout);

    let editor_cursor = workbench.text_view.render(
        frame,
        layout.editor,
        &workbench.store.state().buffer,
        workbench.theme.style(ThemeElement::TextView),
    );

    if let Some(separator) = layout.separator {
        workbench.render_separator(frame, separator);
    }

    let mut terminal_cursor = None;
    if let Some(terminal_area) = layout.terminal {
        terminal_cursor = workbench.render_terminal(frame, terminal_area);
    }

    workbench.render_status(frame, layout.status);

    workbench.last_dialog_buttons.clear();
    let dialog_cursor = dialogs::render_dialog(workbench, frame, area);

    workbench.last_cursor = if workbench.store.state().ui.dialog.is_some() {
        dialog_cursor
    } else {
        match workbench.focus() {
            FocusTarget::Editor => editor_cursor,
            FocusTarget::Terminal => terminal_cursor,
        }
    };

    let terminal_area = layout.terminal;
    workbench.last_layout = Some(layout);
    workbench.sync_terminal_size(terminal_area);
}

impl Workbench {
    fn render_toolbar(&self, frame: &mut Frame, layout: &layout::WorkbenchLayout) {
        if layout.toolbar.height == 0 {
            return;
        }
        frame.render_widget(
            Block::default().style(self.theme.style(ThemeElement::Toolbar)),
            layout.toolbar,
        );

        let terminal_on = self.store.state().terminal_present();
        for (button, rect) in &layout.buttons {
            let element = if *button == layout::ToolbarButton::Term && terminal_on {
                ThemeElement::ButtonActive
            } else {
                ThemeElement::Button
            };
            let label = format!(" {} ", button.label());
            frame.render_widget(
                Paragraph::new(label).style(self.theme.style(element)),
                *rect,
            );
        }
    }

    fn render_separator(&self, frame: &mut Frame, area: Rect) {
        let mut style = self.theme.style(ThemeElement::Separator);
        if self.split_dragging {
            style = style.fg(self.theme.focus_border);
        }

        let focus_label = match self.focus() {
            FocusTarget::Editor => " ▲ editor ",
            FocusTarget::Terminal => " ▼ terminal ",
        };
        let fill = usize::from(area.width).saturating_sub(focus_label.chars().count() + 2);
        let line = Line::from(vec![
            Span::styled("──", style),
            Span::styled(focus_label, Style::default().fg(self.theme.focus_border)),
            Span::styled("─".repeat(fill), style),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }

    /// Keep the session and the pty in step with the pane's size.
    fn sync_terminal_size(&mut self, area: Option<Rect>) {
        let Some(area) = area else {
            return;
        };
        let Some(session) = self.store.state().terminal.as_ref() else {
            return;
        };
        let (cols, rows) = (area.width.max(1), area.height.max(1));
        if session.cols != cols || session.rows != rows {
            let _ = self.dispatch_kernel(KernelAction::TerminalResize { cols, rows });
        }
    }
}
