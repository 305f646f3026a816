use super::super::util::centered_rect;
use super::super::{DialogButton, Workbench};
use crate::app::theme::ThemeElement;
use crate::kernel::{DialogState, OpenPromptState};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DIALOG_WIDTH_PERCENT: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;

/// Draw the open dialog, if any. Returns the text cursor for the Open prompt.
pub(super) fn render_dialog(
    workbench: &mut Workbench,
    frame: &mut Frame,
    area: Rect,
) -> Option<(u16, u16)> {
    let dialog = workbench.store.state().ui.dialog.clone()?;
    let rect = centered_rect(DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT, area);
    if rect.width < 4 || rect.height < 3 {
        return None;
    }

    let style = workbench.theme.style(ThemeElement::Dialog);
    let title = match &dialog {
        DialogState::OpenFile(_) => " Open File ",
        DialogState::Warning { .. } => " Warning ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style.fg(workbench.theme.focus_border))
        .style(style);
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    match &dialog {
        DialogState::OpenFile(prompt) => render_open_prompt(workbench, frame, inner, prompt, style),
        DialogState::Warning { message } => {
            let body = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
            frame.render_widget(
                Paragraph::new(message.as_str())
                    .style(style.fg(workbench.theme.warning_fg))
                    .wrap(Wrap { trim: true }),
                body,
            );
            render_buttons(workbench, frame, inner, &[(DialogButton::Ok, "[ OK ]")], style);
            None
        }
    }
}

fn render_open_prompt(
    workbench: &mut Workbench,
    frame: &mut Frame,
    inner: Rect,
    prompt: &OpenPromptState,
    style: Style,
) -> Option<(u16, u16)> {
    let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);

    frame.render_widget(Paragraph::new("Path:").style(style), row(0));

    let mut cursor = None;
    if inner.height > 1 {
        let (visible, cursor_x) = scroll_to_cursor(&prompt.value, prompt.cursor, inner.width);
        frame.render_widget(
            Paragraph::new(visible).style(style.add_modifier(Modifier::UNDERLINED)),
            row(1),
        );
        cursor = Some((inner.x + cursor_x, inner.y + 1));
    }

    if inner.height > 3 {
        if let Some(error) = prompt.error.as_deref() {
            frame.render_widget(
                Paragraph::new(Line::styled(error, style.fg(workbench.theme.error_fg))),
                row(2),
            );
        }
    }

    render_buttons(
        workbench,
        frame,
        inner,
        &[
            (DialogButton::Cancel, "[ Cancel ]"),
            (DialogButton::Open, "[ Open ]"),
        ],
        style,
    );
    cursor
}

/// Right-aligned buttons on the last inner row.
fn render_buttons(
    workbench: &mut Workbench,
    frame: &mut Frame,
    inner: Rect,
    buttons: &[(DialogButton, &str)],
    style: Style,
) {
    let y = inner.bottom().saturating_sub(1);
    let mut x = inner.right();
    let button_style = workbench.theme.style(ThemeElement::Button);

    for (button, label) in buttons.iter().rev() {
        let width = label.width() as u16;
        if x < inner.x + width {
            break;
        }
        x -= width;
        let rect = Rect::new(x, y, width, 1);
        frame.render_widget(Paragraph::new(*label).style(style.patch(button_style)), rect);
        workbench.last_dialog_buttons.push((*button, rect));
        x = x.saturating_sub(1);
    }
}

/// Visible tail of `value` so the cursor fits in `width` cells, plus the
/// cursor's x offset within it.
fn scroll_to_cursor(value: &str, cursor: usize, width: u16) -> (String, u16) {
    let width = usize::from(width.max(1));
    let cursor = cursor.min(value.len());
    let before = value.get(..cursor).unwrap_or(value);
    let scroll = before.width().saturating_sub(width - 1);

    let mut skipped = 0usize;
    let mut visible = String::new();
    for ch in value.chars() {
        let w = ch.width().unwrap_or(0);
        if skipped < scroll {
            skipped += w;
            continue;
        }
        visible.push(ch);
    }
    let cursor_x = before.width().saturating_sub(skipped);
    (visible, cursor_x.min(width - 1) as u16)
}
