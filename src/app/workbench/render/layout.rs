use ratatui::layout::Rect;

use super::super::{STATUS_HEIGHT, TOOLBAR_HEIGHT};
use crate::kernel::services::ports::clamp_split_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Open,
    Save,
    Term,
    Reload,
}

impl ToolbarButton {
    pub const ALL: [ToolbarButton; 4] = [
        ToolbarButton::Open,
        ToolbarButton::Save,
        ToolbarButton::Term,
        ToolbarButton::Reload,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolbarButton::Open => "Open",
            ToolbarButton::Save => "Save",
            ToolbarButton::Term => "Term",
            ToolbarButton::Reload => "Reload",
        }
    }
}

/// Screen geometry of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbenchLayout {
    pub toolbar: Rect,
    pub buttons: Vec<(ToolbarButton, Rect)>,
    pub editor: Rect,
    pub separator: Option<Rect>,
    pub terminal: Option<Rect>,
    pub status: Rect,
}

impl WorkbenchLayout {
    pub fn button_at(&self, x: u16, y: u16) -> Option<ToolbarButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| super::super::util::rect_contains(*rect, x, y))
            .map(|(button, _)| *button)
    }

    /// Rows shared by the editor, the separator and the terminal.
    pub fn body(&self) -> Rect {
        let bottom = self
            .terminal
            .map(|t| t.bottom())
            .unwrap_or(self.editor.bottom());
        Rect::new(
            self.editor.x,
            self.editor.y,
            self.editor.width,
            bottom.saturating_sub(self.editor.y),
        )
    }
}

/// Toolbar on top, status bar at the bottom. The body holds the editor and,
/// when present and tall enough, a separator row plus the terminal pane.
pub fn compute_layout(area: Rect, split_percent: u16, terminal_present: bool) -> WorkbenchLayout {
    let toolbar_h = TOOLBAR_HEIGHT.min(area.height);
    let status_h = STATUS_HEIGHT.min(area.height.saturating_sub(toolbar_h));
    let toolbar = Rect::new(area.x, area.y, area.width, toolbar_h);
    let status = Rect::new(
        area.x,
        area.bottom().saturating_sub(status_h),
        area.width,
        status_h,
    );
    let body = Rect::new(
        area.x,
        area.y + toolbar_h,
        area.width,
        area.height.saturating_sub(toolbar_h + status_h),
    );

    let mut buttons = Vec::with_capacity(ToolbarButton::ALL.len());
    let mut x = toolbar.x.saturating_add(1);
    if toolbar_h > 0 {
        for button in ToolbarButton::ALL {
            let width = button.label().len() as u16 + 2;
            if x.saturating_add(width) > toolbar.right() {
                break;
            }
            buttons.push((button, Rect::new(x, toolbar.y, width, 1)));
            x = x.saturating_add(width + 1);
        }
    }

    let (editor, separator, terminal) = if terminal_present && body.height >= 3 {
        let split = clamp_split_percent(split_percent);
        let usable = body.height - 1;
        let editor_h = ((u32::from(usable) * u32::from(split) + 50) / 100) as u16;
        let editor_h = editor_h.clamp(1, usable - 1);
        let editor = Rect::new(body.x, body.y, body.width, editor_h);
        let separator = Rect::new(body.x, body.y + editor_h, body.width, 1);
        let terminal = Rect::new(
            body.x,
            separator.bottom(),
            body.width,
            body.bottom() - separator.bottom(),
        );
        (editor, Some(separator), Some(terminal))
    } else {
        (body, None, None)
    };

    WorkbenchLayout {
        toolbar,
        buttons,
        editor,
        separator,
        terminal,
        status,
    }
}

/// Split percent that puts the separator on screen row `row`.
pub(in crate::app::workbench) fn split_percent_for_row(body: Rect, row: u16) -> u16 {
    let usable = body.height.saturating_sub(1).max(1);
    let offset = row.saturating_sub(body.y).min(usable);
    let usable = u32::from(usable);
    clamp_split_percent(((u32::from(offset) * 100 + usable / 2) / usable) as u16)
}
