use super::interaction::{
    dialog_action_for_key, dialog_action_for_paste, editor_action_for_key,
    terminal_bytes_for_key_event, terminal_bytes_for_paste,
};
use super::render::layout::split_percent_for_row;
use super::util::rect_contains;
use super::{DialogButton, ToolbarButton, Workbench, WHEEL_STEP};
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::kernel::{Action as KernelAction, EditorAction, FocusTarget};
use crate::tui::view::EventResult;

/// What a key chord does before it reaches the focused pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shortcut {
    Toolbar(ToolbarButton),
    CycleFocus,
    Quit,
}

/// Function keys work regardless of focus.
fn global_shortcut(key: Key) -> Option<Shortcut> {
    if key.modifiers != KeyModifiers::NONE {
        return None;
    }
    let shortcut = match key.code {
        KeyCode::F(2) => Shortcut::Toolbar(ToolbarButton::Open),
        KeyCode::F(3) => Shortcut::Toolbar(ToolbarButton::Save),
        KeyCode::F(4) => Shortcut::Toolbar(ToolbarButton::Term),
        KeyCode::F(5) => Shortcut::Toolbar(ToolbarButton::Reload),
        KeyCode::F(6) => Shortcut::CycleFocus,
        KeyCode::F(10) => Shortcut::Quit,
        _ => return None,
    };
    Some(shortcut)
}

/// Ctrl chords; with terminal focus these go to the shell instead.
fn editor_shortcut(key: Key) -> Option<Shortcut> {
    if key.modifiers != KeyModifiers::CONTROL {
        return None;
    }
    let shortcut = match key.code {
        KeyCode::Char('o') => Shortcut::Toolbar(ToolbarButton::Open),
        KeyCode::Char('s') => Shortcut::Toolbar(ToolbarButton::Save),
        KeyCode::Char('t') => Shortcut::Toolbar(ToolbarButton::Term),
        KeyCode::Char('r') => Shortcut::Toolbar(ToolbarButton::Reload),
        KeyCode::Char('q') => Shortcut::Quit,
        _ => return None,
    };
    Some(shortcut)
}

fn changed(state_changed: bool) -> EventResult {
    if state_changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let result = match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse(mouse_event),
        InputEvent::Resize(_, _) => EventResult::Consumed,
    };

    if workbench.should_quit() {
        EventResult::Quit
    } else {
        result
    }
}

impl Workbench {
    fn run_shortcut(&mut self, shortcut: Shortcut) -> EventResult {
        match shortcut {
            Shortcut::Toolbar(button) => {
                let _ = self.activate_toolbar_button(button);
                EventResult::Consumed
            }
            Shortcut::CycleFocus => changed(self.dispatch_kernel(KernelAction::CycleFocus)),
            Shortcut::Quit => {
                let _ = self.dispatch_kernel(KernelAction::Quit);
                EventResult::Quit
            }
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) -> EventResult {
        if let Some(dialog) = self.store.state().ui.dialog.as_ref() {
            return match dialog_action_for_key(dialog, event) {
                Some(action) => {
                    let _ = self.dispatch_kernel(action);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            };
        }

        let key = Key::from(event);
        if let Some(shortcut) = global_shortcut(key) {
            return self.run_shortcut(shortcut);
        }

        match self.focus() {
            FocusTarget::Editor => {
                if let Some(shortcut) = editor_shortcut(key) {
                    return self.run_shortcut(shortcut);
                }
                match editor_action_for_key(event, self.text_view.page_rows()) {
                    Some(action) => changed(self.dispatch_kernel(KernelAction::Editor(action))),
                    None => EventResult::Ignored,
                }
            }
            FocusTarget::Terminal => match terminal_bytes_for_key_event(event) {
                Some(bytes) => {
                    let _ = self.dispatch_kernel(KernelAction::TerminalInput(bytes));
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
        }
    }

    fn handle_paste(&mut self, text: &str) -> EventResult {
        if let Some(dialog) = self.store.state().ui.dialog.as_ref() {
            return match dialog_action_for_paste(dialog, text) {
                Some(action) => changed(self.dispatch_kernel(action)),
                None => EventResult::Ignored,
            };
        }

        match self.focus() {
            FocusTarget::Editor => changed(
                self.dispatch_kernel(KernelAction::Editor(EditorAction::InsertText(
                    text.to_string(),
                ))),
            ),
            FocusTarget::Terminal => {
                let _ = self.dispatch_kernel(KernelAction::TerminalInput(
                    terminal_bytes_for_paste(text),
                ));
                EventResult::Consumed
            }
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        if self.store.state().ui.dialog.is_some() {
            return self.handle_dialog_mouse(event);
        }
        let Some(layout) = self.last_layout.clone() else {
            return EventResult::Ignored;
        };
        let (x, y) = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(button) = layout.button_at(x, y) {
                    let _ = self.activate_toolbar_button(button);
                    return EventResult::Consumed;
                }
                if layout.separator.is_some_and(|rect| rect_contains(rect, x, y)) {
                    self.split_dragging = true;
                    return EventResult::Consumed;
                }
                if rect_contains(layout.editor, x, y) {
                    let mut state_changed =
                        self.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Editor));
                    if let Some((row, col)) =
                        self.text_view.hit_test(&self.store.state().buffer, x, y)
                    {
                        state_changed |= self.dispatch_kernel(KernelAction::Editor(
                            EditorAction::SetCursor { row, col },
                        ));
                    }
                    return changed(state_changed);
                }
                if layout.terminal.is_some_and(|rect| rect_contains(rect, x, y)) {
                    return changed(
                        self.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Terminal)),
                    );
                }
                EventResult::Ignored
            }
            MouseEventKind::Drag(MouseButton::Left) if self.split_dragging => {
                let percent = split_percent_for_row(layout.body(), y);
                changed(self.dispatch_kernel(KernelAction::SetSplitPercent(percent)))
            }
            MouseEventKind::Up(MouseButton::Left) if self.split_dragging => {
                self.split_dragging = false;
                EventResult::Consumed
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let down = matches!(event.kind, MouseEventKind::ScrollDown);
                if rect_contains(layout.editor, x, y) {
                    let delta = if down { WHEEL_STEP } else { -WHEEL_STEP };
                    return changed(self.text_view.scroll(&self.store.state().buffer, delta));
                }
                if layout.terminal.is_some_and(|rect| rect_contains(rect, x, y)) {
                    // Positive scrolls back into history.
                    let delta = if down { -WHEEL_STEP } else { WHEEL_STEP };
                    return changed(self.dispatch_kernel(KernelAction::TerminalScroll(delta)));
                }
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_dialog_mouse(&mut self, event: &MouseEvent) -> EventResult {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return EventResult::Ignored;
        }
        let hit = self
            .last_dialog_buttons
            .iter()
            .find(|(_, rect)| rect_contains(*rect, event.column, event.row))
            .map(|(button, _)| *button);

        let action = match hit {
            Some(DialogButton::Cancel) => KernelAction::DialogCancel,
            Some(DialogButton::Open) | Some(DialogButton::Ok) => KernelAction::DialogAccept,
            None => return EventResult::Ignored,
        };
        let _ = self.dispatch_kernel(action);
        EventResult::Consumed
    }
}
