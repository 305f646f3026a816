use std::path::{Path, PathBuf};

use super::state::{NO_FILE_TO_SAVE, OPEN_ERROR_PLACEHOLDER, STARTUP_PLACEHOLDER};
use super::{
    Action, AppState, DialogState, EditorAction, Effect, FocusTarget, LoadPurpose,
    OpenPromptState, TerminalSession,
};
use crate::kernel::services::ports::clamp_split_percent;

mod open_prompt;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect, state_changed: bool) -> Self {
        Self {
            effects: vec![effect],
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Startup => match self.state.current_file.clone() {
                Some(path) => DispatchResult::effect(
                    Effect::LoadFile {
                        path,
                        purpose: LoadPurpose::Startup,
                    },
                    false,
                ),
                None => DispatchResult::changed(false),
            },
            Action::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
            Action::Editor(editor_action) => {
                DispatchResult::changed(self.reduce_editor_action(editor_action))
            }
            Action::OpenPrompt => {
                if self.state.ui.dialog.is_some() {
                    return DispatchResult::changed(false);
                }
                let initial = self
                    .state
                    .current_file
                    .as_deref()
                    .map(prompt_start_dir)
                    .unwrap_or_default();
                self.state.ui.dialog = Some(DialogState::OpenFile(OpenPromptState::with_value(
                    initial,
                )));
                DispatchResult::changed(true)
            }
            Action::Save => {
                if self.state.ui.dialog.is_some() {
                    return DispatchResult::changed(false);
                }
                match self.state.current_file.clone() {
                    Some(path) => DispatchResult::effect(
                        Effect::WriteFile {
                            path,
                            text: self.state.buffer.text(),
                        },
                        false,
                    ),
                    None => {
                        self.state.ui.dialog = Some(DialogState::Warning {
                            message: NO_FILE_TO_SAVE.to_string(),
                        });
                        DispatchResult::changed(true)
                    }
                }
            }
            Action::Reload => {
                if self.state.ui.dialog.is_some() {
                    return DispatchResult::changed(false);
                }
                match self.state.current_file.clone() {
                    Some(path) => DispatchResult::effect(
                        Effect::LoadFile {
                            path,
                            purpose: LoadPurpose::Reload,
                        },
                        false,
                    ),
                    None => {
                        tracing::warn!("No file is open to reload.");
                        DispatchResult::changed(false)
                    }
                }
            }
            Action::ToggleTerminal { cols, rows } => {
                if self.state.ui.dialog.is_some() {
                    return DispatchResult::changed(false);
                }
                if self.state.terminal.take().is_some() {
                    self.state.ui.focus = FocusTarget::Editor;
                    return DispatchResult::effect(Effect::CloseShell, true);
                }

                let session = TerminalSession::new(cols, rows, self.state.scrollback_lines);
                let (cols, rows) = (session.cols, session.rows);
                self.state.terminal = Some(session);
                self.state.ui.focus = FocusTarget::Terminal;
                DispatchResult::effect(Effect::SpawnShell { cols, rows }, true)
            }
            Action::DialogAccept => self.accept_dialog(),
            Action::DialogCancel => DispatchResult::changed(self.state.ui.dialog.take().is_some()),
            Action::OpenPromptInsert(_)
            | Action::OpenPromptBackspace
            | Action::OpenPromptCursorLeft
            | Action::OpenPromptCursorRight => {
                DispatchResult::changed(self.reduce_open_prompt_action(action))
            }
            Action::FileLoaded {
                path,
                purpose,
                content,
            } => {
                match purpose {
                    LoadPurpose::Startup => self.state.buffer.set_text(&content),
                    LoadPurpose::Open => {
                        self.state.buffer.set_text(&content);
                        tracing::info!(path = %path.display(), "file opened");
                        self.state.current_file = Some(path);
                    }
                    LoadPurpose::Reload => {
                        let (row, col) = self.state.buffer.cursor();
                        self.state.buffer.set_text(&content);
                        self.state.buffer.set_cursor(row, col);
                        tracing::info!(path = %path.display(), "file reloaded");
                    }
                }
                DispatchResult::changed(true)
            }
            Action::FileLoadFailed {
                path,
                purpose,
                error,
            } => match purpose {
                LoadPurpose::Startup => {
                    tracing::warn!(path = %path.display(), %error, "Failed to read file");
                    self.state.buffer.set_text(STARTUP_PLACEHOLDER);
                    DispatchResult::changed(true)
                }
                LoadPurpose::Open => {
                    tracing::warn!(path = %path.display(), %error, "Failed to read file");
                    self.state.buffer.set_text(OPEN_ERROR_PLACEHOLDER);
                    DispatchResult::changed(true)
                }
                LoadPurpose::Reload => {
                    tracing::error!(path = %path.display(), %error, "Could not read file");
                    DispatchResult::changed(false)
                }
            },
            Action::FileSaved { path } => {
                tracing::info!(path = %path.display(), "file saved");
                let changed = self.state.current_file.as_ref() != Some(&path);
                self.state.current_file = Some(path);
                DispatchResult::changed(changed)
            }
            Action::FileSaveFailed { path, error } => {
                tracing::warn!(path = %path.display(), %error, "Failed to open file for writing");
                DispatchResult::changed(false)
            }
            Action::SetFocus(target) => DispatchResult::changed(self.set_focus(target)),
            Action::CycleFocus => {
                let next = match self.state.ui.focus {
                    FocusTarget::Editor => FocusTarget::Terminal,
                    FocusTarget::Terminal => FocusTarget::Editor,
                };
                DispatchResult::changed(self.set_focus(next))
            }
            Action::SetSplitPercent(percent) => {
                let percent = clamp_split_percent(percent);
                let prev = self.state.ui.split_percent;
                self.state.ui.split_percent = percent;
                DispatchResult::changed(prev != percent)
            }
            Action::TerminalInput(bytes) => match self.state.terminal.as_ref() {
                Some(session) if !session.exited && !bytes.is_empty() => {
                    DispatchResult::effect(Effect::WriteShell(bytes), false)
                }
                _ => DispatchResult::changed(false),
            },
            Action::TerminalOutput(bytes) => match self.state.terminal.as_mut() {
                Some(session) => DispatchResult::changed(session.process_output(&bytes)),
                None => DispatchResult::changed(false),
            },
            Action::TerminalExited => match self.state.terminal.as_mut() {
                Some(session) => DispatchResult::changed(session.mark_exited()),
                None => DispatchResult::changed(false),
            },
            Action::TerminalResize { cols, rows } => match self.state.terminal.as_mut() {
                Some(session) => {
                    if !session.resize(cols, rows) {
                        return DispatchResult::changed(false);
                    }
                    let (cols, rows) = (session.cols, session.rows);
                    DispatchResult::effect(Effect::ResizeShell { cols, rows }, true)
                }
                None => DispatchResult::changed(false),
            },
            Action::TerminalScroll(delta) => match self.state.terminal.as_mut() {
                Some(session) => DispatchResult::changed(session.scroll(delta)),
                None => DispatchResult::changed(false),
            },
        }
    }

    fn accept_dialog(&mut self) -> DispatchResult {
        match self.state.ui.dialog.take() {
            None => DispatchResult::changed(false),
            Some(DialogState::Warning { .. }) => DispatchResult::changed(true),
            Some(DialogState::OpenFile(mut prompt)) => {
                // Surrounding spaces are part of the file name.
                if prompt.value.trim().is_empty() {
                    let prev = prompt.error.replace("Path required".to_string());
                    let changed = prev.is_none();
                    self.state.ui.dialog = Some(DialogState::OpenFile(prompt));
                    return DispatchResult::changed(changed);
                }

                DispatchResult::effect(
                    Effect::LoadFile {
                        path: PathBuf::from(prompt.value),
                        purpose: LoadPurpose::Open,
                    },
                    true,
                )
            }
        }
    }

    fn set_focus(&mut self, target: FocusTarget) -> bool {
        if target == FocusTarget::Terminal && self.state.terminal.is_none() {
            return false;
        }
        let prev = self.state.ui.focus;
        self.state.ui.focus = target;
        prev != target
    }

    fn reduce_editor_action(&mut self, action: EditorAction) -> bool {
        let buffer = &mut self.state.buffer;
        match action {
            EditorAction::InsertChar(ch) => {
                buffer.insert_char(ch);
                true
            }
            EditorAction::InsertText(text) => {
                // Terminals deliver pasted line breaks as `\r`.
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                buffer.insert_str(&text);
                !text.is_empty()
            }
            EditorAction::Backspace => buffer.delete_backward(),
            EditorAction::Delete => buffer.delete_forward(),
            EditorAction::MoveLeft => buffer.move_left(),
            EditorAction::MoveRight => buffer.move_right(),
            EditorAction::MoveUp => buffer.move_vertical(-1),
            EditorAction::MoveDown => buffer.move_vertical(1),
            EditorAction::MoveLineStart => buffer.move_line_start(),
            EditorAction::MoveLineEnd => buffer.move_line_end(),
            EditorAction::PageUp { rows } => {
                buffer.move_vertical(-(rows.max(1).min(isize::MAX as usize) as isize))
            }
            EditorAction::PageDown { rows } => {
                buffer.move_vertical(rows.max(1).min(isize::MAX as usize) as isize)
            }
            EditorAction::SetCursor { row, col } => {
                let prev = buffer.cursor();
                buffer.set_cursor(row, col);
                prev != buffer.cursor()
            }
        }
    }
}

/// Directory of the active file, with a trailing separator, as the prompt's
/// starting text.
fn prompt_start_dir(current: &Path) -> String {
    match current.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            let mut dir = parent.display().to_string();
            if !dir.ends_with(std::path::MAIN_SEPARATOR) {
                dir.push(std::path::MAIN_SEPARATOR);
            }
            dir
        }
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
