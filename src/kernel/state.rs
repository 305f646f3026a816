use std::path::PathBuf;

use crate::kernel::services::ports::{clamp_split_percent, Settings};
use crate::models::TextBuffer;

use super::terminal::TerminalSession;

pub const STARTUP_PLACEHOLDER: &str = "Failed to load file data";
pub const OPEN_ERROR_PLACEHOLDER: &str = "Error reading file.";
pub const NO_FILE_TO_SAVE: &str = "No file is currently open to save.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Editor,
    Terminal,
}

/// Path field of the "Open File" prompt. `cursor` is a byte index into `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenPromptState {
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
}

impl OpenPromptState {
    pub fn with_value(value: String) -> Self {
        let cursor = value.len();
        Self {
            value,
            cursor,
            error: None,
        }
    }
}

/// Modal dialogs. While one is open it receives all input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    OpenFile(OpenPromptState),
    Warning { message: String },
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub dialog: Option<DialogState>,
    /// Editor share of the body while the terminal pane is present.
    pub split_percent: u16,
    pub should_quit: bool,
}

#[derive(Debug)]
pub struct AppState {
    /// Last path opened or saved successfully; Save and Reload act on it.
    pub current_file: Option<PathBuf>,
    pub buffer: TextBuffer,
    /// At most one terminal pane per window.
    pub terminal: Option<TerminalSession>,
    pub scrollback_lines: usize,
    pub ui: UiState,
}

impl AppState {
    pub fn new(settings: &Settings, initial_file: Option<PathBuf>) -> Self {
        Self {
            current_file: initial_file,
            buffer: TextBuffer::new(),
            terminal: None,
            scrollback_lines: settings.terminal.scrollback_lines,
            ui: UiState {
                focus: FocusTarget::Editor,
                dialog: None,
                split_percent: clamp_split_percent(settings.terminal.split_percent),
                should_quit: false,
            },
        }
    }

    pub fn terminal_present(&self) -> bool {
        self.terminal.is_some()
    }
}
