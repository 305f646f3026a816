use std::path::PathBuf;

use crate::kernel::state::FocusTarget;

/// Why a file is being loaded; decides what a failure does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPurpose {
    Startup,
    Open,
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    InsertChar(char),
    InsertText(String),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    PageUp { rows: usize },
    PageDown { rows: usize },
    SetCursor { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Startup,
    Quit,
    Editor(EditorAction),

    // toolbar
    OpenPrompt,
    Save,
    Reload,
    ToggleTerminal { cols: u16, rows: u16 },

    // dialogs
    DialogAccept,
    DialogCancel,
    OpenPromptInsert(String),
    OpenPromptBackspace,
    OpenPromptCursorLeft,
    OpenPromptCursorRight,

    // effect results
    FileLoaded {
        path: PathBuf,
        purpose: LoadPurpose,
        content: String,
    },
    FileLoadFailed {
        path: PathBuf,
        purpose: LoadPurpose,
        error: String,
    },
    FileSaved { path: PathBuf },
    FileSaveFailed { path: PathBuf, error: String },

    // layout / focus
    SetFocus(FocusTarget),
    CycleFocus,
    SetSplitPercent(u16),

    // terminal pane
    TerminalInput(Vec<u8>),
    TerminalOutput(Vec<u8>),
    TerminalExited,
    TerminalResize { cols: u16, rows: u16 },
    TerminalScroll(isize),
}
