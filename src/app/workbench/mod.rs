//! Workbench: owns the store, the views and the shell process, and routes
//! input, effects and rendering between them.

use super::stylesheet::Stylesheet;
use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{load_file, save_file, ShellProcess};
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action as KernelAction, AppState, Effect, FocusTarget, Store};
use crate::tui::view::{EventResult, View};
use crate::views::TextView;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

mod input;
mod interaction;
mod render;
mod tick;
mod util;

pub use render::layout::{compute_layout, ToolbarButton, WorkbenchLayout};

const TOOLBAR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const MAX_LOG_DRAIN_PER_TICK: usize = 256;
const MAX_SHELL_DRAIN_PER_TICK: usize = 64;
const WHEEL_STEP: isize = 3;
const FALLBACK_TERMINAL_SIZE: (u16, u16) = (80, 12);

/// Clickable button inside a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogButton {
    Cancel,
    Open,
    Ok,
}

pub struct Workbench {
    store: Store,
    theme: UiTheme,
    text_view: TextView,
    shell: Option<ShellProcess>,
    log_rx: Option<Receiver<String>>,
    last_status: Option<String>,
    last_render_area: Option<Rect>,
    last_layout: Option<WorkbenchLayout>,
    last_dialog_buttons: Vec<(DialogButton, Rect)>,
    last_cursor: Option<(u16, u16)>,
    split_dragging: bool,
}

impl Workbench {
    /// Build the workbench and load the initial file. The stylesheet is
    /// optional: a missing or broken one leaves the built-in theme.
    pub fn new(
        settings: &Settings,
        initial_file: Option<PathBuf>,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        let mut theme = UiTheme::default();
        match Stylesheet::load(Path::new(&settings.stylesheet)) {
            Ok(sheet) => {
                theme.apply_stylesheet(&sheet);
                tracing::debug!(path = settings.stylesheet.as_str(), "stylesheet applied");
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load CSS"),
        }
        theme.adapt_to_terminal_capabilities();

        Self::with_theme(settings, initial_file, log_rx, theme)
    }

    pub fn with_theme(
        settings: &Settings,
        initial_file: Option<PathBuf>,
        log_rx: Option<Receiver<String>>,
        theme: UiTheme,
    ) -> Self {
        let mut workbench = Self {
            store: Store::new(AppState::new(settings, initial_file)),
            theme,
            text_view: TextView::new(),
            shell: None,
            log_rx,
            last_status: None,
            last_render_area: None,
            last_layout: None,
            last_dialog_buttons: Vec::new(),
            last_cursor: None,
            split_dragging: false,
        };
        let _ = workbench.dispatch_kernel(KernelAction::Startup);
        workbench
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub fn shell_running(&self) -> bool {
        self.shell.is_some()
    }

    /// Newest warning or error line from the log, shown in the status bar.
    pub fn status_message(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    pub fn last_layout(&self) -> Option<&WorkbenchLayout> {
        self.last_layout.as_ref()
    }

    /// Run one action through the store, then its effects. Effects feed their
    /// results back as actions until nothing is left.
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::LoadFile { path, purpose } => {
                let action = match load_file(&path) {
                    Ok(content) => KernelAction::FileLoaded {
                        path,
                        purpose,
                        content,
                    },
                    Err(e) => KernelAction::FileLoadFailed {
                        path,
                        purpose,
                        error: e.to_string(),
                    },
                };
                let replaced = self.dispatch_kernel(action);
                if replaced {
                    self.text_view.reset();
                }
                replaced
            }
            Effect::WriteFile { path, text } => match save_file(&path, &text) {
                Ok(()) => self.dispatch_kernel(KernelAction::FileSaved { path }),
                Err(e) => self.dispatch_kernel(KernelAction::FileSaveFailed {
                    path,
                    error: e.to_string(),
                }),
            },
            Effect::SpawnShell { cols, rows } => {
                match ShellProcess::spawn(cols, rows) {
                    Ok(shell) => self.shell = Some(shell),
                    Err(e) => tracing::debug!(error = %e, "shell spawn failed"),
                }
                false
            }
            Effect::CloseShell => {
                if let Some(shell) = self.shell.take() {
                    tracing::debug!(program = shell.program(), "shell handle dropped");
                }
                false
            }
            Effect::ResizeShell { cols, rows } => {
                if let Some(shell) = self.shell.as_ref() {
                    if let Err(e) = shell.resize(cols, rows) {
                        tracing::debug!(error = %e, "pty resize failed");
                    }
                }
                false
            }
            Effect::WriteShell(bytes) => {
                if let Some(shell) = self.shell.as_mut() {
                    if let Err(e) = shell.write(&bytes) {
                        tracing::debug!(error = %e, "pty write failed");
                    }
                }
                false
            }
        }
    }

    /// Pane size a new terminal gets, from the last frame's geometry.
    fn terminal_size_hint(&self) -> (u16, u16) {
        let Some(area) = self.last_render_area else {
            return FALLBACK_TERMINAL_SIZE;
        };
        compute_layout(area, self.store.state().ui.split_percent, true)
            .terminal
            .map(|rect| (rect.width.max(1), rect.height.max(1)))
            .unwrap_or(FALLBACK_TERMINAL_SIZE)
    }

    pub(super) fn activate_toolbar_button(&mut self, button: ToolbarButton) -> bool {
        let action = match button {
            ToolbarButton::Open => KernelAction::OpenPrompt,
            ToolbarButton::Save => KernelAction::Save,
            ToolbarButton::Term => {
                let (cols, rows) = self.terminal_size_hint();
                KernelAction::ToggleTerminal { cols, rows }
            }
            ToolbarButton::Reload => KernelAction::Reload,
        };
        self.dispatch_kernel(action)
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.last_cursor
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
