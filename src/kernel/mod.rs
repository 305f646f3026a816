//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;
pub mod terminal;

pub use action::{Action, EditorAction, LoadPurpose};
pub use effect::Effect;
pub use state::{AppState, DialogState, FocusTarget, OpenPromptState, UiState};
pub use store::{DispatchResult, Store};
pub use terminal::TerminalSession;
