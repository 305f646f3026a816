//! jotpad: a single-buffer terminal text editor with an embedded shell pane.
//!
//! - core: input event types
//! - models: the rope backed text buffer
//! - kernel: state, actions, effects and the store; OS adapters under `services`
//! - views: the wrapping text view
//! - app: stylesheet, theme and the workbench that ties everything together
//! - tui: terminal setup, crossterm conversion and the `View` trait

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;
pub mod views;
