//! Application shell: stylesheet-driven theme and the workbench that owns
//! the store, the views and the shell process.

pub mod stylesheet;
pub mod theme;
mod workbench;

pub use stylesheet::{Stylesheet, StylesheetError};
pub use theme::{ThemeElement, UiTheme};
pub use workbench::{compute_layout, ToolbarButton, Workbench, WorkbenchLayout};
