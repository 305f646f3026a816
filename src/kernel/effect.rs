use std::path::PathBuf;

use super::action::LoadPurpose;

/// Side effects requested by the store and run by the workbench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadFile { path: PathBuf, purpose: LoadPurpose },
    WriteFile { path: PathBuf, text: String },
    SpawnShell { cols: u16, rows: u16 },
    CloseShell,
    ResizeShell { cols: u16, rows: u16 },
    WriteShell(Vec<u8>),
}
