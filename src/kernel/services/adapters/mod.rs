//! Service adapters: OS specific implementations (filesystem, pty, paths).

pub mod file;
pub mod paths;
pub mod pty;
pub mod settings;

pub use file::{load_file, save_file, FileError};
pub use paths::{ensure_log_dir, get_log_dir};
pub use pty::{default_shell, ShellError, ShellOutput, ShellProcess};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
