use serde::{Deserialize, Serialize};

pub const DEFAULT_FILE: &str = "default.c";
pub const DEFAULT_STYLESHEET: &str = "styles.css";
pub const DEFAULT_SCROLLBACK_LINES: usize = 5000;
pub const DEFAULT_SPLIT_PERCENT: u16 = 50;
pub const MIN_SPLIT_PERCENT: u16 = 10;
pub const MAX_SPLIT_PERCENT: u16 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// File shown at startup. `null` starts without an active file.
    #[serde(default = "default_file")]
    pub default_file: Option<String>,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    #[serde(default)]
    pub terminal: TerminalSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSettings {
    #[serde(default = "default_scrollback_lines")]
    pub scrollback_lines: usize,
    /// Share of the body given to the editor pane while the terminal is open.
    #[serde(default = "default_split_percent")]
    pub split_percent: u16,
}

fn default_file() -> Option<String> {
    Some(DEFAULT_FILE.to_string())
}

fn default_stylesheet() -> String {
    DEFAULT_STYLESHEET.to_string()
}

fn default_scrollback_lines() -> usize {
    DEFAULT_SCROLLBACK_LINES
}

fn default_split_percent() -> u16 {
    DEFAULT_SPLIT_PERCENT
}

pub fn clamp_split_percent(percent: u16) -> u16 {
    percent.clamp(MIN_SPLIT_PERCENT, MAX_SPLIT_PERCENT)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            stylesheet: default_stylesheet(),
            terminal: TerminalSettings::default(),
        }
    }
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            scrollback_lines: DEFAULT_SCROLLBACK_LINES,
            split_percent: DEFAULT_SPLIT_PERCENT,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
