//! Service ports: data contracts shared by the kernel and the adapters.

pub mod settings;

pub use settings::{clamp_split_percent, Settings, TerminalSettings};
