//! Data models.

pub mod text_buffer;

pub use text_buffer::{slice_to_cow, strip_line_break, TextBuffer};
