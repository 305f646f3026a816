//! View layer: pure rendering and hit testing over kernel state.

pub mod text_view;

pub use text_view::{segment_for_col, wrap_line, Segment, TextView};
