//! Frontend-neutral input types shared by views and the workbench.

pub mod event;

pub use event::{InputEvent, Key};
