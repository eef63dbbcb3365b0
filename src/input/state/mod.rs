mod actions;
mod core;
mod mouse;
mod render;

pub use core::{CursorHint, EditorSettings, EditorState, Gesture};
