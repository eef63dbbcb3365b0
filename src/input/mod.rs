//! Input handling and the gesture state machine.
//!
//! This module translates pointer and keyboard events into edits of the shape
//! store. It reads the active tool from a [`ToolProvider`] and tracks the
//! selection, the current gesture (idle, dragging, resizing) and the anchor point.

pub mod events;
pub mod state;
pub mod tool;

pub use events::{InputEvent, Key};
pub use state::{CursorHint, EditorSettings, EditorState, Gesture};
pub use tool::{Tool, ToolProvider, ToolState};
