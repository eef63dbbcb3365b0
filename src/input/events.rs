//! Backend-independent input event types.

use serde::{Deserialize, Serialize};

/// Generic key representation.
///
/// Shells map their native key codes to these values. Only [`Key::Delete`]
/// currently triggers an editor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Char(char),
    Unknown,
}

/// A single pointer or keyboard event, in arrival order.
///
/// Pointer coordinates are relative to the canvas's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave,
    KeyDown { key: Key },
}
