//! Tool selection and the provider the editor reads it from.

use crate::draw::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Editor tool selection.
///
/// The active tool decides how a pointer gesture is interpreted: the select tool
/// picks, drags and resizes existing shapes, every other tool draws a new shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pick, drag, resize and delete shapes
    #[default]
    Select,
    /// Straight line from press to release point
    Line,
    /// Rectangle from corner to corner
    Rectangle,
    /// Circle from center outward
    Circle,
}

impl Tool {
    /// The kind of shape this tool draws, or `None` for the select tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Select => None,
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
        }
    }

    pub fn is_drawing(self) -> bool {
        self != Tool::Select
    }
}

/// Read access to the tool and annotation state owned by the application shell.
pub trait ToolProvider {
    fn active_tool(&self) -> Tool;
    fn annotations_visible(&self) -> bool;
}

/// Shell-side tool storage, written by the toolbar (or a script).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    tool: Tool,
    annotations_visible: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Tool::Select, true)
    }
}

impl ToolState {
    pub fn new(tool: Tool, annotations_visible: bool) -> Self {
        Self {
            tool,
            annotations_visible,
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_annotations_visible(&mut self, visible: bool) {
        self.annotations_visible = visible;
    }

    pub fn toggle_annotations(&mut self) {
        self.annotations_visible = !self.annotations_visible;
    }
}

impl ToolProvider for ToolState {
    fn active_tool(&self) -> Tool {
        self.tool
    }

    fn annotations_visible(&self) -> bool {
        self.annotations_visible
    }
}

/// Lets the shell keep a handle to the same state the editor reads.
impl<T: ToolProvider> ToolProvider for Rc<RefCell<T>> {
    fn active_tool(&self) -> Tool {
        self.borrow().active_tool()
    }

    fn annotations_visible(&self) -> bool {
        self.borrow().annotations_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_state_is_visible_through_provider() {
        let shared = Rc::new(RefCell::new(ToolState::default()));
        let provider = Rc::clone(&shared);

        shared.borrow_mut().set_tool(Tool::Circle);
        shared.borrow_mut().toggle_annotations();

        assert_eq!(provider.active_tool(), Tool::Circle);
        assert!(!provider.annotations_visible());
    }

    #[test]
    fn tool_names_parse_lowercase() {
        let tool: Tool = serde_json::from_str("\"rectangle\"").unwrap();
        assert_eq!(tool, Tool::Rectangle);
        assert!(tool.is_drawing());
        assert!(!Tool::Select.is_drawing());
    }
}
