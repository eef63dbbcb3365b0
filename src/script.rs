//! Scripted sessions for the headless shell.
//!
//! A script is a JSON array of steps. Pointer and key steps are fed to the
//! editor; tool and annotation steps stand in for the toolbar and write the
//! shell-owned [`ToolState`].
//!
//! ```json
//! [
//!   { "type": "set_tool", "tool": "rectangle" },
//!   { "type": "pointer_down", "x": 10, "y": 10 },
//!   { "type": "pointer_up", "x": 110, "y": 60 }
//! ]
//! ```

use crate::config::Config;
use crate::draw::{CanvasSize, DrawCommand, RenderStyle};
use crate::input::{EditorState, InputEvent, Key, Tool, ToolState};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave,
    KeyDown { key: Key },
    SetTool { tool: Tool },
    SetAnnotations { visible: bool },
    ToggleAnnotations,
}

impl ScriptStep {
    /// The editor input this step represents, or `None` for toolbar steps.
    pub fn input_event(&self) -> Option<InputEvent> {
        match *self {
            ScriptStep::PointerDown { x, y } => Some(InputEvent::PointerDown { x, y }),
            ScriptStep::PointerMove { x, y } => Some(InputEvent::PointerMove { x, y }),
            ScriptStep::PointerUp { x, y } => Some(InputEvent::PointerUp { x, y }),
            ScriptStep::PointerLeave => Some(InputEvent::PointerLeave),
            ScriptStep::KeyDown { key } => Some(InputEvent::KeyDown { key }),
            ScriptStep::SetTool { .. }
            | ScriptStep::SetAnnotations { .. }
            | ScriptStep::ToggleAnnotations => None,
        }
    }
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    Ok(serde_json::from_str(source)?)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let source = fs::read_to_string(path)?;
    parse_script(&source)
}

/// The application shell around an editor: owns the tool state and redraws
/// whenever the editor reports a change.
pub struct Session {
    tools: Rc<RefCell<ToolState>>,
    editor: EditorState<Rc<RefCell<ToolState>>>,
    style: RenderStyle,
    canvas: CanvasSize,
    frame: Vec<DrawCommand>,
    frames_rendered: usize,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let tools = Rc::new(RefCell::new(config.tool_state()));
        let editor = EditorState::new(Rc::clone(&tools), config.editor_settings());
        let mut session = Self {
            tools,
            editor,
            style: config.render_style(),
            canvas: config.canvas_size(),
            frame: Vec::new(),
            frames_rendered: 0,
        };
        session.redraw_if_needed();
        session
    }

    /// Applies one step and redraws if anything visible changed.
    pub fn apply(&mut self, step: ScriptStep) {
        match step {
            ScriptStep::SetTool { tool } => self.tools.borrow_mut().set_tool(tool),
            ScriptStep::SetAnnotations { visible } => {
                self.tools.borrow_mut().set_annotations_visible(visible)
            }
            ScriptStep::ToggleAnnotations => self.tools.borrow_mut().toggle_annotations(),
            _ => {
                if let Some(event) = step.input_event() {
                    self.editor.handle_event(event);
                }
            }
        }
        self.redraw_if_needed();
    }

    pub fn run(&mut self, steps: &[ScriptStep]) {
        for step in steps {
            self.apply(*step);
        }
        log::info!(
            "Replayed {} steps: {} shapes, {} frames rendered",
            steps.len(),
            self.editor.shapes().len(),
            self.frames_rendered
        );
    }

    fn redraw_if_needed(&mut self) {
        if self.editor.needs_redraw() {
            self.frame = self.editor.draw_commands(&self.style, self.canvas);
            self.editor.mark_rendered();
            self.frames_rendered += 1;
        }
    }

    pub fn editor(&self) -> &EditorState<Rc<RefCell<ToolState>>> {
        &self.editor
    }

    /// Draw commands of the most recent frame.
    pub fn frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use crate::util::Point;

    const RECTANGLE_THEN_DELETE: &str = r#"[
        { "type": "set_tool", "tool": "rectangle" },
        { "type": "pointer_down", "x": 10, "y": 10 },
        { "type": "pointer_up", "x": 110, "y": 60 },
        { "type": "set_tool", "tool": "select" },
        { "type": "pointer_down", "x": 20, "y": 20 },
        { "type": "pointer_up", "x": 20, "y": 20 },
        { "type": "key_down", "key": "delete" }
    ]"#;

    #[test]
    fn parses_all_step_kinds() {
        let steps = parse_script(
            r#"[
                { "type": "pointer_move", "x": 1.5, "y": -2 },
                { "type": "pointer_leave" },
                { "type": "key_down", "key": { "char": "x" } },
                { "type": "set_annotations", "visible": false },
                { "type": "toggle_annotations" }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                ScriptStep::PointerMove { x: 1.5, y: -2.0 },
                ScriptStep::PointerLeave,
                ScriptStep::KeyDown { key: Key::Char('x') },
                ScriptStep::SetAnnotations { visible: false },
                ScriptStep::ToggleAnnotations,
            ]
        );
    }

    #[test]
    fn unknown_step_is_rejected() {
        let err = parse_script(r#"[{ "type": "rotate", "angle": 90 }]"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn session_replays_and_redraws_per_change() {
        let steps = parse_script(RECTANGLE_THEN_DELETE).unwrap();
        let mut session = Session::new(&Config::default());
        assert_eq!(session.frames_rendered(), 1);

        session.run(&steps[..3]);
        assert_eq!(
            session.editor().shapes().shapes(),
            &[Shape::Rectangle {
                start: Point::new(10.0, 10.0),
                end: Point::new(110.0, 60.0),
            }]
        );
        assert_eq!(session.frames_rendered(), 2);

        session.run(&steps[3..]);
        assert!(session.editor().shapes().is_empty());
        // Selection, then deletion.
        assert_eq!(session.frames_rendered(), 4);
        assert_eq!(session.frame().len(), 1);
    }

    #[test]
    fn toggling_annotations_triggers_redraw() {
        let mut session = Session::new(&Config::default());
        session.apply(ScriptStep::ToggleAnnotations);
        assert_eq!(session.frames_rendered(), 2);
        session.apply(ScriptStep::SetAnnotations { visible: false });
        assert_eq!(session.frames_rendered(), 2);
    }
}
