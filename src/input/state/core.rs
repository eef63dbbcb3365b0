//! Gesture state machine and editor state.

use crate::draw::{DEFAULT_HANDLE_SIZE, DEFAULT_HIT_TOLERANCE, Shape, ShapeStore, StoreError};
use crate::input::tool::{Tool, ToolProvider, ToolState};
use crate::util::Point;

/// Current interpretation of a select-tool pointer interaction.
///
/// Drawing a new shape is not a gesture: it is derived at pointer release from
/// the active tool and the recorded anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No select-tool interaction in progress
    #[default]
    Idle,
    /// Moving the selected shape by incremental pointer deltas
    Dragging,
    /// Moving the selected shape's `end` point to the pointer
    Resizing,
}

/// Cursor feedback for the shell to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Pointer,
    ResizeSe,
    Crosshair,
}

/// Tunables for hit-testing and shape creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSettings {
    /// Distance within which a pointer is "on" a line or circle outline
    pub hit_tolerance: f64,
    /// Half-extent of the square resize handle hit-box
    pub handle_size: f64,
    /// Maximum number of shapes on the canvas (0 = unlimited)
    pub max_shapes: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            handle_size: DEFAULT_HANDLE_SIZE,
            max_shapes: 0,
        }
    }
}

/// Editor state: the shape store plus everything the gesture controller tracks.
///
/// All pointer and keyboard events go through `&mut self`, so mutations of the
/// store and the interaction state are serialized by construction. The tool
/// provider is read on every event and never written by the editor.
pub struct EditorState<P: ToolProvider = ToolState> {
    /// All committed shapes in paint order
    pub(super) store: ShapeStore,
    /// Index of the selected shape; always valid for `store` when set
    pub(super) selected: Option<usize>,
    pub(super) gesture: Gesture,
    /// Last pointer position for drag deltas, or the first corner of a new shape
    pub(super) anchor: Option<Point>,
    pub(super) tools: P,
    pub(super) settings: EditorSettings,
    /// Set whenever shapes or the selection change
    pub(super) needs_redraw: bool,
    /// Annotation visibility at the last completed render
    pub(super) rendered_annotations: Option<bool>,
}

impl Default for EditorState<ToolState> {
    fn default() -> Self {
        Self::new(ToolState::default(), EditorSettings::default())
    }
}

impl<P: ToolProvider> EditorState<P> {
    /// Creates an empty editor reading tool state from `tools`.
    pub fn new(tools: P, settings: EditorSettings) -> Self {
        Self {
            store: ShapeStore::new(),
            selected: None,
            gesture: Gesture::Idle,
            anchor: None,
            tools,
            settings,
            needs_redraw: true,
            rendered_annotations: None,
        }
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.store
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|index| self.store.get(index))
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn tools(&self) -> &P {
        &self.tools
    }

    /// Mutable access for shells that own the tool state through the editor.
    pub fn tools_mut(&mut self) -> &mut P {
        &mut self.tools
    }

    /// Whether the canvas must be redrawn.
    ///
    /// True after any change to shapes or selection since the last
    /// [`mark_rendered`](Self::mark_rendered), or when the provider's annotation
    /// visibility differs from the value last rendered.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw || self.rendered_annotations != Some(self.tools.annotations_visible())
    }

    /// Records that the current state has been drawn.
    pub fn mark_rendered(&mut self) {
        self.needs_redraw = false;
        self.rendered_annotations = Some(self.tools.annotations_visible());
    }

    pub fn cursor_hint(&self) -> CursorHint {
        match self.tools.active_tool() {
            Tool::Select if self.gesture == Gesture::Resizing => CursorHint::ResizeSe,
            Tool::Select => CursorHint::Pointer,
            _ => CursorHint::Crosshair,
        }
    }

    /// Changes the selection, flagging a redraw only when it actually changes.
    pub(super) fn set_selected(&mut self, selected: Option<usize>) {
        if self.selected != selected {
            log::debug!("Selection changed: {:?} -> {:?}", self.selected, selected);
            self.selected = selected;
            self.needs_redraw = true;
        }
    }

    /// Ends any gesture and forgets the anchor point.
    pub(super) fn reset_gesture(&mut self) {
        if self.gesture != Gesture::Idle {
            log::debug!("Gesture {:?} finished", self.gesture);
        }
        self.gesture = Gesture::Idle;
        self.anchor = None;
    }

    /// Recovers from a selection that no longer addresses a stored shape.
    ///
    /// Unreachable while every removal clears the selection.
    pub(super) fn drop_stale_selection(&mut self, err: StoreError) {
        log::error!("Selected shape is gone: {err}");
        if cfg!(debug_assertions) {
            panic!("selection outlived its shape: {err}");
        }
        self.selected = None;
        self.reset_gesture();
        self.needs_redraw = true;
    }
}
