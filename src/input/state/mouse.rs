use crate::draw::{Shape, hit};
use crate::input::tool::{Tool, ToolProvider};
use crate::util::Point;
use log::{debug, warn};

use super::{EditorState, Gesture};

impl<P: ToolProvider> EditorState<P> {
    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Select tool, shape under pointer: selects the topmost hit and starts a
    ///   resize if the press is on its handle, a drag otherwise
    /// - Select tool, nothing hit: keeps resizing available on the selected
    ///   shape's handle, otherwise deselects
    /// - Drawing tool: records the press as the new shape's first anchor
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.tools.active_tool().is_drawing() {
            self.gesture = Gesture::Idle;
            self.anchor = Some(point);
            return;
        }

        let shapes = self.store.shapes();
        let handle_size = self.settings.handle_size;

        if let Some(index) = hit::hit_test(point, shapes, self.settings.hit_tolerance) {
            let on_handle = hit::is_near_resize_handle(point, &shapes[index], handle_size);
            self.set_selected(Some(index));
            self.gesture = if on_handle {
                Gesture::Resizing
            } else {
                Gesture::Dragging
            };
            self.anchor = Some(point);
            debug!("Shape {index} hit at {point:?}, starting {:?}", self.gesture);
        } else if self
            .selected_shape()
            .is_some_and(|shape| hit::is_near_resize_handle(point, shape, handle_size))
        {
            // The handle can sit off the shape's own outline (circles).
            self.gesture = Gesture::Resizing;
            self.anchor = Some(point);
            debug!("Resize handle of {:?} grabbed at {point:?}", self.selected);
        } else {
            self.set_selected(None);
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Dragging: translates the selected shape by the movement since the last
    ///   event, then makes this position the new anchor
    /// - Resizing: sets the selected shape's `end` to the pointer position
    /// - Otherwise: nothing (see [`provisional_shape`](Self::provisional_shape) for previews)
    pub fn on_pointer_move(&mut self, point: Point) {
        let Some(index) = self.selected else {
            return;
        };

        match self.gesture {
            Gesture::Dragging => {
                let Some(anchor) = self.anchor else {
                    return;
                };
                let moved = self.store.get_mut(index).map(|shape| shape.translate(point - anchor));
                if let Err(err) = moved {
                    return self.drop_stale_selection(err);
                }
                self.anchor = Some(point);
                self.needs_redraw = true;
            }
            Gesture::Resizing => {
                let resized = self.store.get_mut(index).map(|shape| shape.set_end(point));
                if let Err(err) = resized {
                    return self.drop_stale_selection(err);
                }
                self.needs_redraw = true;
            }
            Gesture::Idle => {}
        }
    }

    /// Processes a pointer release.
    ///
    /// # Behavior
    /// - Ends a drag or resize without creating anything
    /// - With a drawing tool and a recorded anchor, commits a new shape spanning
    ///   from the anchor to `point` (zero-size shapes included)
    pub fn on_pointer_up(&mut self, point: Point) {
        if self.gesture != Gesture::Idle {
            self.reset_gesture();
            return;
        }

        let Some(anchor) = self.anchor.take() else {
            return;
        };

        let tool = self.tools.active_tool();
        let Some(shape) = Shape::from_tool(tool, anchor, point) else {
            debug!("Discarding draw anchor left over from before switching to {tool:?}");
            return;
        };

        if self.store.try_append(shape, self.settings.max_shapes) {
            debug!("Created {:?} #{}", shape.kind(), self.store.len() - 1);
            self.needs_redraw = true;
        } else {
            warn!(
                "Shape limit ({}) reached; discarding new shape",
                self.settings.max_shapes
            );
        }
    }

    /// Processes the pointer leaving the canvas.
    ///
    /// Ends any drag or resize and cancels an in-progress draw.
    pub fn on_pointer_leave(&mut self) {
        if self.anchor.is_some() && self.tools.active_tool() != Tool::Select {
            debug!("Pointer left canvas; draw cancelled");
        }
        self.reset_gesture();
    }
}
