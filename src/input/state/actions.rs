use crate::draw::Shape;
use crate::input::events::{InputEvent, Key};
use crate::input::tool::ToolProvider;
use crate::util::Point;

use super::EditorState;

impl<P: ToolProvider> EditorState<P> {
    /// Processes a key press.
    ///
    /// Only [`Key::Delete`] has an effect: it removes the selected shape.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Delete => {
                self.delete_selected();
            }
            other => log::trace!("Ignoring key {other:?}"),
        }
    }

    /// Removes the selected shape, clearing the selection and any gesture.
    ///
    /// Returns the removed shape, or `None` when nothing was selected. Shapes
    /// stored after it move down one index.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let index = self.selected.take()?;
        self.reset_gesture();
        self.needs_redraw = true;

        match self.store.remove_at(index) {
            Ok(shape) => {
                log::debug!("Deleted {:?} #{index}", shape.kind());
                Some(shape)
            }
            Err(err) => {
                self.drop_stale_selection(err);
                None
            }
        }
    }

    /// Routes an input event to its handler.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(Point::new(x, y)),
            InputEvent::PointerUp { x, y } => self.on_pointer_up(Point::new(x, y)),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::KeyDown { key } => self.on_key_press(key),
        }
    }
}
