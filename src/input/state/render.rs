use crate::draw::{CanvasSize, DrawCommand, RenderStyle, Shape, build_draw_commands, render_commands};
use crate::input::tool::ToolProvider;
use crate::util::Point;

use super::{EditorState, Gesture};

impl<P: ToolProvider> EditorState<P> {
    /// Builds the draw commands for the current shapes, selection and annotation flag.
    pub fn draw_commands(&self, style: &RenderStyle, canvas: CanvasSize) -> Vec<DrawCommand> {
        build_draw_commands(
            self.store.shapes(),
            self.selected,
            self.tools.annotations_visible(),
            style,
            canvas,
        )
    }

    /// Clears and redraws the whole canvas on `ctx`, then marks the state rendered.
    pub fn render(&mut self, ctx: &cairo::Context, style: &RenderStyle, canvas: CanvasSize) {
        let commands = self.draw_commands(style, canvas);
        render_commands(ctx, &commands);
        self.mark_rendered();
    }

    /// Returns the shape a release at `current` would commit.
    ///
    /// # Returns
    /// - `Some(Shape)` while a drawing tool has a recorded anchor
    /// - `None` for the select tool or when no draw is in progress
    ///
    /// The committed canvas never contains this shape; shells may paint it on
    /// top as a live preview.
    pub fn provisional_shape(&self, current: Point) -> Option<Shape> {
        if self.gesture != Gesture::Idle {
            return None;
        }
        let anchor = self.anchor?;
        Shape::from_tool(self.tools.active_tool(), anchor, current)
    }
}
