//! Shape model, storage, hit-testing and rendering (Cairo-based).
//!
//! This module defines the core drawing types of the editor:
//! - [`Shape`]: lines, rectangles and circles stored as two anchor points
//! - [`ShapeStore`]: the ordered shape list (order = paint order)
//! - [`hit`]: which shape, or which resize handle, lies under the pointer
//! - [`render`]: draw-command generation and Cairo playback

pub mod color;
pub mod font;
pub mod hit;
pub mod render;
pub mod shape;
pub mod store;

pub use color::Color;
pub use font::FontDescriptor;
pub use hit::{DEFAULT_HANDLE_SIZE, DEFAULT_HIT_TOLERANCE, hit_test, is_near_resize_handle};
pub use render::{
    CanvasSize, DrawCommand, PathKind, RenderStyle, build_draw_commands, render_commands,
};
pub use shape::{Shape, ShapeKind};
pub use store::{ShapeStore, StoreError};
