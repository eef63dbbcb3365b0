//! Hit-testing shapes and resize handles against a pointer position.

use super::shape::Shape;
use crate::util::{self, Point};

/// Pixel distance within which a pointer counts as "on" a line or circle outline.
pub const DEFAULT_HIT_TOLERANCE: f64 = 5.0;

/// Half-extent of the square hit-box around a resize handle.
pub const DEFAULT_HANDLE_SIZE: f64 = 8.0;

/// Returns the index of the topmost shape containing `point`, if any.
///
/// Shapes are scanned from last to first, so where shapes overlap the most
/// recently added one wins.
pub fn hit_test(point: Point, shapes: &[Shape], tolerance: f64) -> Option<usize> {
    shapes
        .iter()
        .rposition(|shape| contains_point(shape, point, tolerance))
}

/// Per-kind containment predicate.
///
/// - Line: within `tolerance` of the segment
/// - Rectangle: anywhere inside the normalized bounds, edges included
/// - Circle: within `tolerance` of the outline only; the interior does not hit
pub fn contains_point(shape: &Shape, point: Point, tolerance: f64) -> bool {
    match *shape {
        Shape::Line { start, end } => util::distance_to_segment(point, start, end) < tolerance,
        Shape::Rectangle { .. } => shape.bounds().contains(point),
        Shape::Circle { start, end } => {
            let radius = util::circle_radius(start, end);
            (util::distance(point, start) - radius).abs() < tolerance
        }
    }
}

/// Checks whether `point` falls in the square hit-box around the shape's handle.
pub fn is_near_resize_handle(point: Point, shape: &Shape, handle_size: f64) -> bool {
    let anchor = shape.resize_anchor();
    (point.x - anchor.x).abs() < handle_size && (point.y - anchor.y).abs() < handle_size
}
