//! Shape definitions for the editor canvas.

use crate::input::Tool;
use crate::util::{self, Bounds, Delta, Point};
use serde::{Deserialize, Serialize};

/// Represents a drawable shape on the canvas.
///
/// Every variant is stored as two anchor points whose meaning depends on the kind.
/// Neither point is normalized; consumers resolve geometry through the helpers below.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Straight line between its two endpoints
    Line { start: Point, end: Point },
    /// Rectangle outline spanned by two opposite corners
    Rectangle { start: Point, end: Point },
    /// Circle outline: `start` is the center, `end` lies on the radius
    Circle { start: Point, end: Point },
}

/// Discriminant of [`Shape`] without geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

impl Shape {
    /// Builds a shape of the given kind from its two anchor points.
    pub fn new(kind: ShapeKind, start: Point, end: Point) -> Self {
        match kind {
            ShapeKind::Line => Shape::Line { start, end },
            ShapeKind::Rectangle => Shape::Rectangle { start, end },
            ShapeKind::Circle => Shape::Circle { start, end },
        }
    }

    /// Builds the shape a drawing tool produces, or `None` for the select tool.
    pub fn from_tool(tool: Tool, start: Point, end: Point) -> Option<Self> {
        tool.shape_kind().map(|kind| Self::new(kind, start, end))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    pub fn start(&self) -> Point {
        let (start, _) = self.points();
        start
    }

    pub fn end(&self) -> Point {
        let (_, end) = self.points();
        end
    }

    fn points(&self) -> (Point, Point) {
        match *self {
            Shape::Line { start, end }
            | Shape::Rectangle { start, end }
            | Shape::Circle { start, end } => (start, end),
        }
    }

    fn points_mut(&mut self) -> (&mut Point, &mut Point) {
        match self {
            Shape::Line { start, end }
            | Shape::Rectangle { start, end }
            | Shape::Circle { start, end } => (start, end),
        }
    }

    /// Moves both anchor points by the same offset, preserving size.
    pub fn translate(&mut self, delta: Delta) {
        let (start, end) = self.points_mut();
        *start = *start + delta;
        *end = *end + delta;
    }

    /// Overwrites the `end` anchor (used by resizing).
    pub fn set_end(&mut self, point: Point) {
        let (_, end) = self.points_mut();
        *end = point;
    }

    /// Normalized bounds of a rectangle's corners; for other kinds, of the two anchors.
    pub fn bounds(&self) -> Bounds {
        let (start, end) = self.points();
        util::normalized_rect(start, end)
    }

    /// Circle radius, or the segment length for lines and diagonal for rectangles.
    pub fn radius(&self) -> f64 {
        let (start, end) = self.points();
        util::circle_radius(start, end)
    }

    /// Where the resize handle sits for this shape.
    pub fn resize_anchor(&self) -> Point {
        util::bottom_right_anchor(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_preserves_extent() {
        let mut shape = Shape::Rectangle {
            start: Point::new(10.0, 10.0),
            end: Point::new(110.0, 60.0),
        };
        let before = shape.end() - shape.start();
        shape.translate(Delta { dx: -4.0, dy: 12.5 });

        assert_eq!(shape.start(), Point::new(6.0, 22.5));
        assert_eq!(shape.end(), Point::new(106.0, 72.5));
        assert_eq!(shape.end() - shape.start(), before);
    }

    #[test]
    fn set_end_leaves_start_untouched() {
        let mut shape = Shape::Circle {
            start: Point::new(50.0, 50.0),
            end: Point::new(80.0, 50.0),
        };
        shape.set_end(Point::new(50.0, 90.0));
        assert_eq!(shape.start(), Point::new(50.0, 50.0));
        assert_eq!(shape.radius(), 40.0);
    }

    #[test]
    fn select_tool_builds_no_shape() {
        let p = Point::new(1.0, 2.0);
        assert!(Shape::from_tool(Tool::Select, p, p).is_none());
        assert_eq!(
            Shape::from_tool(Tool::Circle, p, p).map(|s| s.kind()),
            Some(ShapeKind::Circle)
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let shape = Shape::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(3.0, 4.0),
        };
        let json = serde_json::to_value(shape).unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["end"]["x"], 3.0);
    }
}
