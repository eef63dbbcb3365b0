//! Utility functions for colors and canvas geometry.
//!
//! This module provides:
//! - Color name mapping used by the configuration system
//! - Points, normalized bounds, and the distance helpers used by hit-testing
//! - The per-kind resize handle anchor

use crate::draw::{Color, Shape, color::*};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A position in canvas pixel coordinates (origin top-left).
///
/// Coordinates are never clamped: negative and out-of-canvas values are valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Offset between two points, as produced by `Point - Point`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Sub for Point {
    type Output = Delta;

    fn sub(self, rhs: Point) -> Delta {
        Delta {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl Add<Delta> for Point {
    type Output = Point;

    fn add(self, rhs: Delta) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

/// Axis-aligned bounds with min/max already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Inclusive containment check.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Distance from `point` to the segment `a`-`b`.
///
/// The projection of `point` onto the segment is clamped to the endpoints, so
/// points beyond either end measure to the nearer endpoint. A zero-length
/// segment degrades to the distance to `a`.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return distance(point, a);
    }

    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + dx * t, a.y + dy * t);
    distance(point, closest)
}

/// Resolves two opposite corners into min/max bounds.
pub fn normalized_rect(start: Point, end: Point) -> Bounds {
    Bounds {
        x_min: start.x.min(end.x),
        x_max: start.x.max(end.x),
        y_min: start.y.min(end.y),
        y_max: start.y.max(end.y),
    }
}

/// Radius of a circle stored as center (`start`) plus a point on its edge (`end`).
pub fn circle_radius(start: Point, end: Point) -> f64 {
    distance(start, end)
}

/// Returns the point where a shape's resize handle is drawn and hit-tested.
///
/// - Rectangle: the max-x/max-y corner of its normalized bounds
/// - Circle: the bottom-right corner of its bounding square, `(cx + r, cy + r)`
/// - Line: its `end` point
pub fn bottom_right_anchor(shape: &Shape) -> Point {
    match *shape {
        Shape::Rectangle { start, end } => {
            let bounds = normalized_rect(start, end);
            Point::new(bounds.x_max, bounds.y_max)
        }
        Shape::Circle { start, end } => {
            let radius = circle_radius(start, end);
            Point::new(start.x + radius, start.y + radius)
        }
        Shape::Line { end, .. } => end,
    }
}
