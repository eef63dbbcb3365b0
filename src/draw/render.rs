//! Scene rendering: shapes to draw commands, draw commands to Cairo.
//!
//! Rendering is split in two steps. [`build_draw_commands`] is a pure function of
//! the shapes, the selection and the annotation flag; [`render_commands`] replays
//! the resulting list on any Cairo context.

use super::color::{self, Color};
use super::font::FontDescriptor;
use super::shape::Shape;
use crate::util::{self, Point};

/// Logical canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Visual styling of the canvas.
///
/// None of these values influence hit geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub selected_color: Color,
    pub selected_width: f64,
    pub handle_color: Color,
    /// Side length of the drawn handle square
    pub handle_size: f64,
    pub annotation_color: Color,
    pub annotation_font: FontDescriptor,
    pub annotation_font_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: color::WHITE,
            stroke_color: color::BLACK,
            stroke_width: 1.0,
            selected_color: color::RED,
            selected_width: 3.0,
            handle_color: color::BLUE,
            handle_size: 8.0,
            annotation_color: color::BLACK,
            annotation_font: FontDescriptor::default(),
            annotation_font_size: 12.0,
        }
    }
}

/// Outline geometry of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathKind {
    Segment { start: Point, end: Point },
    /// Already normalized: `width` and `height` are non-negative
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle { center: Point, radius: f64 },
}

/// A single drawing primitive for a canvas-like surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas with `color`
    Clear {
        width: f64,
        height: f64,
        color: Color,
    },
    StrokePath {
        path: PathKind,
        color: Color,
        width: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Text with its baseline starting at `position`
    FillText {
        text: String,
        position: Point,
        color: Color,
        font: FontDescriptor,
        size: f64,
    },
}

/// Offset of a measurement label from the shape's `start` point.
const ANNOTATION_OFFSET: (f64, f64) = (5.0, -5.0);

/// Builds the full list of draw commands for one frame.
///
/// The list always starts with a [`DrawCommand::Clear`]; shapes follow in store
/// order so later shapes paint over earlier ones. The selected shape gets the
/// emphasized outline and its resize handle.
pub fn build_draw_commands(
    shapes: &[Shape],
    selected: Option<usize>,
    annotations_visible: bool,
    style: &RenderStyle,
    canvas: CanvasSize,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + shapes.len() * 2);
    commands.push(DrawCommand::Clear {
        width: canvas.width as f64,
        height: canvas.height as f64,
        color: style.background,
    });

    for (index, shape) in shapes.iter().enumerate() {
        let is_selected = selected == Some(index);
        let (color, width) = if is_selected {
            (style.selected_color, style.selected_width)
        } else {
            (style.stroke_color, style.stroke_width)
        };

        commands.push(DrawCommand::StrokePath {
            path: outline_path(shape),
            color,
            width,
        });

        if is_selected {
            let anchor = shape.resize_anchor();
            let half = style.handle_size / 2.0;
            commands.push(DrawCommand::FillRect {
                x: anchor.x - half,
                y: anchor.y - half,
                width: style.handle_size,
                height: style.handle_size,
                color: style.handle_color,
            });
        }

        if annotations_visible {
            let start = shape.start();
            commands.push(DrawCommand::FillText {
                text: annotation_label(shape),
                position: Point::new(start.x + ANNOTATION_OFFSET.0, start.y + ANNOTATION_OFFSET.1),
                color: style.annotation_color,
                font: style.annotation_font.clone(),
                size: style.annotation_font_size,
            });
        }
    }

    commands
}

/// Path traced by a shape's outline.
pub fn outline_path(shape: &Shape) -> PathKind {
    match *shape {
        Shape::Line { start, end } => PathKind::Segment { start, end },
        Shape::Rectangle { start, end } => {
            let bounds = util::normalized_rect(start, end);
            PathKind::Rectangle {
                x: bounds.x_min,
                y: bounds.y_min,
                width: bounds.width(),
                height: bounds.height(),
            }
        }
        Shape::Circle { start, end } => PathKind::Circle {
            center: start,
            radius: util::circle_radius(start, end),
        },
    }
}

/// Measurement text shown next to a shape.
///
/// - Line: rounded length, e.g. `"50"`
/// - Rectangle: absolute width and height, e.g. `"100 x 50"`
/// - Circle: rounded radius, e.g. `"r=30"`
pub fn annotation_label(shape: &Shape) -> String {
    match *shape {
        Shape::Line { start, end } => format!("{}", util::distance(start, end).round()),
        Shape::Rectangle { start, end } => {
            format!("{} x {}", (end.x - start.x).abs(), (end.y - start.y).abs())
        }
        Shape::Circle { start, end } => {
            format!("r={}", util::circle_radius(start, end).round())
        }
    }
}

/// Replays draw commands on a Cairo context.
///
/// Drawing errors leave the affected primitive missing; there is nothing useful
/// to recover mid-frame.
pub fn render_commands(ctx: &cairo::Context, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear {
                width,
                height,
                color,
            } => {
                color.apply(ctx);
                ctx.rectangle(0.0, 0.0, *width, *height);
                let _ = ctx.fill();
            }
            DrawCommand::StrokePath { path, color, width } => {
                stroke_path(ctx, path, *color, *width);
            }
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                color.apply(ctx);
                ctx.rectangle(*x, *y, *width, *height);
                let _ = ctx.fill();
            }
            DrawCommand::FillText {
                text,
                position,
                color,
                font,
                size,
            } => {
                render_text(ctx, *position, text, *color, font, *size);
            }
        }
    }
}

fn stroke_path(ctx: &cairo::Context, path: &PathKind, color: Color, width: f64) {
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.new_path();

    match *path {
        PathKind::Segment { start, end } => {
            ctx.set_line_cap(cairo::LineCap::Butt);
            ctx.move_to(start.x, start.y);
            ctx.line_to(end.x, end.y);
        }
        PathKind::Rectangle {
            x,
            y,
            width,
            height,
        } => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.rectangle(x, y, width, height);
        }
        PathKind::Circle { center, radius } => {
            ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        }
    }

    let _ = ctx.stroke();
}

/// Renders a single line of text with Pango, `position` being the baseline start.
fn render_text(
    ctx: &cairo::Context,
    position: Point,
    text: &str,
    color: Color,
    font: &FontDescriptor,
    size: f64,
) {
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner.
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(position.x, position.y - baseline);
    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}
