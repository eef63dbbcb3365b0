//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{
    CanvasSize, DEFAULT_HANDLE_SIZE, DEFAULT_HIT_TOLERANCE, FontDescriptor, RenderStyle,
};
use crate::input::{EditorSettings, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Editing behavior: hit-testing tolerances, limits and startup tool state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EditorConfig {
    /// Distance in pixels within which a click counts as on a line or circle outline
    /// (valid range: 1.0 - 50.0)
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f64,

    /// Half-extent in pixels of the square resize handle hit-box (valid range: 2.0 - 64.0)
    #[serde(default = "default_handle_size")]
    pub handle_size: f64,

    /// Maximum number of shapes on the canvas (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,

    /// Tool active at startup (select, line, rectangle, circle)
    #[serde(default)]
    pub default_tool: Tool,

    /// Show measurement labels at startup
    #[serde(default = "default_show_annotations")]
    pub show_annotations: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: default_hit_tolerance(),
            handle_size: default_handle_size(),
            max_shapes: 0,
            default_tool: Tool::default(),
            show_annotations: default_show_annotations(),
        }
    }
}

impl EditorConfig {
    pub fn settings(&self) -> EditorSettings {
        EditorSettings {
            hit_tolerance: self.hit_tolerance,
            handle_size: self.handle_size,
            max_shapes: self.max_shapes,
        }
    }
}

/// Canvas dimensions and background.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Logical canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Logical canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Outline, selection, handle and label styling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Outline width of unselected shapes (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    #[serde(default = "default_selected_color")]
    pub selected_color: ColorSpec,

    /// Outline width of the selected shape (valid range: 0.5 - 20.0)
    #[serde(default = "default_selected_width")]
    pub selected_width: f64,

    #[serde(default = "default_handle_color")]
    pub handle_color: ColorSpec,

    #[serde(default = "default_annotation_color")]
    pub annotation_color: ColorSpec,

    /// Label font size in points (valid range: 6.0 - 72.0)
    #[serde(default = "default_annotation_font_size")]
    pub annotation_font_size: f64,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", or 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style ("normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            selected_color: default_selected_color(),
            selected_width: default_selected_width(),
            handle_color: default_handle_color(),
            annotation_color: default_annotation_color(),
            annotation_font_size: default_annotation_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

impl StyleConfig {
    /// Resolves colors and fonts; `canvas` supplies the background.
    pub fn render_style(&self, canvas: &CanvasConfig) -> RenderStyle {
        RenderStyle {
            background: canvas.background.to_color(),
            stroke_color: self.stroke_color.to_color(),
            stroke_width: self.stroke_width,
            selected_color: self.selected_color.to_color(),
            selected_width: self.selected_width,
            handle_color: self.handle_color.to_color(),
            annotation_color: self.annotation_color.to_color(),
            annotation_font: FontDescriptor::new(
                self.font_family.clone(),
                self.font_weight.clone(),
                self.font_style.clone(),
            ),
            annotation_font_size: self.annotation_font_size,
            ..RenderStyle::default()
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Target directory; defaults to `<Pictures>/Sketchboard`
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File name template with chrono format specifiers (extension added automatically)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
        }
    }
}

pub(super) fn default_hit_tolerance() -> f64 {
    DEFAULT_HIT_TOLERANCE
}

pub(super) fn default_handle_size() -> f64 {
    DEFAULT_HANDLE_SIZE
}

fn default_show_annotations() -> bool {
    true
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::named("black")
}

pub(super) fn default_stroke_width() -> f64 {
    1.0
}

fn default_selected_color() -> ColorSpec {
    ColorSpec::named("red")
}

pub(super) fn default_selected_width() -> f64 {
    3.0
}

fn default_handle_color() -> ColorSpec {
    ColorSpec::named("blue")
}

fn default_annotation_color() -> ColorSpec {
    ColorSpec::named("black")
}

pub(super) fn default_annotation_font_size() -> f64 {
    12.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

pub(super) fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
