//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml`. Settings include hit-testing
//! tolerances, canvas size, styling, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, EditorConfig, ExportConfig, StyleConfig};

use crate::draw::{CanvasSize, RenderStyle};
use crate::input::{EditorSettings, ToolState};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [editor]
/// hit_tolerance = 5.0
/// handle_size = 8.0
/// default_tool = "rectangle"
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [style]
/// selected_color = [255, 128, 0]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `editor.hit_tolerance`: 1.0 - 50.0
    /// - `editor.handle_size`: 2.0 - 64.0
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `style.stroke_width` / `style.selected_width`: 0.5 - 20.0
    /// - `style.annotation_font_size`: 6.0 - 72.0
    fn validate_and_clamp(&mut self) {
        clamp_f64(
            &mut self.editor.hit_tolerance,
            "hit_tolerance",
            1.0,
            50.0,
            types::default_hit_tolerance(),
        );
        clamp_f64(
            &mut self.editor.handle_size,
            "handle_size",
            2.0,
            64.0,
            types::default_handle_size(),
        );
        clamp_f64(
            &mut self.style.stroke_width,
            "stroke_width",
            0.5,
            20.0,
            types::default_stroke_width(),
        );
        clamp_f64(
            &mut self.style.selected_width,
            "selected_width",
            0.5,
            20.0,
            types::default_selected_width(),
        );
        clamp_f64(
            &mut self.style.annotation_font_size,
            "annotation_font_size",
            6.0,
            72.0,
            types::default_annotation_font_size(),
        );

        for (value, name) in [
            (&mut self.canvas.width, "canvas width"),
            (&mut self.canvas.height, "canvas height"),
        ] {
            if !(1..=8192).contains(&*value) {
                warn!("Invalid {} {}, clamping to 1-8192 range", name, value);
                *value = (*value).clamp(1, 8192);
            }
        }

        let valid_weight = matches!(
            self.style.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .style
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.style.font_weight
            );
            self.style.font_weight = "normal".to_string();
        }

        if !matches!(
            self.style.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.style.font_style
            );
            self.style.font_style = "normal".to_string();
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, using default");
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML at `path`, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    pub fn editor_settings(&self) -> EditorSettings {
        self.editor.settings()
    }

    /// Startup tool state for the shell.
    pub fn tool_state(&self) -> ToolState {
        ToolState::new(self.editor.default_tool, self.editor.show_annotations)
    }

    pub fn render_style(&self) -> RenderStyle {
        self.style.render_style(&self.canvas)
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas.size()
    }
}

/// Clamps `value` into `min..=max`; non-finite values fall back to `default`.
fn clamp_f64(value: &mut f64, name: &str, min: f64, max: f64, default: f64) {
    if !value.is_finite() {
        warn!("Invalid {} {}, using default {:.1}", name, value, default);
        *value = default;
    } else if !(min..=max).contains(&*value) {
        warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name, value, min, max
        );
        *value = value.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::input::{Tool, ToolProvider};

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.editor.hit_tolerance, 5.0);
        assert_eq!(config.editor.handle_size, 8.0);
        assert_eq!(config.canvas_size(), CanvasSize::default());
        assert_eq!(config.render_style(), RenderStyle::default());
        assert_eq!(config.tool_state().active_tool(), Tool::Select);
        assert!(config.tool_state().annotations_visible());
    }

    #[test]
    fn load_from_path_clamps_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[editor]
hit_tolerance = 500.0
handle_size = 0.5
default_tool = "circle"
show_annotations = false

[canvas]
width = 0
height = 480

[style]
selected_color = [0, 0, 255]
font_weight = "extra-chunky"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.editor.hit_tolerance, 50.0);
        assert_eq!(config.editor.handle_size, 2.0);
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 480);
        assert_eq!(config.style.font_weight, "normal");
        assert_eq!(config.render_style().selected_color, BLUE);
        assert_eq!(config.tool_state().active_tool(), Tool::Circle);
        assert!(!config.tool_state().annotations_visible());
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[editor]
hit_tolerance = nan
handle_size = inf

[style]
stroke_width = -inf
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.editor.hit_tolerance, 5.0);
        assert_eq!(config.editor.handle_size, 8.0);
        assert_eq!(config.style.stroke_width, 1.0);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[editor\nhit_tolerance = ").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(format!("{err}").contains("broken.toml"));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.editor.max_shapes = 12;
        config.style.selected_color = ColorSpec::named("red");
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.editor.max_shapes, 12);
        assert_eq!(loaded.render_style().selected_color, RED);
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["editor", "canvas", "style", "export"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
