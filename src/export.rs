//! PNG export of the rendered canvas.

use crate::draw::{CanvasSize, DrawCommand, render_commands};
use chrono::Local;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Default export directory: `<Pictures>/Sketchboard`, or the home directory's
/// equivalent when no picture directory is known.
pub fn default_export_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Sketchboard")
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Renders `commands` onto a fresh surface of `canvas` size and writes it as PNG.
pub fn export_png(
    commands: &[DrawCommand],
    canvas: CanvasSize,
    path: &Path,
) -> Result<(), ExportError> {
    let surface = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        canvas.width as i32,
        canvas.height as i32,
    )?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_commands(&ctx, commands);
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;

    log::info!(
        "Exported {}x{} canvas to {}",
        canvas.width,
        canvas.height,
        path.display()
    );
    Ok(())
}

/// Exports into `directory` under a timestamped name, returning the file path.
pub fn export_png_timestamped(
    commands: &[DrawCommand],
    canvas: CanvasSize,
    directory: &Path,
    template: &str,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let path = directory.join(generate_filename(template, "png"));
    export_png(commands, canvas, &path)?;
    Ok(path)
}
