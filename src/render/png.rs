//! PNG output for rendered canvases.

use std::fs;
use std::path::Path;

use image::ImageFormat;

use crate::canvas::Canvas;
use crate::error::{BrandError, Result};

/// Write a canvas to a PNG file, creating parent directories as needed.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BrandError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    canvas
        .as_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| BrandError::Encode {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
