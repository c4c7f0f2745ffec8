//! PNG export of rendered raster surfaces

use crate::io::error::{DotPatternError, Result};
use crate::render::raster::RasterSurface;
use image::ImageFormat;
use std::path::Path;

/// Export a rendered surface as a PNG image, creating parent directories
///
/// The PNG encoder is used regardless of the path's extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_surface_as_png(surface: &RasterSurface, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DotPatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    surface
        .image()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| DotPatternError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
