//! Command-line interface rendering dot grids and their patterns to PNG files

use crate::grid::dot_pattern::{DotPattern, GridConfig};
use crate::grid::layout::GridShape;
use crate::io::configuration::{
    BATCH_INDEX_SEPARATOR, DEFAULT_GRID_SIZE, DEFAULT_IMAGE_COUNT, DEFAULT_OUTPUT_EXTENSION,
    DEFAULT_RADIUS_COEFFICIENT, DEFAULT_SEED, DEFAULT_SURFACE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_surface_as_png;
use crate::io::progress::ProgressManager;
use crate::pattern::generator::{PatternGenerator, SamplingPolicy};
use crate::pattern::kind::PatternKind;
use crate::pattern::validity::AllOf;
use crate::render::raster::RasterSurface;
use crate::render::surface::SurfaceSize;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "dotpattern")]
#[command(
    author,
    version,
    about = "Render a dot grid with a random connect-the-dots pattern"
)]
/// Command-line arguments for the pattern renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// PNG file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Dots per side of a square grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid: usize,

    /// Number of dot columns (overrides --grid)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Number of dot rows (overrides --grid)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Surface width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Surface height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Divisor turning the cell size into the dot radius
    #[arg(short, long, default_value_t = DEFAULT_RADIUS_COEFFICIENT)]
    pub radius_coefficient: f64,

    /// Color dots by position and stroke the pattern with a gradient
    #[arg(short, long)]
    pub colored: bool,

    /// Pattern kind to generate
    #[arg(short, long, value_enum, default_value_t = PatternKind::Random)]
    pub kind: PatternKind,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of images to render
    #[arg(short = 'n', long, default_value_t = DEFAULT_IMAGE_COUNT)]
    pub count: usize,

    /// Draw only the dots
    #[arg(long)]
    pub no_pattern: bool,

    /// Draw candidate indices from the whole inclusive range, out-of-range index included
    #[arg(long)]
    pub inclusive_sampling: bool,

    /// Discard patterns that are too short, repeat a dot or skip over an unvisited dot
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid counts, with per-axis overrides applied
    pub fn grid_shape(&self) -> GridShape {
        GridShape::new(
            self.columns.unwrap_or(self.grid),
            self.rows.unwrap_or(self.grid),
        )
    }

    /// Surface size; a single given dimension makes the surface square
    pub fn surface_size(&self) -> SurfaceSize {
        match (self.width, self.height) {
            (Some(w), Some(h)) => SurfaceSize::new(w, h),
            (Some(side), None) | (None, Some(side)) => SurfaceSize::square(side),
            (None, None) => SurfaceSize::square(DEFAULT_SURFACE_SIZE),
        }
    }

    /// Grid parameters described by the arguments
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            surface: self.surface_size(),
            shape: self.grid_shape(),
            radius_coefficient: self.radius_coefficient,
            colored_dots: self.colored,
        }
    }

    /// Sampling policy selected by the arguments
    pub const fn sampling_policy(&self) -> SamplingPolicy {
        if self.inclusive_sampling {
            SamplingPolicy::Inclusive
        } else {
            SamplingPolicy::Clamped
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }

    /// Files the run writes, in rendering order
    ///
    /// A single image goes to the output path itself. Batches number each file
    /// after the output stem, zero-padded to the width of the largest number.
    pub fn output_paths(&self) -> Vec<PathBuf> {
        if self.count <= 1 {
            return vec![self.output.clone()];
        }

        let stem = self.output.file_stem().unwrap_or_default().to_string_lossy();
        let extension = self
            .output
            .extension()
            .map_or_else(|| DEFAULT_OUTPUT_EXTENSION.into(), |e| e.to_string_lossy());
        let digits = self.count.to_string().len();

        (1..=self.count)
            .map(|number| {
                let file_name =
                    format!("{stem}{BATCH_INDEX_SEPARATOR}{number:0digits$}.{extension}");
                self.output.with_file_name(file_name)
            })
            .collect()
    }
}

/// Renders the images requested on the command line
///
/// One grid, one generator and one raster surface are reused for the whole
/// batch, so consecutive images continue the same seeded random sequence.
pub struct PatternRenderer {
    cli: Cli,
    grid: DotPattern,
    generator: PatternGenerator,
    surface: RasterSurface,
    progress_manager: Option<ProgressManager>,
}

impl PatternRenderer {
    /// Validate the arguments and prepare the grid, generator and surface
    ///
    /// # Errors
    ///
    /// Returns an error if the image count is zero or the grid parameters are invalid
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &cli.count,
                &"at least one image must be rendered",
            ));
        }

        let config = cli.grid_config();
        let grid = DotPattern::new(config)?;

        let mut generator = PatternGenerator::new(cli.seed).with_sampling(cli.sampling_policy());
        if cli.strict {
            generator = generator.with_validator(Box::new(AllOf::strict()));
        }

        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Ok(Self {
            surface: RasterSurface::new(config.surface),
            cli,
            grid,
            generator,
            progress_manager,
        })
    }

    /// Grid the images are rendered from
    pub const fn grid(&self) -> &DotPattern {
        &self.grid
    }

    /// Render and export every requested image
    ///
    /// # Errors
    ///
    /// Returns an error if an image cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let start_time = Instant::now();
        let paths = self.cli.output_paths();

        for path in &paths {
            if let Some(ref pm) = self.progress_manager {
                pm.start_image(path);
            }

            self.render_one(path)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_image();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            "rendered {} image(s) in {:.2?}",
            paths.len(),
            start_time.elapsed()
        );
        Ok(paths)
    }

    fn render_one(&mut self, path: &Path) -> Result<()> {
        let draw_pattern = !self.cli.no_pattern;

        if draw_pattern
            && self
                .grid
                .generate_pattern(&mut self.generator, self.cli.kind)
                .is_none()
        {
            warn!(
                "no {} pattern for {}; writing the dots only",
                self.cli.kind,
                path.display()
            );
        }

        self.grid.render(&mut self.surface, draw_pattern);
        export_surface_as_png(&self.surface, path)?;

        if let Some(pattern) = self.grid.active_pattern().filter(|_| draw_pattern) {
            info!("wrote {} with pattern {pattern}", path.display());
        } else {
            info!("wrote {}", path.display());
        }
        Ok(())
    }
}
