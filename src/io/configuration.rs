//! Layout defaults, palette and output settings

use crate::render::paint::Color;

// Grid defaults match the initial page state: a 3x3 grid on a square surface
/// Default dots per side
pub const DEFAULT_GRID_SIZE: usize = 3;
/// Default surface side in pixels
pub const DEFAULT_SURFACE_SIZE: u32 = 300;
/// Default divisor applied to the cell size to obtain the dot radius
pub const DEFAULT_RADIUS_COEFFICIENT: f64 = 5.0;

// Safety limit to prevent excessive memory allocation
/// Maximum number of dots along either grid axis
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// Smallest number of points a random pattern asks for
pub const MIN_PATTERN_POINTS: usize = 4;

// Colors
/// Color of uncolored dots and of the uncolored pattern stroke
pub const NEUTRAL_COLOR: Color = Color::WHITE;
/// Pattern stroke gradient stops as `(offset, color)`, running top-right to bottom-left
pub const PATTERN_GRADIENT_STOPS: [(f64, Color); 3] = [
    (0.0, Color::RED),
    (0.5, Color::MAGENTA),
    (1.0, Color::BLUE),
];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of images rendered per invocation
pub const DEFAULT_IMAGE_COUNT: usize = 1;

// Output settings
/// Extension used when the output path has none
pub const DEFAULT_OUTPUT_EXTENSION: &str = "png";
/// Separator between the output stem and the image number in batch mode
pub const BATCH_INDEX_SEPARATOR: &str = "_";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
