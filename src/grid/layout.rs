//! Grid shape, column-major indexing and dot placement formulas
//!
//! Dots are stored column by column: every row of column 0, then every row of
//! column 1, and so on. The flattened index of column `c`, row `r` in a grid with
//! `rows` rows is therefore `c * rows + r`. Pattern indices rely on this order.

use crate::render::surface::{Point, SurfaceSize};
use std::fmt;

/// Column and row counts of a dot grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridShape {
    /// Number of dots horizontally
    pub columns: usize,
    /// Number of dots vertically
    pub rows: usize,
}

impl GridShape {
    /// Create a shape
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Shape with the same count on both axes
    pub const fn square(size: usize) -> Self {
        Self {
            columns: size,
            rows: size,
        }
    }

    /// Total number of dots
    pub const fn dot_count(self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Whether the shape holds no dots
    pub const fn is_empty(self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Flattened index of a column/row pair, if inside the grid
    pub const fn index_of(self, column: usize, row: usize) -> Option<usize> {
        if column < self.columns && row < self.rows {
            Some(column * self.rows + row)
        } else {
            None
        }
    }

    /// Column/row pair of a flattened index, if inside the grid
    pub const fn coordinates_of(self, index: usize) -> Option<(usize, usize)> {
        if self.rows == 0 || index >= self.dot_count() {
            None
        } else {
            Some((index / self.rows, index % self.rows))
        }
    }

    /// Width of one grid cell on the given surface
    pub fn cell_width(self, surface: SurfaceSize) -> f64 {
        surface.width_f64() / self.columns as f64
    }

    /// Height of one grid cell on the given surface
    pub fn cell_height(self, surface: SurfaceSize) -> f64 {
        surface.height_f64() / self.rows as f64
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Uniform dot radius for a grid on a surface
///
/// The dominant surface axis drives the radius: when the surface is wider than
/// tall the cell width is used, otherwise (ties included) the cell height.
pub fn dot_radius(surface: SurfaceSize, shape: GridShape, radius_coefficient: f64) -> f64 {
    if surface.width > surface.height {
        shape.cell_width(surface) / radius_coefficient
    } else {
        shape.cell_height(surface) / radius_coefficient
    }
}

/// Grid-space coordinates of a cell centre, `(column + 0.5, row + 0.5)`
pub fn cell_center(column: usize, row: usize) -> (f64, f64) {
    (column as f64 + 0.5, row as f64 + 0.5)
}

/// Surface position of the dot in a given column and row
pub fn dot_position(surface: SurfaceSize, shape: GridShape, column: usize, row: usize) -> Point {
    let (x, y) = cell_center(column, row);
    Point::new(
        x * shape.cell_width(surface),
        y * shape.cell_height(surface),
    )
}
