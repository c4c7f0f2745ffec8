//! Dot grid orchestration: layout, coloring, the active pattern and rendering
//!
//! A [`DotPattern`] owns the dots of one grid laid out on one surface size, and
//! at most one [`Pattern`] generated for that grid's shape. Rendering draws every
//! dot and then, on request, strokes the pattern from dot to dot.

use crate::grid::color::coordinate_color;
use crate::grid::dot::Dot;
use crate::grid::layout::{GridShape, cell_center, dot_position, dot_radius};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_RADIUS_COEFFICIENT, DEFAULT_SURFACE_SIZE, MAX_GRID_DIMENSION,
    NEUTRAL_COLOR, PATTERN_GRADIENT_STOPS,
};
use crate::io::error::{DotPatternError, Result, invalid_parameter};
use crate::pattern::generator::{DotGrid, PatternGenerator};
use crate::pattern::kind::PatternKind;
use crate::pattern::sequence::Pattern;
use crate::render::paint::{LineCap, LinearGradient, Paint};
use crate::render::surface::{Point, ScopedState, Surface, SurfaceSize};
use log::{debug, warn};
use ndarray::Array2;

/// Parameters a dot grid is built from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Size of the surface the grid is laid out on
    pub surface: SurfaceSize,
    /// Column and row counts
    pub shape: GridShape,
    /// Divisor turning the dominant cell dimension into the dot radius
    pub radius_coefficient: f64,
    /// Color dots by position and stroke patterns with a gradient
    pub colored_dots: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::square(DEFAULT_SURFACE_SIZE),
            shape: GridShape::square(DEFAULT_GRID_SIZE),
            radius_coefficient: DEFAULT_RADIUS_COEFFICIENT,
            colored_dots: false,
        }
    }
}

/// A laid-out dot grid and its active pattern
#[derive(Debug, Clone)]
pub struct DotPattern {
    config: GridConfig,
    /// Indexed `[column, row]`; standard layout makes the flat order column-major
    dots: Array2<Dot>,
    active_pattern: Option<Pattern>,
}

impl DotPattern {
    /// Build and lay out a grid
    ///
    /// # Errors
    ///
    /// Returns an error if a grid count is zero or above `MAX_GRID_DIMENSION`, or the
    /// radius coefficient is not a positive finite number
    pub fn new(config: GridConfig) -> Result<Self> {
        validate_shape(config.shape)?;
        validate_radius_coefficient(config.radius_coefficient)?;

        Ok(Self {
            config,
            dots: layout_dots(&config),
            active_pattern: None,
        })
    }

    /// Parameters the grid is laid out from
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Column and row counts
    pub const fn shape(&self) -> GridShape {
        self.config.shape
    }

    /// Number of dots horizontally
    pub const fn grid_width(&self) -> usize {
        self.config.shape.columns
    }

    /// Number of dots vertically
    pub const fn grid_height(&self) -> usize {
        self.config.shape.rows
    }

    /// Surface size the dots are laid out on
    pub const fn surface(&self) -> SurfaceSize {
        self.config.surface
    }

    /// Divisor applied to the cell size to obtain the dot radius
    pub const fn radius_coefficient(&self) -> f64 {
        self.config.radius_coefficient
    }

    /// Whether dots are colored by position
    pub const fn colored_dots(&self) -> bool {
        self.config.colored_dots
    }

    /// Dots indexed `[column, row]`
    pub const fn dots(&self) -> &Array2<Dot> {
        &self.dots
    }

    /// Currently active pattern
    pub const fn active_pattern(&self) -> Option<&Pattern> {
        self.active_pattern.as_ref()
    }

    /// Dot at a flattened column-major index, or `None` when out of range
    pub fn lookup_dot(&self, index: usize) -> Option<&Dot> {
        let (column, row) = self.config.shape.coordinates_of(index)?;
        self.dots.get((column, row))
    }

    /// Rebuild every dot from the current configuration
    pub fn regenerate_grid(&mut self) {
        self.dots = layout_dots(&self.config);
    }

    /// Follow a surface resize
    pub fn resize_surface(&mut self, surface: SurfaceSize) {
        self.config.surface = surface;
        self.regenerate_grid();
    }

    /// Change the grid counts
    ///
    /// An active pattern generated for another shape is dropped, since its
    /// indices no longer name the same dots.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero or above `MAX_GRID_DIMENSION`; the
    /// grid is left unchanged
    pub fn set_grid_shape(&mut self, shape: GridShape) -> Result<()> {
        validate_shape(shape)?;
        self.config.shape = shape;
        self.regenerate_grid();

        if self
            .active_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.shape() != shape)
        {
            warn!("dropping active pattern: grid reshaped to {shape}");
            self.active_pattern = None;
        }
        Ok(())
    }

    /// Switch between positional colors and the neutral color
    ///
    /// The active pattern is kept.
    pub fn set_colored_dots(&mut self, colored_dots: bool) {
        self.config.colored_dots = colored_dots;
        self.regenerate_grid();
    }

    /// Change the radius coefficient
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient is not a positive finite number
    pub fn set_radius_coefficient(&mut self, radius_coefficient: f64) -> Result<()> {
        validate_radius_coefficient(radius_coefficient)?;
        self.config.radius_coefficient = radius_coefficient;
        self.regenerate_grid();
        Ok(())
    }

    /// Replace the active pattern with a freshly generated one
    ///
    /// The generator may produce nothing, in which case no pattern is active.
    pub fn generate_pattern(
        &mut self,
        generator: &mut PatternGenerator,
        kind: PatternKind,
    ) -> Option<&Pattern> {
        let pattern = generator.generate(&*self, kind);
        self.active_pattern = pattern;
        self.active_pattern.as_ref()
    }

    /// Make an externally built pattern active
    ///
    /// # Errors
    ///
    /// Returns [`DotPatternError::ShapeMismatch`] if the pattern targets another
    /// grid shape; the active pattern is left unchanged
    pub fn adopt_pattern(&mut self, pattern: Pattern) -> Result<()> {
        if pattern.shape() != self.config.shape {
            return Err(DotPatternError::ShapeMismatch {
                pattern: pattern.shape(),
                grid: self.config.shape,
            });
        }
        self.active_pattern = Some(pattern);
        Ok(())
    }

    /// Remove the active pattern
    pub fn clear_pattern(&mut self) -> Option<Pattern> {
        self.active_pattern.take()
    }

    /// Clear the surface, draw every dot, then the pattern if asked to
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, draw_pattern: bool) {
        surface.clear();

        for dot in &self.dots {
            dot.draw(surface);
        }

        if draw_pattern {
            self.render_pattern(surface);
        }
    }

    /// Stroke the active pattern from dot to dot
    ///
    /// Drawing stops at the first index that does not resolve to a dot; segments
    /// after it are not drawn. Style changes are scoped to this call.
    pub fn render_pattern<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some(pattern) = self.active_pattern.as_ref() else {
            return;
        };
        if pattern.is_empty() {
            return;
        }

        let mut scoped = ScopedState::new(surface);
        scoped.set_stroke(self.stroke_paint());
        scoped.set_line_width(self.config.radius_coefficient / 2.0);
        scoped.set_line_cap(LineCap::Round);

        for (from, to) in pattern.segments() {
            let (Some(start), Some(end)) = (self.lookup_dot(from), self.lookup_dot(to)) else {
                warn!(
                    "stopping pattern at segment {from} -> {to}: index outside the {} dot grid",
                    self.dots.len()
                );
                break;
            };
            scoped.stroke_line(start.position(), end.position());
        }

        scoped.set_line_cap(LineCap::Square);
    }

    /// Gradient across the surface when colored, the neutral color otherwise
    fn stroke_paint(&self) -> Paint {
        if !self.config.colored_dots {
            return Paint::Solid(NEUTRAL_COLOR);
        }

        let surface = self.config.surface;
        let gradient = PATTERN_GRADIENT_STOPS.iter().fold(
            LinearGradient::new(
                Point::new(surface.width_f64(), 0.0),
                Point::new(0.0, surface.height_f64()),
            ),
            |gradient, &(offset, color)| gradient.with_stop(offset, color),
        );
        Paint::LinearGradient(gradient)
    }
}

impl DotGrid for DotPattern {
    fn shape(&self) -> GridShape {
        self.config.shape
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }
}

/// Dots for a configuration, indexed `[column, row]`
fn layout_dots(config: &GridConfig) -> Array2<Dot> {
    let GridConfig {
        surface,
        shape,
        radius_coefficient,
        colored_dots,
    } = *config;
    let radius = dot_radius(surface, shape, radius_coefficient);

    debug!(
        "laying out {shape} grid on {surface} surface (radius {radius:.2}, colored: {colored_dots})"
    );

    Array2::from_shape_fn((shape.columns, shape.rows), |(column, row)| {
        let color = if colored_dots {
            let (x, y) = cell_center(column, row);
            coordinate_color(x, y, shape)
        } else {
            NEUTRAL_COLOR
        };
        Dot::new(dot_position(surface, shape, column, row), radius, color)
    })
}

fn validate_shape(shape: GridShape) -> Result<()> {
    if shape.columns == 0 {
        return Err(invalid_parameter(
            "columns",
            &shape.columns,
            &"grid needs at least one column",
        ));
    }
    if shape.rows == 0 {
        return Err(invalid_parameter(
            "rows",
            &shape.rows,
            &"grid needs at least one row",
        ));
    }
    if shape.columns > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "columns",
            &shape.columns,
            &format!("grid allows at most {MAX_GRID_DIMENSION} columns"),
        ));
    }
    if shape.rows > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "rows",
            &shape.rows,
            &format!("grid allows at most {MAX_GRID_DIMENSION} rows"),
        ));
    }
    Ok(())
}

fn validate_radius_coefficient(radius_coefficient: f64) -> Result<()> {
    if radius_coefficient.is_finite() && radius_coefficient > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            "radius_coefficient",
            &radius_coefficient,
            &"must be a positive finite number",
        ))
    }
}
