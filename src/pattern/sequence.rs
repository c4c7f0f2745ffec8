use crate::grid::layout::GridShape;
use crate::pattern::validity::{AcceptAll, PatternValidator};
use std::fmt;

/// Ordered dot indices connected by the pattern, with the grid shape they target
///
/// Indices refer to the column-major flattening of a `grid_width x grid_height`
/// grid. Bounds are not enforced here; a renderer stops at the first index it
/// cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    grid_width: usize,
    grid_height: usize,
    points: Vec<usize>,
}

impl Pattern {
    /// Pattern over a grid of `grid_width` columns and `grid_height` rows
    pub const fn new(grid_width: usize, grid_height: usize, points: Vec<usize>) -> Self {
        Self {
            grid_width,
            grid_height,
            points,
        }
    }

    /// Pattern over a grid of the given shape
    pub const fn with_shape(shape: GridShape, points: Vec<usize>) -> Self {
        Self::new(shape.columns, shape.rows, points)
    }

    /// Column count of the target grid
    pub const fn grid_width(&self) -> usize {
        self.grid_width
    }

    /// Row count of the target grid
    pub const fn grid_height(&self) -> usize {
        self.grid_height
    }

    /// Shape of the target grid
    pub const fn shape(&self) -> GridShape {
        GridShape::new(self.grid_width, self.grid_height)
    }

    /// Dot indices in drawing order
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the pattern has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `index` appears anywhere in the pattern
    pub fn contains_point(&self, index: usize) -> bool {
        self.points.iter().any(|&point| point == index)
    }

    /// Check the pattern against the default rule
    ///
    /// The default is [`AcceptAll`], so this is currently always true. Minimum
    /// length and intermediate-point rules exist in [`crate::pattern::validity`]
    /// and are applied through [`Pattern::is_valid_with`].
    pub fn is_valid(&self) -> bool {
        self.is_valid_with(&AcceptAll)
    }

    /// Check the pattern against an arbitrary rule
    pub fn is_valid_with(&self, validator: &dyn PatternValidator) -> bool {
        validator.validate(self)
    }

    /// Consecutive index pairs, in drawing order
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.points.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.points.push(index);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.shape())?;
        for (position, point) in self.points.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str("]")
    }
}
