//! Dot grids with connect-the-dots patterns
//!
//! A [`grid::DotPattern`] lays out a grid of dots on a surface, optionally colored
//! by position. A [`pattern::PatternGenerator`] draws a random sequence of dot
//! indices from a seeded source, and the grid strokes that sequence from dot to dot
//! on any [`render::Surface`].

#![forbid(unsafe_code)]

/// Dot layout, coloring and the grid that owns the active pattern
pub mod grid;
/// Command line, configuration constants, errors, logging and image export
pub mod io;
/// Pattern sequences, kinds, validity rules and generation
pub mod pattern;
/// Paints, drawing surfaces and their scoped style state
pub mod render;

pub use io::error::{DotPatternError, Result};
