//! Dot grid data structures and layout
//!
//! This module contains grid-related functionality including:
//! - Dots and their drawing
//! - Grid shape, indexing and placement formulas
//! - Coordinate-based dot coloring
//! - The dot pattern orchestrator owning a grid and its active pattern

/// Coordinate to color mapping for colored grids
pub mod color;
/// Single renderable dot
pub mod dot;
/// Grid orchestration and rendering
pub mod dot_pattern;
/// Grid shape, indexing and placement formulas
pub mod layout;

pub use dot::Dot;
pub use dot_pattern::{DotPattern, GridConfig};
pub use layout::GridShape;
