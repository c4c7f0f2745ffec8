//! Drawing primitives and the surfaces that consume them
//!
//! This module contains rendering-related functionality including:
//! - Colors, gradients and line caps
//! - The surface trait and its save/restore style state
//! - A raster surface producing RGBA images
//! - A recording surface logging every primitive

/// Colors, gradients, paints and line caps
pub mod paint;
/// Software rasterizer surface
pub mod raster;
/// Command-recording surface
pub mod recording;
/// Surface trait, geometry and style state
pub mod surface;

pub use paint::{Color, ColorStop, LineCap, LinearGradient, Paint};
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawState, Point, ScopedState, StateStack, Surface, SurfaceSize};
