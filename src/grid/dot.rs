use crate::render::paint::{Color, Paint};
use crate::render::surface::{Point, ScopedState, Surface};

/// A single dot of the grid
///
/// Dots are built during grid generation and never change afterwards; a layout
/// change rebuilds all of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    position: Point,
    radius: f64,
    color: Color,
}

impl Dot {
    /// Create a dot
    ///
    /// A non-positive radius is accepted and draws nothing visible.
    pub const fn new(position: Point, radius: f64, color: Color) -> Self {
        Self {
            position,
            radius,
            color,
        }
    }

    /// Centre of the dot in surface coordinates
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Radius in pixels
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Fill color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Fill a circle for this dot, leaving the surface's fill style untouched
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let mut scoped = ScopedState::new(surface);
        scoped.set_fill(Paint::Solid(self.color));
        scoped.fill_circle(self.position, self.radius);
    }
}
