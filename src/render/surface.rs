//! Drawing surface abstraction with scoped style state
//!
//! A [`Surface`] is the sink every drawing operation writes to. Style changes
//! (fill, stroke, line width, line cap) live in a [`DrawState`] that can be saved
//! and restored, so an operation can change styles without leaking them to the
//! caller. [`ScopedState`] ties a save to a restore on drop.

use crate::render::paint::{LineCap, Paint};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Position in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl SurfaceSize {
    /// Create a size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square size
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Width as a float, for layout math
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float, for layout math
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

impl fmt::Display for SurfaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Style state applied to fills and strokes
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    /// Paint used by fills
    pub fill: Paint,
    /// Paint used by strokes
    pub stroke: Paint,
    /// Stroke width in pixels
    pub line_width: f64,
    /// Stroke end shape
    pub line_cap: LineCap,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Paint::default(),
            stroke: Paint::default(),
            line_width: 1.0,
            line_cap: LineCap::default(),
        }
    }
}

/// Current style state plus the stack of saved states
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    /// Stack holding only the default state
    pub fn new() -> Self {
        Self::default()
    }

    /// State in effect
    pub const fn current(&self) -> &DrawState {
        &self.current
    }

    /// Mutable access to the state in effect
    pub const fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    /// Push a copy of the current state
    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Pop the most recently saved state; does nothing when none is saved
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    /// Number of saved states
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// Sink for draw primitives
///
/// Implementors own a [`StateStack`] and expose it through [`Surface::states`] and
/// [`Surface::states_mut`]; the style setters and save/restore are provided on top.
pub trait Surface {
    /// Surface dimensions
    fn size(&self) -> SurfaceSize;

    /// Style state stack
    fn states(&self) -> &StateStack;

    /// Mutable style state stack
    fn states_mut(&mut self) -> &mut StateStack;

    /// Erase every pixel of the surface
    fn clear(&mut self);

    /// Fill a circle with the current fill paint
    fn fill_circle(&mut self, center: Point, radius: f64);

    /// Stroke a straight line with the current stroke paint, width and cap
    fn stroke_line(&mut self, from: Point, to: Point);

    /// Style state in effect
    fn state(&self) -> &DrawState {
        self.states().current()
    }

    /// Mutable style state in effect
    fn state_mut(&mut self) -> &mut DrawState {
        self.states_mut().current_mut()
    }

    /// Save the current style state
    fn save(&mut self) {
        self.states_mut().save();
    }

    /// Restore the last saved style state
    fn restore(&mut self) {
        self.states_mut().restore();
    }

    /// Set the fill paint
    fn set_fill(&mut self, paint: Paint) {
        self.state_mut().fill = paint;
    }

    /// Set the stroke paint
    fn set_stroke(&mut self, paint: Paint) {
        self.state_mut().stroke = paint;
    }

    /// Set the stroke width
    fn set_line_width(&mut self, width: f64) {
        self.state_mut().line_width = width;
    }

    /// Set the stroke end shape
    fn set_line_cap(&mut self, cap: LineCap) {
        self.state_mut().line_cap = cap;
    }
}

/// Saves a surface's style state on creation and restores it on drop
///
/// Derefs to the surface, so drawing goes through the guard:
///
/// ```
/// use dotpattern::render::{Color, Paint, Point, RecordingSurface, ScopedState, Surface, SurfaceSize};
///
/// let mut surface = RecordingSurface::new(SurfaceSize::square(10));
/// {
///     let mut scoped = ScopedState::new(&mut surface);
///     scoped.set_fill(Paint::Solid(Color::RED));
///     scoped.fill_circle(Point::new(5.0, 5.0), 2.0);
/// }
/// assert_eq!(surface.state().fill, Paint::Solid(Color::WHITE));
/// ```
pub struct ScopedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> ScopedState<'a, S> {
    /// Save the surface state and guard it until drop
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for ScopedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for ScopedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ScopedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
