//! Colors, gradients and stroke styles understood by every surface

use crate::render::surface::Point;
use std::fmt;

/// Straight-alpha RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 is opaque)
    pub a: u8,
}

impl Color {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque magenta
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Opaque blue
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque color from its three channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with an explicit alpha channel
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation towards `other`, with `t` clamped to `[0, 1]`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |from: u8, to: u8| {
            f64::from(to)
                .mul_add(t, f64::from(from) * (1.0 - t))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        Self(color.to_array())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self { r, g, b, a }
    }
}

/// A color pinned to an offset along a gradient axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the axis, in `[0, 1]`
    pub offset: f64,
    /// Color at that position
    pub color: Color,
}

/// Linear gradient between two points in surface coordinates
///
/// Points before `start` take the first stop's color and points past `end` take
/// the last stop's color (pad spread).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Axis start, where offset 0 lies
    pub start: Point,
    /// Axis end, where offset 1 lies
    pub end: Point,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Gradient along `start -> end` with no stops yet
    pub const fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Add a color stop, keeping stops ordered by offset
    ///
    /// Stops with equal offsets keep insertion order. Offsets are clamped to `[0, 1]`.
    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        let offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, 1.0)
        };
        let position = self
            .stops
            .iter()
            .position(|stop| stop.offset > offset)
            .unwrap_or(self.stops.len());
        self.stops.insert(position, ColorStop { offset, color });
        self
    }

    /// Stops in offset order
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at a point, projected onto the gradient axis
    pub fn color_at(&self, point: Point) -> Color {
        let axis_x = self.end.x - self.start.x;
        let axis_y = self.end.y - self.start.y;
        let length_squared = axis_x.mul_add(axis_x, axis_y * axis_y);

        let offset = if length_squared > 0.0 {
            (point.x - self.start.x).mul_add(axis_x, (point.y - self.start.y) * axis_y)
                / length_squared
        } else {
            0.0
        };

        self.color_at_offset(offset)
    }

    /// Color at an axis offset, interpolating between the surrounding stops
    pub fn color_at_offset(&self, offset: f64) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if offset.is_nan() || offset <= first.offset {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            if let [from, to] = pair {
                if offset <= to.offset {
                    let span = to.offset - from.offset;
                    let local = if span > 0.0 {
                        (offset - from.offset) / span
                    } else {
                        1.0
                    };
                    return from.color.lerp(to.color, local);
                }
            }
        }

        self.stops.last().map_or(first.color, |stop| stop.color)
    }
}

/// Source of color for fills and strokes
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// One color everywhere
    Solid(Color),
    /// Color varies along a linear axis
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Color this paint produces at a point
    pub fn color_at(&self, point: Point) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::LinearGradient(gradient) => gradient.color_at(point),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::WHITE)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Shape drawn at both ends of a stroked line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    /// The stroke ends flush with its endpoints
    #[default]
    Butt,
    /// A half-disc of half the line width closes each end
    Round,
    /// The stroke extends half the line width past each endpoint
    Square,
}
