//! Software rasterizer drawing into an RGBA image buffer

use crate::render::paint::{Color, LineCap, Paint};
use crate::render::surface::{Point, StateStack, Surface, SurfaceSize};
use image::{Rgba, RgbaImage};
use std::ops::Range;

/// Surface backed by an [`RgbaImage`] with a transparent background
///
/// Shapes are anti-aliased by approximating per-pixel coverage from the signed
/// distance between the pixel centre and the shape edge.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    states: StateStack,
}

impl RasterSurface {
    /// Transparent surface of the given size
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            image: RgbaImage::new(size.width, size.height),
            states: StateStack::new(),
        }
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the surface, keeping its pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Color of one pixel, if inside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|pixel| Color::from(*pixel))
    }

    /// Replace the pixel buffer with a transparent one of a new size
    ///
    /// Style state is kept.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.image = RgbaImage::new(size.width, size.height);
    }

    /// Blend `paint` into every pixel of the span whose coverage is positive
    fn paint_region(
        &mut self,
        columns: Range<u32>,
        rows: Range<u32>,
        paint: &Paint,
        signed_distance: impl Fn(Point) -> f64,
    ) {
        for y in rows {
            for x in columns.clone() {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let coverage = coverage(signed_distance(center));
                if coverage <= 0.0 {
                    continue;
                }
                if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                    blend(pixel, paint.color_at(center), coverage);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.image.width(), self.image.height())
    }

    fn states(&self) -> &StateStack {
        &self.states
    }

    fn states_mut(&mut self) -> &mut StateStack {
        &mut self.states
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(Color::TRANSPARENT.to_array());
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }

        let columns = pixel_span(center.x - radius, center.x + radius, self.image.width());
        let rows = pixel_span(center.y - radius, center.y + radius, self.image.height());
        let paint = self.states.current().fill.clone();

        self.paint_region(columns, rows, &paint, |point| {
            point.distance(center) - radius
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let state = self.states.current();
        let half_width = state.line_width / 2.0;
        if !(half_width.is_finite() && half_width > 0.0) {
            return;
        }
        let cap = state.line_cap;
        let paint = state.stroke.clone();

        let length = from.distance(to);
        if length <= 0.0 && cap == LineCap::Butt {
            return;
        }
        // Zero-length square caps fall back to a horizontal axis.
        let (direction_x, direction_y) = if length > 0.0 {
            ((to.x - from.x) / length, (to.y - from.y) / length)
        } else {
            (1.0, 0.0)
        };
        let extension = if cap == LineCap::Square {
            half_width
        } else {
            0.0
        };

        let reach = half_width + extension;
        let columns = pixel_span(
            from.x.min(to.x) - reach,
            from.x.max(to.x) + reach,
            self.image.width(),
        );
        let rows = pixel_span(
            from.y.min(to.y) - reach,
            from.y.max(to.y) + reach,
            self.image.height(),
        );

        self.paint_region(columns, rows, &paint, |point| {
            let offset_x = point.x - from.x;
            let offset_y = point.y - from.y;
            let along = offset_x.mul_add(direction_x, offset_y * direction_y);

            if cap == LineCap::Round {
                let clamped = along.clamp(0.0, length);
                let nearest = Point::new(
                    direction_x.mul_add(clamped, from.x),
                    direction_y.mul_add(clamped, from.y),
                );
                return point.distance(nearest) - half_width;
            }

            let across = offset_x.mul_add(direction_y, -offset_y * direction_x).abs();
            let beyond_ends = (-(along + extension)).max(along - (length + extension));
            (across - half_width).max(beyond_ends)
        });
    }
}

/// Approximate pixel coverage from the signed distance of its centre to an edge
fn coverage(signed_distance: f64) -> f64 {
    if signed_distance.is_nan() {
        return 0.0;
    }
    (0.5 - signed_distance).clamp(0.0, 1.0)
}

/// Range of pixel indices touched by `[min, max]`, clipped to `[0, limit)`
fn pixel_span(min: f64, max: f64, limit: u32) -> Range<u32> {
    let start = (min - 1.0).floor().clamp(0.0, f64::from(limit)) as u32;
    let end = (max + 1.0).ceil().clamp(0.0, f64::from(limit)) as u32;
    start..end.max(start)
}

/// Source-over compositing of straight-alpha colors
fn blend(destination: &mut Rgba<u8>, source: Color, coverage: f64) {
    let source_alpha = f64::from(source.a) / 255.0 * coverage;
    let [dr, dg, db, da] = destination.0;
    let destination_alpha = f64::from(da) / 255.0;
    let out_alpha = destination_alpha.mul_add(1.0 - source_alpha, source_alpha);

    if out_alpha <= 0.0 {
        *destination = Rgba(Color::TRANSPARENT.to_array());
        return;
    }

    let channel = |src: u8, dst: u8| {
        let value = f64::from(src).mul_add(
            source_alpha,
            f64::from(dst) * destination_alpha * (1.0 - source_alpha),
        ) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    *destination = Rgba([
        channel(source.r, dr),
        channel(source.g, dg),
        channel(source.b, db),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}
