//! Deterministic mapping from grid coordinates to dot colors

use crate::grid::layout::GridShape;
use crate::render::paint::Color;
use num_traits::clamp;

/// Color for a point in grid space
///
/// With `x` and `y` measured in cells (a dot sits at `column + 0.5`, `row + 0.5`):
///
/// - red is `x / columns * 255`
/// - blue is `y / rows * 255`
/// - green is the unclamped red value divided by the unclamped blue value
///
/// Every channel is clamped to `[0, 255]` and rounded. At `y == 0` the green
/// division has no finite result: a `0 / 0` ratio yields 0 and a positive ratio
/// over zero saturates at 255.
pub fn coordinate_color(x: f64, y: f64, shape: GridShape) -> Color {
    let red = x / shape.columns as f64 * 255.0;
    let blue = y / shape.rows as f64 * 255.0;
    let green = red / blue;

    Color::rgb(channel(red), channel(green), channel(blue))
}

/// Clamp a channel value into a byte; NaN maps to 0
fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    clamp(value, 0.0, 255.0).round() as u8
}
