//! Tests for colors, gradients and paints

#[cfg(test)]
mod tests {
    use dotpattern::render::{Color, LineCap, LinearGradient, Paint, Point};

    fn pattern_gradient() -> LinearGradient {
        LinearGradient::new(Point::new(300.0, 0.0), Point::new(0.0, 300.0))
            .with_stop(0.0, Color::RED)
            .with_stop(0.5, Color::MAGENTA)
            .with_stop(1.0, Color::BLUE)
    }

    // Tests the gradient endpoints take the first and last stop colors
    // Verified by measuring offsets from the end point
    #[test]
    fn test_gradient_endpoints() {
        let gradient = pattern_gradient();

        assert_eq!(gradient.color_at(Point::new(300.0, 0.0)), Color::RED);
        assert_eq!(gradient.color_at(Point::new(0.0, 300.0)), Color::BLUE);
        assert_eq!(gradient.color_at(Point::new(150.0, 150.0)), Color::MAGENTA);
    }

    // Tests points off the axis project onto it and pad beyond the ends
    // Verified by using the distance from start instead of the projection
    #[test]
    fn test_gradient_projection_and_padding() {
        let gradient = pattern_gradient();

        // Both points project onto the axis midpoint
        assert_eq!(gradient.color_at(Point::new(0.0, 0.0)), Color::MAGENTA);
        assert_eq!(gradient.color_at(Point::new(300.0, 300.0)), Color::MAGENTA);

        assert_eq!(gradient.color_at(Point::new(600.0, -300.0)), Color::RED);
        assert_eq!(gradient.color_at(Point::new(-50.0, 400.0)), Color::BLUE);
    }

    #[test]
    fn test_gradient_interpolates_between_stops() {
        let gradient = LinearGradient::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0))
            .with_stop(0.0, Color::rgb(0, 0, 0))
            .with_stop(1.0, Color::rgb(200, 100, 50));

        assert_eq!(
            gradient.color_at(Point::new(50.0, 10.0)),
            Color::rgb(100, 50, 25)
        );
        assert_eq!(gradient.color_at_offset(0.25), Color::rgb(50, 25, 13));
    }

    // Tests stops stay sorted regardless of insertion order
    // Verified by appending stops without sorting
    #[test]
    fn test_stops_are_sorted_and_clamped() {
        let gradient = LinearGradient::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
            .with_stop(1.0, Color::BLUE)
            .with_stop(-2.0, Color::RED)
            .with_stop(0.5, Color::MAGENTA);

        let offsets: Vec<f64> = gradient.stops().iter().map(|stop| stop.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(gradient.stops().first().map(|stop| stop.color), Some(Color::RED));
    }

    #[test]
    fn test_degenerate_gradients() {
        let empty = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(empty.color_at(Point::new(5.0, 0.0)), Color::TRANSPARENT);

        let zero_axis = LinearGradient::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0))
            .with_stop(0.0, Color::RED)
            .with_stop(1.0, Color::BLUE);
        assert_eq!(zero_axis.color_at(Point::new(9.0, 9.0)), Color::RED);
    }

    #[test]
    fn test_color_lerp_clamps() {
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 1.0), Color::BLUE);
        assert_eq!(Color::RED.lerp(Color::BLUE, 4.0), Color::BLUE);
        assert_eq!(Color::RED.lerp(Color::BLUE, f64::NAN), Color::RED);
    }

    #[test]
    fn test_paint_and_color_conversions() {
        assert_eq!(Paint::default(), Paint::Solid(Color::WHITE));
        assert_eq!(Paint::from(Color::RED), Paint::Solid(Color::RED));
        assert_eq!(Paint::Solid(Color::BLUE).color_at(Point::new(1.0, 2.0)), Color::BLUE);

        let pixel = image::Rgba::<u8>::from(Color::rgba(1, 2, 3, 4));
        assert_eq!(pixel.0, [1, 2, 3, 4]);
        assert_eq!(Color::from(pixel), Color::rgba(1, 2, 3, 4));
        assert_eq!(Color::MAGENTA.to_string(), "rgba(255,0,255,255)");
        assert_eq!(LineCap::default(), LineCap::Butt);
    }
}
