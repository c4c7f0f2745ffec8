//! Tests for single dot drawing

#[cfg(test)]
mod tests {
    use dotpattern::grid::Dot;
    use dotpattern::render::{
        Color, DrawCommand, DrawState, Paint, Point, RasterSurface, RecordingSurface, Surface,
        SurfaceSize,
    };

    // Tests a dot fills one circle in its own color
    // Verified by drawing with the surface's current fill instead
    #[test]
    fn test_draw_fills_circle_in_dot_color() {
        let mut surface = RecordingSurface::new(SurfaceSize::square(100));
        surface.set_fill(Paint::Solid(Color::BLUE));

        let dot = Dot::new(Point::new(30.0, 40.0), 5.0, Color::RED);
        dot.draw(&mut surface);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillCircle {
                center: Point::new(30.0, 40.0),
                radius: 5.0,
                paint: Paint::Solid(Color::RED),
            }]
        );
    }

    // Tests the fill change does not outlive the draw call
    // Verified by removing the scoped state guard from Dot::draw
    #[test]
    fn test_draw_restores_surface_state() {
        let mut surface = RecordingSurface::new(SurfaceSize::square(100));
        let dot = Dot::new(Point::new(10.0, 10.0), 3.0, Color::MAGENTA);

        dot.draw(&mut surface);

        assert_eq!(surface.state(), &DrawState::default());
        assert_eq!(surface.states().depth(), 0);
    }

    #[test]
    fn test_accessors() {
        let dot = Dot::new(Point::new(1.0, 2.0), 3.0, Color::WHITE);
        assert_eq!(dot.position(), Point::new(1.0, 2.0));
        assert!((dot.radius() - 3.0).abs() < f64::EPSILON);
        assert_eq!(dot.color(), Color::WHITE);
    }

    // Tests degenerate radii draw nothing visible
    // Verified by letting negative radii reach the rasterizer span computation
    #[test]
    fn test_degenerate_radius_is_invisible() {
        let mut surface = RasterSurface::new(SurfaceSize::square(20));
        Dot::new(Point::new(10.0, 10.0), 0.0, Color::WHITE).draw(&mut surface);
        Dot::new(Point::new(10.0, 10.0), -4.0, Color::WHITE).draw(&mut surface);

        assert!(surface.image().pixels().all(|pixel| pixel.0[3] == 0));
    }
}
