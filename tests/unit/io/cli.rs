//! Tests for command-line parsing and batch rendering

#[cfg(test)]
mod tests {
    use clap::Parser;
    use dotpattern::grid::GridShape;
    use dotpattern::io::cli::{Cli, PatternRenderer};
    use dotpattern::io::configuration::{DEFAULT_RADIUS_COEFFICIENT, DEFAULT_SEED};
    use dotpattern::pattern::{PatternKind, SamplingPolicy};
    use dotpattern::render::SurfaceSize;
    use std::path::PathBuf;

    // Tests parsing with only the required output argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "out.png"]);

        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.grid_shape(), GridShape::square(3));
        assert_eq!(cli.surface_size(), SurfaceSize::square(300));
        assert!((cli.radius_coefficient - DEFAULT_RADIUS_COEFFICIENT).abs() < f64::EPSILON);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.kind, PatternKind::Random);
        assert_eq!(cli.count, 1);
        assert!(!cli.colored);
        assert!(!cli.no_pattern);
        assert_eq!(cli.sampling_policy(), SamplingPolicy::Clamped);
    }

    // Tests parsing with every flag given
    // Verified by swapping the short flags for width and height
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "art/out.png",
            "-g",
            "5",
            "--rows",
            "2",
            "-w",
            "640",
            "-H",
            "480",
            "-r",
            "8",
            "-c",
            "-k",
            "max-complexity",
            "-s",
            "123",
            "-n",
            "3",
            "--no-pattern",
            "--inclusive-sampling",
            "--strict",
            "-q",
        ]);

        assert_eq!(cli.grid_shape(), GridShape::new(5, 2));
        assert_eq!(cli.surface_size(), SurfaceSize::new(640, 480));
        assert!((cli.radius_coefficient - 8.0).abs() < f64::EPSILON);
        assert!(cli.colored);
        assert_eq!(cli.kind, PatternKind::MaxComplexity);
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.count, 3);
        assert!(cli.no_pattern && cli.strict && cli.quiet);
        assert_eq!(cli.sampling_policy(), SamplingPolicy::Inclusive);

        let config = cli.grid_config();
        assert!(config.colored_dots);
        assert_eq!(config.shape, GridShape::new(5, 2));
    }

    // Tests a single surface dimension makes the surface square
    // Verified by defaulting the missing dimension to 300
    #[test]
    fn test_single_dimension_is_square() {
        let width_only = Cli::parse_from(["program", "out.png", "-w", "500"]);
        assert_eq!(width_only.surface_size(), SurfaceSize::square(500));

        let height_only = Cli::parse_from(["program", "out.png", "-H", "120"]);
        assert_eq!(height_only.surface_size(), SurfaceSize::square(120));
    }

    // Tests progress is only shown for batches that are not quiet
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        assert!(!Cli::parse_from(["program", "out.png"]).should_show_progress());
        assert!(Cli::parse_from(["program", "out.png", "-n", "4"]).should_show_progress());
        assert!(!Cli::parse_from(["program", "out.png", "-n", "4", "-q"]).should_show_progress());
    }

    // Tests batch file names are numbered and zero-padded
    // Verified by numbering files from zero
    #[test]
    fn test_output_paths() {
        let single = Cli::parse_from(["program", "dir/out.png"]);
        assert_eq!(single.output_paths(), vec![PathBuf::from("dir/out.png")]);

        let batch = Cli::parse_from(["program", "dir/out.png", "-n", "10"]);
        let paths = batch.output_paths();
        assert_eq!(paths.len(), 10);
        assert_eq!(paths.first(), Some(&PathBuf::from("dir/out_01.png")));
        assert_eq!(paths.last(), Some(&PathBuf::from("dir/out_10.png")));

        let no_extension = Cli::parse_from(["program", "grid", "-n", "2"]);
        assert_eq!(
            no_extension.output_paths(),
            vec![PathBuf::from("grid_1.png"), PathBuf::from("grid_2.png")]
        );
    }

    #[test]
    fn test_invalid_kind_is_rejected() {
        assert!(Cli::try_parse_from(["program", "out.png", "-k", "spiral"]).is_err());
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests the renderer refuses unusable parameters before rendering
    // Verified by skipping the count check in PatternRenderer::new
    #[test]
    fn test_renderer_rejects_invalid_parameters() {
        assert!(PatternRenderer::new(Cli::parse_from(["program", "out.png", "-n", "0"])).is_err());
        assert!(PatternRenderer::new(Cli::parse_from(["program", "out.png", "-g", "0"])).is_err());
        assert!(
            PatternRenderer::new(Cli::parse_from(["program", "out.png", "-r", "0"])).is_err()
        );
        assert!(
            PatternRenderer::new(Cli::parse_from([
                "program",
                "out.png",
                "--columns",
                "18446744073709551615",
                "--rows",
                "2",
            ]))
            .is_err()
        );
        assert!(
            PatternRenderer::new(Cli::parse_from(["program", "out.png", "-g", "100000"])).is_err()
        );
    }

    // Tests a batch writes one PNG per requested image
    // Verified by writing every image to the same path
    #[test]
    fn test_renderer_writes_batch() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("pattern.png");
        let cli = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "-n",
            "3",
            "-w",
            "60",
            "-q",
        ]);

        let mut renderer = PatternRenderer::new(cli).unwrap();
        let written = renderer.process().unwrap();

        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists(), "missing {}", path.display());
        }
        assert!(renderer.grid().active_pattern().is_some());
    }

    #[test]
    fn test_renderer_dots_only() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dots.png");
        let cli = Cli::parse_from(["program", output.to_str().unwrap(), "--no-pattern"]);

        let mut renderer = PatternRenderer::new(cli).unwrap();
        assert_eq!(renderer.process().unwrap(), vec![output.clone()]);
        assert!(output.exists());
        assert!(renderer.grid().active_pattern().is_none());
    }
}
