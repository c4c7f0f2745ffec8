//! Tests for logger configuration

#[cfg(test)]
mod tests {
    use dotpattern::io::logging::{LoggingConfig, init_logging};
    use log::LevelFilter;

    // Tests quiet runs only report warnings
    // Verified by ignoring the quiet flag
    #[test]
    fn test_cli_levels() {
        assert_eq!(LoggingConfig::for_cli(false).default_level, LevelFilter::Info);
        assert_eq!(LoggingConfig::for_cli(true).default_level, LevelFilter::Warn);
        assert!(LoggingConfig::default().env_filter.is_none());
    }

    // Tests repeated initialization is harmless
    // Verified by calling try_init outside the Once guard
    #[test]
    fn test_init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            env_filter: Some("dotpattern=debug".to_string()),
            ..LoggingConfig::default()
        });
        log::debug!("still usable after repeated initialization");
    }
}
