//! Logger initialization for the command-line tool

use log::LevelFilter;
use std::sync::Once;

/// Logger configuration
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "dotpattern=debug"). When absent, `RUST_LOG` is consulted before falling back
/// to `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter directives
    pub env_filter: Option<String>,
    /// Level used when neither an explicit filter nor `RUST_LOG` is set
    pub default_level: LevelFilter,
    /// ANSI coloring behavior
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Configuration for the CLI; quiet runs only report warnings
    pub fn for_cli(quiet: bool) -> Self {
        Self {
            default_level: if quiet {
                LevelFilter::Warn
            } else {
                LevelFilter::Info
            },
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Initialize the global logger once
///
/// Subsequent calls are ignored, as is a logger installed by someone else.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
