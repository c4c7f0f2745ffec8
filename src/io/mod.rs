//! Input/output, configuration and error handling

/// Command-line interface and batch rendering
pub mod cli;
/// Defaults, palette and output settings
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of rendered surfaces
pub mod image;
/// Logger initialization
pub mod logging;
/// Batch progress display
pub mod progress;
