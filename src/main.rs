//! CLI entry point rendering dot grids and random patterns to PNG files

use clap::Parser;
use dotpattern::io::cli::{Cli, PatternRenderer};
use dotpattern::io::logging::{LoggingConfig, init_logging};

fn main() -> dotpattern::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::for_cli(cli.quiet));

    let mut renderer = PatternRenderer::new(cli)?;
    renderer.process().map(|_| ())
}
