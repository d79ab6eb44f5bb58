//! CLI entry point for the tile ray tracer

use clap::Parser;
use tileray::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> tileray::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    let reports = processor.process()?;
    tracing::debug!(traces = reports.len(), "done");
    Ok(())
}
