//! Video Catalog command-line entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use video_catalog::cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("video_catalog=info".parse()?))
        .init();

    cli::run_command(&args)
}
