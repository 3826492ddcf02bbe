//! Unpak CLI - Command-line utility for probing and extracting package
//! archives.

mod cli;
mod commands;
mod error;
mod progress;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Extract(args) => commands::extract::execute(args, cli.quiet),
        cli::Commands::Probe(args) => commands::probe::execute(args, cli.quiet),
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the level to
/// debug and `--quiet` lowers it to errors only. Diagnostics go to stderr
/// so stdout stays clean for command output.
fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
