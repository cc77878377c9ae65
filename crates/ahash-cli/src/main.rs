//! ahash: hash every file in a directory into a dated report

use ahash_cli::commands;
use ahash_cli::logging::setup_logging;
use ahash_cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.into_config()?;
    commands::hash::run(&config)
}
