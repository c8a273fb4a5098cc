//! subtok command-line entry point

use anyhow::Result;
use clap::Parser;
use subtok_cli::commands::Commands;

/// Multi-resolution subtoken extraction
#[derive(Debug, Parser)]
#[command(name = "subtok", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
