//! utter command-line entry point

use anyhow::Result;
use clap::Parser;
use utter_cli::commands::Commands;

/// Split text into chunks for text-to-speech
#[derive(Debug, Parser)]
#[command(name = "utter", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
