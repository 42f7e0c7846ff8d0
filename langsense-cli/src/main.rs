use clap::Parser;
use langsense_cli::commands::Commands;

/// Detect Hindi, English and Hinglish in short texts
#[derive(Debug, Parser)]
#[command(name = "langsense", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
