//! cnlex command-line entry point

use clap::Parser;
use cnlex_cli::commands::Commands;

/// Mixed-script word segmentation for CJK text
#[derive(Debug, Parser)]
#[command(name = "cnlex", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
