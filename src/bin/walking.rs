//! Random-walk value estimation CLI
//!
//! Estimates the state values of the uniform random walk with TD(0),
//! Monte Carlo, or both side by side.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "walking")]
#[command(version, about = "TD(0) and Monte Carlo prediction on a random walk", long_about = None)]
struct Cli {
    /// Log per-episode details
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run TD(0)
    Td0(walking::cli::commands::td0::Td0Args),

    /// Run Monte Carlo
    Mc(walking::cli::commands::mc::McArgs),

    /// Run TD(0) and Monte Carlo on the same episodes
    #[command(name = "td0-mc")]
    Td0Mc(walking::cli::commands::td0_mc::Td0McArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Td0(args) => walking::cli::commands::td0::execute(args).map(|_| ()),
        Commands::Mc(args) => walking::cli::commands::mc::execute(args).map(|_| ()),
        Commands::Td0Mc(args) => walking::cli::commands::td0_mc::execute(args).map(|_| ()),
    }
}
