//! Command-line interface for the ultimate tic-tac-toe console.

use clap::Parser;

/// Strictly Ultimate - ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_ultimate_cli")]
#[command(about = "Play ultimate tic-tac-toe on an n×n grid of n×n boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size n (must be greater than 3). Prompted for if omitted.
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Seed for active-grid selection, to replay the same sequence of grids
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file providing `size` and `seed`
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}
