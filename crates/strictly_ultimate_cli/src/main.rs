//! Strictly Ultimate - console ultimate tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_ultimate_cli::{Cli, Console, GameConfig, run_session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(cli.size, cli.seed);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let end = run_session(&config, &mut console).context("Game session failed")?;
    info!(?end, "Session finished");

    Ok(())
}
