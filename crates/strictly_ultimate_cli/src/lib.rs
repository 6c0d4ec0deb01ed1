//! Console front end for ultimate tic-tac-toe.
//!
//! Drives a [`strictly_ultimate::GameEngine`] from a line-oriented console:
//! picks the active sub-board each turn, renders the nested board and reads
//! 1-based moves until someone wins, the board is drawn or the player quits.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod orchestrator;
mod render;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, validate_size};

// Crate-level exports - Console loop
pub use console::Console;
pub use orchestrator::{GameEnd, SessionError, run_game, run_session};
pub use render::{label, render_board, symbol};
