//! Strictly Ultimate - ultimate tic-tac-toe game logic
//!
//! An n×n main grid of n×n sub-boards. A player wins a sub-board by
//! completing a row, column or diagonal inside it, and wins the game by
//! owning a full line of sub-boards on the main grid.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, turn and move log
//! - **Rules**: pure line-completion and draw checks
//! - **Invariants**: properties `GameEngine::play` re-checks after every move
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::{GameEngine, GridCoord, Transition};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = GameEngine::with_seed(4, 42)?;
//! let grid = engine.select_active_grid().expect("fresh board has open grids");
//! let transition = engine.play(grid, GridCoord::new(0, 0))?;
//! assert_eq!(transition, Transition::Continue);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod grid;
mod phases;
mod rng;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Board storage
pub use board::{Board, MainGrid, SubBoard};
pub use grid::{Grid, lines};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};
pub use error::{EngineError, EngineErrorKind};

// Crate-level exports - State machine
pub use phases::{EngineState, Outcome, Transition};

// Crate-level exports - Core types
pub use rng::GridRng;
pub use types::{Cell, GridCoord, GridStatus, Player};
