//! First-class move types for ultimate tic-tac-toe.
//!
//! A move names the sub-board on the main grid and the cell inside it.
//! Moves can be validated before they are applied.

use crate::types::{GridCoord, GridStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their mark in one cell of one sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Sub-board position on the main grid.
    pub grid: GridCoord,
    /// Cell position inside the sub-board.
    pub cell: GridCoord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, grid: GridCoord, cell: GridCoord) -> Self {
        Self { player, grid, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> grid {} cell {}", self.player, self.grid, self.cell)
    }
}

/// Reason a move was rejected.
///
/// None of these are fatal: the caller re-prompts and tries again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate falls outside `[0, size)`.
    #[display("Coordinate {} is outside the {}x{} grid", coord, size, size)]
    OutOfRange {
        /// The offending coordinate.
        coord: GridCoord,
        /// Grid side length.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(GridCoord),

    /// The target sub-board was already won or drawn.
    #[display("Grid {} is already {}", grid, status)]
    GridDecided {
        /// The frozen sub-board.
        grid: GridCoord,
        /// Its recorded status.
        status: GridStatus,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_decided_message_names_winner() {
        let err = MoveError::GridDecided {
            grid: GridCoord::new(1, 2),
            status: GridStatus::Won(Player::O),
        };
        assert_eq!(err.to_string(), "Grid (1, 2) is already won by Player O");
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::X, GridCoord::new(0, 1), GridCoord::new(2, 3));
        assert_eq!(mv.to_string(), "X -> grid (0, 1) cell (2, 3)");
    }
}
