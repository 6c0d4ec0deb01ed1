//! Engine states and the transitions reported by a played move.

use crate::types::{GridCoord, Player};
use serde::{Deserialize, Serialize};

/// Where the engine sits in its state machine.
///
/// A won sub-board is a transient step reported through
/// [`Transition::SubGridWon`]; the engine returns to `AwaitingMove` right
/// after unless the main grid is also won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EngineState {
    /// Waiting for the current player to move.
    #[default]
    AwaitingMove,
    /// The game has ended.
    Finished(Outcome),
}

impl EngineState {
    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, EngineState::Finished(_))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player owns a full line of sub-boards.
    Winner(Player),
    /// Every sub-board is decided and nobody owns a line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of playing one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Nothing was decided; the other player moves next.
    Continue,
    /// The move won its sub-board; the game goes on.
    SubGridWon {
        /// The sub-board that was won.
        grid: GridCoord,
        /// Its new owner.
        player: Player,
    },
    /// The move filled its sub-board with no line; the game goes on.
    SubGridDrawn {
        /// The sub-board that was drawn.
        grid: GridCoord,
    },
    /// The move won a line of sub-boards.
    GameWon {
        /// The sub-board whose win completed the line.
        grid: GridCoord,
        /// The winner.
        player: Player,
    },
    /// The move decided the last open sub-board without a main-grid line.
    GameDrawn {
        /// The sub-board decided last.
        grid: GridCoord,
    },
}

impl Transition {
    /// Returns true if this transition ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Transition::GameWon { .. } | Transition::GameDrawn { .. })
    }
}
