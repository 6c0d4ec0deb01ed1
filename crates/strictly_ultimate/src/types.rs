//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player whose mark is in the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

/// Status of one sub-board as recorded on the main grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridStatus {
    /// Sub-board still accepts moves.
    #[default]
    Undecided,
    /// Sub-board was won by a player and is frozen.
    Won(Player),
    /// Sub-board filled up with no completed line and is frozen.
    Drawn,
}

impl GridStatus {
    /// Returns true while the sub-board accepts moves.
    pub fn is_undecided(self) -> bool {
        matches!(self, GridStatus::Undecided)
    }

    /// Returns the winner of the sub-board, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GridStatus::Won(player) => Some(player),
            GridStatus::Undecided | GridStatus::Drawn => None,
        }
    }
}

impl std::fmt::Display for GridStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridStatus::Undecided => write!(f, "undecided"),
            GridStatus::Won(player) => write!(f, "won by Player {}", player),
            GridStatus::Drawn => write!(f, "drawn"),
        }
    }
}

/// Zero-based (row, col) coordinate inside an n×n grid.
///
/// Used both for a sub-board's place on the main grid and for a cell
/// inside a sub-board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct GridCoord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl GridCoord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_grid_status_winner() {
        assert_eq!(GridStatus::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(GridStatus::Drawn.winner(), None);
        assert!(GridStatus::default().is_undecided());
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Occupied(Player::X).player(), Some(Player::X));
        assert_eq!(Cell::Empty.player(), None);
        assert!(Cell::default().is_empty());
    }
}
