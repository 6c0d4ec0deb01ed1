//! Draw detection for sub-boards and the main grid.

use super::win::sub_board_won;
use crate::board::{MainGrid, SubBoard};
use crate::types::Player;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if every cell of the sub-board holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &SubBoard) -> bool {
    board.values().all(|cell| !cell.is_empty())
}

/// A full sub-board with no completed line for either player.
#[instrument(skip(board))]
pub fn is_sub_board_drawn(board: &SubBoard) -> bool {
    is_full(board) && Player::iter().all(|player| !sub_board_won(board, player))
}

/// Checks if no sub-board on the main grid is still undecided.
#[instrument(skip(main))]
pub fn is_exhausted(main: &MainGrid) -> bool {
    main.values().all(|status| !status.is_undecided())
}
