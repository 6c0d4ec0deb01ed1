//! Line-completion win detection.

use crate::board::{MainGrid, SubBoard};
use crate::types::{Cell, GridStatus, Player};
use tracing::instrument;

/// Checks if `player` owns a full row, column or diagonal of a sub-board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn sub_board_won(board: &SubBoard, player: Player) -> bool {
    board.any_line(|cell| *cell == Cell::Occupied(player))
}

/// Checks if `player` won every sub-board along some line of the main grid.
///
/// Owning a majority of sub-boards is not enough.
#[instrument(skip(main), fields(size = main.size()))]
pub fn main_grid_won(main: &MainGrid, player: Player) -> bool {
    main.any_line(|status| *status == GridStatus::Won(player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, lines};
    use crate::types::GridCoord;

    fn mark(board: &mut SubBoard, at: (usize, usize), player: Player) {
        if let Some(cell) = board.get_mut(at.into()) {
            *cell = Cell::Occupied(player);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Grid::filled(4, Cell::Empty);
        assert!(!sub_board_won(&board, Player::X));
        assert!(!sub_board_won(&board, Player::O));
    }

    #[test]
    fn test_top_row_three_by_three() {
        let mut board = Grid::filled(3, Cell::Empty);
        mark(&mut board, (0, 0), Player::X);
        mark(&mut board, (0, 1), Player::X);
        mark(&mut board, (0, 2), Player::X);
        assert!(sub_board_won(&board, Player::X));
        assert!(!sub_board_won(&board, Player::O));
    }

    #[test]
    fn test_every_line_detected() {
        for size in [3, 4, 5] {
            for line in lines(size) {
                let mut board = Grid::filled(size, Cell::Empty);
                for at in &line {
                    if let Some(cell) = board.get_mut(*at) {
                        *cell = Cell::Occupied(Player::O);
                    }
                }
                assert!(sub_board_won(&board, Player::O), "line {:?}", line);
                assert!(!sub_board_won(&board, Player::X));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Grid::filled(4, Cell::Empty);
        mark(&mut board, (1, 0), Player::X);
        mark(&mut board, (1, 1), Player::X);
        mark(&mut board, (1, 2), Player::O);
        mark(&mut board, (1, 3), Player::X);
        assert!(!sub_board_won(&board, Player::X));
    }

    #[test]
    fn test_partial_diagonal_is_not_a_win() {
        let mut board = Grid::filled(4, Cell::Empty);
        mark(&mut board, (0, 0), Player::O);
        mark(&mut board, (1, 1), Player::O);
        mark(&mut board, (2, 2), Player::O);
        assert!(!sub_board_won(&board, Player::O));
    }

    #[test]
    fn test_scattered_majority_does_not_win_main_grid() {
        let mut main = Grid::filled(3, GridStatus::Undecided);
        for at in [(0, 0), (0, 1), (1, 2), (2, 0), (2, 2)] {
            if let Some(status) = main.get_mut(GridCoord::from(at)) {
                *status = GridStatus::Won(Player::X);
            }
        }
        assert!(!main_grid_won(&main, Player::X));
    }

    #[test]
    fn test_main_grid_column() {
        let mut main = Grid::filled(4, GridStatus::Undecided);
        for row in 0..4 {
            if let Some(status) = main.get_mut(GridCoord::new(row, 1)) {
                *status = GridStatus::Won(Player::O);
            }
        }
        assert!(main_grid_won(&main, Player::O));
        assert!(!main_grid_won(&main, Player::X));
    }

    #[test]
    fn test_drawn_grid_breaks_line() {
        let mut main = Grid::filled(4, GridStatus::Undecided);
        for col in 0..4 {
            let status = if col == 2 {
                GridStatus::Drawn
            } else {
                GridStatus::Won(Player::X)
            };
            if let Some(slot) = main.get_mut(GridCoord::new(3, col)) {
                *slot = status;
            }
        }
        assert!(!main_grid_won(&main, Player::X));
    }
}
