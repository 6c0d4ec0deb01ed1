//! Text rendering of the nested board.

use strictly_ultimate::{Cell, GameEngine, GridCoord, Player};
use tracing::instrument;

/// Symbol drawn for a cell.
pub fn symbol(cell: Cell) -> char {
    match cell.player() {
        None => '.',
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
    }
}

/// Formats a zero-based coordinate the way players type it (1-based).
pub fn label(at: GridCoord) -> String {
    format!("{},{}", at.row + 1, at.col + 1)
}

/// Renders the full board, bracketing the cells of the active sub-board.
///
/// Sub-boards in a row are separated by ` | ` and rows of sub-boards by a
/// dashed line.
#[instrument(skip(engine), fields(size = engine.size()))]
pub fn render_board(engine: &GameEngine, active: GridCoord) -> String {
    let n = engine.size();
    let mut out = format!("\nFull Board (Active grid: {})\n\n", label(active));

    for main_row in 0..n {
        for sub_row in 0..n {
            for main_col in 0..n {
                let grid = GridCoord::new(main_row, main_col);
                for sub_col in 0..n {
                    let cell = engine
                        .cell(grid, GridCoord::new(sub_row, sub_col))
                        .unwrap_or_default();
                    if grid == active {
                        out.push_str(&format!("[{}]", symbol(cell)));
                    } else {
                        out.push_str(&format!(" {} ", symbol(cell)));
                    }
                }
                if main_col + 1 < n {
                    out.push_str(" | ");
                }
            }
            out.push('\n');
        }
        if main_row + 1 < n {
            out.push_str(&"-".repeat(n * (n * 3 + 2) - 1));
            out.push('\n');
        }
    }
    out.push('\n');
    out
}
