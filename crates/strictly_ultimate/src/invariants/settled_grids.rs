//! Settled grids invariant: main-grid statuses agree with sub-board contents.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules;
use crate::types::GridStatus;

/// Invariant: a sub-board marked won holds a line for its winner, and a
/// sub-board marked drawn is full with no line.
pub struct SettledGridsInvariant;

impl Invariant<GameEngine> for SettledGridsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        board.sub_boards().all(|(grid, sub)| match board.status(grid) {
            Some(GridStatus::Won(player)) => rules::sub_board_won(sub, player),
            Some(GridStatus::Drawn) => rules::is_sub_board_drawn(sub),
            Some(GridStatus::Undecided) => true,
            None => false,
        })
    }

    fn description() -> &'static str {
        "Decided sub-boards match their contents"
    }
}
