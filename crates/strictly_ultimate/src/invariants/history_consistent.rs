//! History consistency invariant: the move log matches board occupancy.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: every logged move is on the board, and nothing else is.
///
/// The number of occupied cells equals the log length and each logged
/// cell holds the logged player's mark. Since marks are never removed,
/// this also means cells never revert to empty.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let occupied: usize = board
            .sub_boards()
            .map(|(_, sub)| sub.values().filter(|cell| !cell.is_empty()).count())
            .sum();

        if occupied != engine.history().len() {
            return false;
        }

        engine
            .history()
            .iter()
            .all(|mv| board.cell(mv.grid, mv.cell) == Some(Cell::Occupied(mv.player)))
    }

    fn description() -> &'static str {
        "Move history matches occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridCoord, Move, Player};

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::with_seed(4, 3).expect("valid size");
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_applied_moves_hold() {
        let mut engine = GameEngine::with_seed(4, 3).expect("valid size");
        for (i, player) in [Player::X, Player::O, Player::X].into_iter().enumerate() {
            engine
                .apply_move(Move::new(player, GridCoord::new(i, 0), GridCoord::new(0, i)))
                .expect("legal move");
        }
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 3);
    }

    #[test]
    fn test_rejected_move_is_not_logged() {
        let mut engine = GameEngine::with_seed(4, 3).expect("valid size");
        let mv = Move::new(Player::X, GridCoord::new(0, 0), GridCoord::new(0, 0));
        engine.apply_move(mv).expect("legal move");
        assert!(engine.apply_move(mv).is_err());
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 1);
    }
}
