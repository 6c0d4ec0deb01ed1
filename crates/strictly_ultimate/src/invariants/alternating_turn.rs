//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern and the current player
/// must be the next one in that pattern. Only holds when the caller toggles
/// exactly once per accepted move, as `GameEngine::play` does.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|mv| mv.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        // The winning mover stays current once the game is over.
        let expected = match (engine.state().is_finished(), history.last()) {
            (true, Some(last)) => last.player,
            (_, Some(last)) => last.player.opponent(),
            (_, None) => Player::X,
        };

        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridCoord, Move};

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::with_seed(4, 5).expect("valid size");
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_played_sequence_holds() {
        let mut engine = GameEngine::with_seed(4, 5).expect("valid size");
        for i in 0..4 {
            engine
                .play(GridCoord::new(i, i), GridCoord::new(0, 0))
                .expect("legal move");
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_missing_toggle_violates() {
        let mut engine = GameEngine::with_seed(4, 5).expect("valid size");
        engine
            .apply_move(Move::new(Player::X, GridCoord::new(0, 0), GridCoord::new(0, 0)))
            .expect("legal move");
        assert!(!AlternatingTurnInvariant::holds(&engine));
        engine.toggle_player();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }
}
