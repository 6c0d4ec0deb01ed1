//! First-class invariants for the ultimate tic-tac-toe engine.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and `GameEngine::play` checks them as
//! its postcondition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Implements [`InvariantSet`] for a tuple of invariants, reporting every
/// member that fails in tuple order.
macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod alternating_turn;
pub mod history_consistent;
pub mod settled_grids;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use settled_grids::SettledGridsInvariant;

/// Invariants that hold no matter how the caller orders turns.
pub type BoardInvariants = (HistoryConsistentInvariant, SettledGridsInvariant);

/// Every engine invariant, including strict turn alternation.
pub type UltimateInvariants = (
    HistoryConsistentInvariant,
    SettledGridsInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, GridCoord};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::with_seed(4, 1).expect("valid size");
        assert!(UltimateInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_play() {
        let mut engine = GameEngine::with_seed(4, 1).expect("valid size");
        engine
            .play(GridCoord::new(0, 0), GridCoord::new(1, 1))
            .expect("legal move");
        engine
            .play(GridCoord::new(2, 3), GridCoord::new(0, 0))
            .expect("legal move");
        assert!(UltimateInvariants::check_all(&engine).is_ok());
        assert!(BoardInvariants::check_all(&engine).is_ok());
    }

    struct Always;
    struct Never;

    impl Invariant<()> for Always {
        fn holds(_: &()) -> bool {
            true
        }

        fn description() -> &'static str {
            "always"
        }
    }

    impl Invariant<()> for Never {
        fn holds(_: &()) -> bool {
            false
        }

        fn description() -> &'static str {
            "never"
        }
    }

    #[test]
    fn test_invariant_set_reports_failures_in_order() {
        assert!(<(Always, Always)>::check_all(&()).is_ok());
        let violations = <(Never, Always, Never)>::check_all(&()).expect_err("two fail");
        assert_eq!(
            violations,
            vec![InvariantViolation::new("never"), InvariantViolation::new("never")]
        );
        let violations = <(Always, Never)>::check_all(&()).expect_err("one fails");
        assert_eq!(violations, vec![InvariantViolation::new("never")]);
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut engine = GameEngine::with_seed(4, 1).expect("valid size");
        // O moves first and a bogus winner is recorded.
        engine
            .apply_move(crate::Move::new(
                crate::Player::O,
                GridCoord::new(0, 0),
                GridCoord::new(0, 0),
            ))
            .expect("legal move");
        engine.mark_sub_grid_winner(GridCoord::new(1, 1), crate::Player::X);

        let violations = UltimateInvariants::check_all(&engine).expect_err("violations");
        assert_eq!(violations.len(), 2);
    }
}
