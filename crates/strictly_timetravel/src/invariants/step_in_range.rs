//! Current step invariant.

use super::Invariant;
use crate::GameHistory;

/// Invariant: the current step indexes an existing snapshot.
pub struct CurrentStepInRangeInvariant;

impl Invariant<GameHistory> for CurrentStepInRangeInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.current_step() < game.board_history().len()
    }

    fn description() -> &'static str {
        "Current step is within the history"
    }
}
