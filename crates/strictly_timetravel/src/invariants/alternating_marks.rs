//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameHistory, Player};

/// Invariant: the mark added at step `i` is X for odd `i`, O for even `i`.
///
/// Steps that do not add exactly one mark are left to
/// [`SingleMarkPerStepInvariant`](super::SingleMarkPerStepInvariant).
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.board_history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = if i % 2 == 0 { Player::X } else { Player::O };
                pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after)
                    .all(|(_, after)| after.player() == Some(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
