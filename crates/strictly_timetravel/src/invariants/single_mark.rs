//! Snapshot shape invariants: empty start, one new mark per step.

use super::Invariant;
use crate::{Board, GameHistory, Square};

/// Invariant: the first snapshot is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.board_history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: each snapshot adds exactly one mark to the previous one.
///
/// Exactly one square goes from empty to occupied; every other square is
/// unchanged. Marks are never overwritten or removed.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameHistory> for SingleMarkPerStepInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.board_history().windows(2).all(|pair| {
            let mut added = 0;
            for (before, after) in pair[0].squares().iter().zip(pair[1].squares()) {
                match (before, after) {
                    (b, a) if b == a => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameHistory::new();
        for square in [0, 4, 8] {
            game.handle_square_click(square);
        }
        assert!(StartsEmptyInvariant::holds(&game));
        assert!(SingleMarkPerStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = Board::new().with_mark(Position::Center, Player::O);
        let game = GameHistory::from_parts(vec![Board::new(), first, overwritten], 2);

        assert!(!SingleMarkPerStepInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let skipped = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        let game = GameHistory::from_parts(vec![Board::new(), skipped], 1);

        assert!(!SingleMarkPerStepInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let game = GameHistory::from_parts(vec![Board::new(), Board::new()], 0);
        assert!(!SingleMarkPerStepInvariant::holds(&game));
    }
}
