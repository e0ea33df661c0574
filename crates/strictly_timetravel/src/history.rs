//! Game state and move history.
//!
//! [`GameHistory`] is the single owner of every snapshot played so far and of
//! the step currently on display. Frontends read derived values from it and
//! feed clicks back through [`GameHistory::handle_square_click`] and
//! [`GameHistory::handle_step_click`]; they never mutate the history directly.
//!
//! Invalid clicks are not errors. They come back as `Ignored` outcomes so the
//! caller can log them, and leave the state untouched.

use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::status::{BoardStatus, evaluate};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a square click left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// Index is not a board square.
    #[display("Square {} is off the board", _0)]
    OutOfRange(usize),
    /// Square already carries a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The displayed snapshot already has a winner.
    #[display("Game already won by {}", _0)]
    GameWon(Player),
}

/// Result of [`GameHistory::handle_square_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareClick {
    /// A mark was placed and appended as a new step.
    Placed {
        /// Who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
        /// Index of the new snapshot.
        step: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl SquareClick {
    /// True if the click produced a new snapshot.
    pub fn is_placed(&self) -> bool {
        matches!(self, SquareClick::Placed { .. })
    }
}

/// Result of [`GameHistory::handle_step_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepClick {
    /// The displayed step changed (or was re-selected).
    Moved {
        /// Step shown before the click.
        from: usize,
        /// Step shown now.
        to: usize,
    },
    /// Requested step does not exist.
    Ignored {
        /// Requested step.
        step: usize,
        /// Number of snapshots available.
        len: usize,
    },
}

/// Deserialized history that broke at least one history invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game history: {} invariant(s) violated", violations.len())]
pub struct InvalidHistory {
    /// Every invariant the input broke.
    pub violations: Vec<InvariantViolation>,
}

/// Linear history of board snapshots with a movable current step.
///
/// Index 0 is always the empty board. Each later snapshot adds exactly one
/// mark to the one before it. Playing from an earlier step discards every
/// snapshot after it.
///
/// Deserializing checks the same invariants and rejects input that breaks
/// any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current_step: usize,
}

#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    current_step: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = InvalidHistory;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let game = Self {
            snapshots: raw.snapshots,
            current_step: raw.current_step,
        };
        HistoryInvariants::check_all(&game)
            .map_err(|violations| InvalidHistory { violations })?;
        Ok(game)
    }
}

impl GameHistory {
    /// Starts a game: one empty snapshot, step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_step: 0,
        }
    }

    /// The snapshot at the current step.
    pub fn board_value(&self) -> &Board {
        &self.snapshots[self.current_step]
    }

    /// Status of the snapshot at the current step.
    pub fn board_status(&self) -> BoardStatus {
        evaluate(self.board_value())
    }

    /// Every snapshot, oldest first.
    pub fn board_history(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// True when the displayed snapshot is the newest one.
    pub fn is_at_latest(&self) -> bool {
        self.current_step == self.latest_step()
    }

    /// The player who marks on the next valid click.
    pub fn next_player(&self) -> Player {
        self.board_value().next_player()
    }

    /// Places the mover's mark on `square` (0-8) of the displayed snapshot.
    ///
    /// Ignored when the index is off the board, the square is taken, or the
    /// displayed snapshot is already won. Otherwise any snapshots after the
    /// current step are dropped, the new one is appended, and it becomes the
    /// current step.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn handle_square_click(&mut self, square: usize) -> SquareClick {
        let Some(position) = Position::from_index(square) else {
            debug!(square, "Click outside the board ignored");
            return SquareClick::Ignored(IgnoreReason::OutOfRange(square));
        };

        let board = *self.board_value();

        if let BoardStatus::Winner { player } = evaluate(&board) {
            debug!(%position, winner = %player, "Click after game end ignored");
            return SquareClick::Ignored(IgnoreReason::GameWon(player));
        }

        if !board.is_empty(position) {
            debug!(%position, "Click on occupied square ignored");
            return SquareClick::Ignored(IgnoreReason::Occupied(position));
        }

        let player = board.next_player();
        let next = board.with_mark(position, player);

        let discarded = self.snapshots.len() - (self.current_step + 1);
        self.snapshots.truncate(self.current_step + 1);
        self.snapshots.push(next);
        self.current_step = self.latest_step();

        debug!(
            %player,
            %position,
            step = self.current_step,
            discarded,
            "Mark placed"
        );
        self.debug_check();

        SquareClick::Placed {
            player,
            position,
            step: self.current_step,
        }
    }

    /// Displays snapshot `step` without touching the history.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn handle_step_click(&mut self, step: usize) -> StepClick {
        let len = self.snapshots.len();
        if step >= len {
            debug!(step, len, "Jump to missing step ignored");
            return StepClick::Ignored { step, len };
        }

        let from = self.current_step;
        self.current_step = step;
        debug!(from, to = step, "Jumped to step");
        self.debug_check();

        StepClick::Moved { from, to: step }
    }

    fn debug_check(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
    }

    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current_step: usize) -> Self {
        Self {
            snapshots,
            current_step,
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(squares: &[usize]) -> GameHistory {
        let mut game = GameHistory::new();
        for &square in squares {
            assert!(game.handle_square_click(square).is_placed());
        }
        game
    }

    #[test]
    fn test_new_game_starts_empty() {
        let game = GameHistory::new();
        assert_eq!(game.board_history(), &[Board::new()]);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.board_status(), BoardStatus::Next { player: Player::X });
    }

    #[test]
    fn test_moves_alternate() {
        let mut game = GameHistory::new();
        assert_eq!(
            game.handle_square_click(4),
            SquareClick::Placed {
                player: Player::X,
                position: Position::Center,
                step: 1
            }
        );
        assert_eq!(
            game.handle_square_click(0),
            SquareClick::Placed {
                player: Player::O,
                position: Position::TopLeft,
                step: 2
            }
        );
        assert_eq!(game.board_value().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = play(&[4]);
        let before = game.clone();

        assert_eq!(
            game.handle_square_click(4),
            SquareClick::Ignored(IgnoreReason::Occupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_square_is_ignored() {
        let mut game = GameHistory::new();
        assert_eq!(
            game.handle_square_click(9),
            SquareClick::Ignored(IgnoreReason::OutOfRange(9))
        );
        assert_eq!(game.board_history().len(), 1);
    }

    #[test]
    fn test_play_after_win_is_ignored() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(game.board_status(), BoardStatus::Winner { player: Player::X });

        let before = game.clone();
        assert_eq!(
            game.handle_square_click(8),
            SquareClick::Ignored(IgnoreReason::GameWon(Player::X))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_step_click_keeps_history() {
        let mut game = play(&[0, 1, 2]);
        assert_eq!(game.handle_step_click(1), StepClick::Moved { from: 3, to: 1 });
        assert_eq!(game.board_history().len(), 4);
        assert_eq!(game.current_step(), 1);
        assert!(!game.is_at_latest());
        assert_eq!(game.board_value().filled_count(), 1);
    }

    #[test]
    fn test_step_click_out_of_range_is_ignored() {
        let mut game = play(&[0]);
        assert_eq!(game.handle_step_click(5), StepClick::Ignored { step: 5, len: 2 });
        assert_eq!(game.current_step(), 1);
    }

    #[test]
    fn test_play_from_past_truncates_future() {
        let mut game = play(&[0, 1, 2, 3]);
        let kept: Vec<Board> = game.board_history()[..=1].to_vec();

        game.handle_step_click(1);
        let click = game.handle_square_click(8);

        assert_eq!(
            click,
            SquareClick::Placed {
                player: Player::O,
                position: Position::BottomRight,
                step: 2
            }
        );
        assert_eq!(game.board_history().len(), 3);
        assert_eq!(&game.board_history()[..=1], kept.as_slice());
        assert!(game.is_at_latest());
    }

    #[test]
    fn test_rewinding_a_won_game_allows_play() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        game.handle_step_click(4);
        assert_eq!(game.board_status(), BoardStatus::Next { player: Player::X });
        assert!(game.handle_square_click(8).is_placed());
        assert_eq!(game.board_history().len(), 6);
    }

    #[test]
    fn test_deserialize_keeps_valid_history() {
        let mut game = play(&[4, 0, 8]);
        game.handle_step_click(1);

        let json = serde_json::to_string(&game).unwrap();
        let restored: GameHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.current_step(), 1);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let result = serde_json::from_str::<GameHistory>(r#"{"snapshots":[],"current_step":0}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid game history"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_step_past_end() {
        let json = serde_json::to_string(&GameHistory::new())
            .unwrap()
            .replace("\"current_step\":0", "\"current_step\":5");
        assert!(serde_json::from_str::<GameHistory>(&json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_skipped_turn() {
        let one = Board::new().with_mark(Position::TopLeft, Player::O);
        let bad = GameHistory::from_parts(vec![Board::new(), one], 1);
        let json = serde_json::to_string(&bad).unwrap();
        assert!(serde_json::from_str::<GameHistory>(&json).is_err());
    }

    #[test]
    fn test_ignore_reason_display() {
        assert_eq!(
            IgnoreReason::Occupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            IgnoreReason::GameWon(Player::O).to_string(),
            "Game already won by O"
        );
    }
}
