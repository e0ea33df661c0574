//! Derived board status.

use crate::rules::{check_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a snapshot means for the game: won, drawn, or whose move it is.
///
/// Never stored. Recomputed from the snapshot on demand by [`evaluate`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BoardStatus {
    /// Three in a row for `player`.
    #[display("Winner {player}")]
    Winner {
        /// The player holding the line.
        player: Player,
    },
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// Game continues with `player` to move.
    #[display("Next Player {player}")]
    Next {
        /// The mover.
        player: Player,
    },
}

/// Evaluates a snapshot: winner first, then draw, otherwise the next mover.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> BoardStatus {
    if let Some(player) = check_winner(board) {
        BoardStatus::Winner { player }
    } else if is_full(board) {
        BoardStatus::Draw
    } else {
        BoardStatus::Next {
            player: board.next_player(),
        }
    }
}
