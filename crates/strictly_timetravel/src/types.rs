//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns the mark shown for this square (`"X"`, `"O"`, or `""`).
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// One immutable 3x3 board snapshot.
///
/// Placing a mark never mutates a board in place: [`Board::with_mark`]
/// returns the next snapshot, so history entries stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Number of occupied squares.
    pub fn filled_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// The player whose mark goes down next.
    ///
    /// X moves when an even number of squares are filled, O otherwise.
    pub fn next_player(&self) -> Player {
        if self.filled_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_player_follows_parity() {
        let board = Board::new();
        assert_eq!(board.next_player(), Player::X);

        let board = board.with_mark(Position::Center, Player::X);
        assert_eq!(board.next_player(), Player::O);

        let board = board.with_mark(Position::TopLeft, Player::O);
        assert_eq!(board.next_player(), Player::X);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let before = Board::new();
        let after = before.with_mark(Position::BottomRight, Player::X);

        assert!(before.is_empty(Position::BottomRight));
        assert_eq!(after.get(Position::BottomRight), Square::Occupied(Player::X));
        assert_eq!(after.filled_count(), 1);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
