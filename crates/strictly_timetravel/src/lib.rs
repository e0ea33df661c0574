//! Tic-tac-toe with a linear move history.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] snapshots and named
//!   [`Position`]s
//! - **Rules**: pure win/draw checks over one snapshot ([`rules`])
//! - **Status**: [`BoardStatus`], derived from a snapshot, never stored
//! - **History**: [`GameHistory`], the single owner of every snapshot and the
//!   current step, with the two click handlers
//! - **Invariants**: properties of the history checked after each transition
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{BoardStatus, GameHistory, Player};
//!
//! let mut game = GameHistory::new();
//! for square in [0, 3, 1, 4, 2] {
//!     game.handle_square_click(square);
//! }
//! assert_eq!(game.board_status(), BoardStatus::Winner { player: Player::X });
//!
//! // Travel back and branch off.
//! game.handle_step_click(2);
//! game.handle_square_click(8);
//! assert_eq!(game.board_history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use history::{GameHistory, IgnoreReason, InvalidHistory, SquareClick, StepClick};
pub use position::Position;
pub use status::{BoardStatus, evaluate};
pub use types::{Board, Player, Square};
