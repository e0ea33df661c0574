//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. Nothing here
//! knows about history or whose turn was stored; every answer is derived
//! from the squares alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};
