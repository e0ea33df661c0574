//! Keyboard navigation helpers.

use crossterm::event::KeyCode;
use strictly_timetravel::Position;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the edges; other keys leave it in place.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps the digit keys `1`-`9` to squares 0-8.
pub fn digit_square(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}

/// Moves a log selection up or down, clamped to `0..len`.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    let last = len.saturating_sub(1);
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(last),
        KeyCode::PageUp => selected.saturating_sub(10),
        KeyCode::PageDown => (selected + 10).min(last),
        _ => selected.min(last),
    }
}
