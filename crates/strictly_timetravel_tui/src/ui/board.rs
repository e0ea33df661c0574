//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_timetravel::{Player, Position, Square, rules::winning_line};

use crate::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Width of the rendered board.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
/// Height of the rendered board.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Renders the displayed snapshot and returns each square's area.
pub fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board = app.game().board_value();
    let win = winning_line(board).map(|(_, line)| line);
    let show_cursor = *app.focus() == Focus::Board;

    let mut rects = [Rect::default(); 9];
    for pos in Position::ALL {
        let cell = Rect::new(
            area.x + pos.col() as u16 * CELL_WIDTH,
            area.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);

        let in_win = win.is_some_and(|line| line.contains(&pos));
        let highlighted = show_cursor && pos == *app.cursor();
        draw_cell(frame, cell, board.get(pos), in_win, highlighted);
        rects[pos.to_index()] = cell;
    }
    rects
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, in_win: bool, highlighted: bool) {
    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_win {
        base_style.fg(Color::Green)
    } else {
        base_style
    };

    let border = if in_win {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(square.symbol())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}
