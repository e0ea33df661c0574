//! Stateless UI rendering.
//!
//! [`draw`] is a pure function of the [`App`]: it renders the status line and
//! board in the left column and the move log on the right, and reports where
//! each clickable element landed so mouse clicks can be routed back.

mod board;
mod move_log;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_timetravel::BoardStatus;
use tracing::instrument;

use crate::app::App;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH};
pub use move_log::{step_label, visible_range};

/// Gap between the left column and the log, in cells.
const COLUMN_GAP: u16 = 2;
/// Gap between the status line and the board, in rows.
const ROW_GAP: u16 = 1;

/// Screen areas of the clickable elements from the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hitboxes {
    squares: [Rect; 9],
    steps: Vec<(usize, Rect)>,
}

impl Hitboxes {
    /// Square (0-8) under the given cell, if any.
    pub fn square_at(&self, column: u16, row: u16) -> Option<usize> {
        self.squares
            .iter()
            .position(|rect| contains(*rect, column, row))
    }

    /// History step under the given cell, if any.
    pub fn step_at(&self, column: u16, row: u16) -> Option<usize> {
        self.steps
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(step, _)| *step)
    }

    /// Area of square `index` (0-8).
    pub fn square(&self, index: usize) -> Option<Rect> {
        self.squares.get(index).copied()
    }

    /// Area of history entry `step`, if it was visible.
    pub fn step(&self, step: usize) -> Option<Rect> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, rect)| *rect)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draws the whole screen and returns the clickable areas.
#[instrument(skip_all)]
pub fn draw(frame: &mut Frame, app: &App) -> Hitboxes {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Game
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Games - Time Travel Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_WIDTH),
            Constraint::Length(COLUMN_GAP),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(ROW_GAP),
            Constraint::Length(BOARD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    draw_status(frame, left[0], app.game().board_status());
    let squares = board::draw_board(frame, left[2], app);
    let steps = move_log::draw_log(frame, columns[2], app);

    let help = Paragraph::new("1-9: Play | Tab: Switch | Arrows: Move | Enter: Select | Home/End | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    Hitboxes { squares, steps }
}

fn draw_status(frame: &mut Frame, area: Rect, status: BoardStatus) {
    let color = match status {
        BoardStatus::Winner { .. } => Color::Green,
        BoardStatus::Draw => Color::Magenta,
        BoardStatus::Next { .. } => Color::Yellow,
    };

    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}
