//! Move log rendering.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Button label for history entry `step`.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "Go to start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Entries shown in a log `height` rows tall, keeping `selected` on screen.
pub fn visible_range(len: usize, selected: usize, height: usize) -> Range<usize> {
    if height == 0 {
        return 0..0;
    }
    let offset = (selected + 1).saturating_sub(height);
    offset..len.min(offset + height)
}

/// Renders one line per snapshot and returns the area of each visible entry.
pub fn draw_log(frame: &mut Frame, area: Rect, app: &App) -> Vec<(usize, Rect)> {
    let focused = *app.focus() == Focus::Log;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("Moves");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let game = app.game();
    let len = game.board_history().len();
    let range = visible_range(len, *app.selected_step(), inner.height as usize);

    let mut entries = Vec::with_capacity(range.len());
    for (row, step) in range.enumerate() {
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);

        let current = step == game.current_step();
        let marker = if current { "> " } else { "  " };
        let mut style = Style::default();
        if current {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if focused && step == *app.selected_step() {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let line = Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}. {}", step + 1, step_label(step)), style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
        entries.push((step, rect));
    }
    entries
}
