//! Application state and input routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use strictly_timetravel::{GameHistory, Position, SquareClick, StepClick};
use tracing::{debug, info, instrument};

use crate::input::{digit_square, move_cursor, move_selection};
use crate::ui::Hitboxes;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move log.
    Log,
}

impl Focus {
    /// Toggles between `Board` and `Log`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Log,
            Self::Log => Self::Board,
        }
    }
}

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the game history plus purely presentational state: keyboard focus,
/// board cursor, log selection, and where things were drawn last frame.
#[derive(Debug, Getters)]
pub struct App {
    game: GameHistory,
    focus: Focus,
    cursor: Position,
    selected_step: usize,
    hitboxes: Hitboxes,
}

impl App {
    /// Creates a new application with an empty game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: GameHistory::new(),
            focus: Focus::Board,
            cursor: Position::Center,
            selected_step: 0,
            hitboxes: Hitboxes::default(),
        }
    }

    /// Records where clickable elements were drawn.
    pub fn set_hitboxes(&mut self, hitboxes: Hitboxes) {
        self.hitboxes = hitboxes;
    }

    /// Clicks square `square` (0-8) of the displayed snapshot.
    #[instrument(skip(self))]
    pub fn click_square(&mut self, square: usize) -> SquareClick {
        let click = self.game.handle_square_click(square);
        match click {
            SquareClick::Placed {
                player,
                position,
                step,
            } => {
                info!(%player, %position, step, "Move played");
                self.cursor = position;
            }
            SquareClick::Ignored(reason) => {
                debug!(%reason, "Square click ignored");
            }
        }
        self.selected_step = self.game.current_step();
        click
    }

    /// Clicks history entry `step`.
    #[instrument(skip(self))]
    pub fn click_step(&mut self, step: usize) -> StepClick {
        let click = self.game.handle_step_click(step);
        match click {
            StepClick::Moved { from, to } => info!(from, to, "Travelled through history"),
            StepClick::Ignored { step, len } => debug!(step, len, "Step click ignored"),
        }
        self.selected_step = self.game.current_step();
        click
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppAction::Quit;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.current_step();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Home => {
                self.click_step(0);
            }
            KeyCode::End => {
                self.click_step(self.game.latest_step());
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => {
                    self.click_square(self.cursor.to_index());
                }
                Focus::Log => {
                    self.click_step(self.selected_step);
                }
            },
            code @ (KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::PageUp
            | KeyCode::PageDown) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::Log => {
                    let len = self.game.board_history().len();
                    self.selected_step = move_selection(self.selected_step, len, code);
                }
            },
            KeyCode::Char(c) => {
                if let Some(square) = digit_square(c) {
                    self.click_square(square);
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Handles a mouse event using the hitboxes from the last draw.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return AppAction::Continue;
        }

        if let Some(square) = self.hitboxes.square_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            if let Some(position) = Position::from_index(square) {
                self.cursor = position;
            }
            self.click_square(square);
        } else if let Some(step) = self.hitboxes.step_at(mouse.column, mouse.row) {
            self.focus = Focus::Log;
            self.click_step(step);
        }
        AppAction::Continue
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timetravel::{BoardStatus, Player};

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_play_squares() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.game().board_history().len(), 3);
        assert_eq!(app.game().board_value().get(Position::Center).player(), Some(Player::O));
        assert_eq!(*app.selected_step(), 2);
    }

    #[test]
    fn test_non_square_chars_do_nothing() {
        let mut app = App::new();
        for c in ['0', 'x', '!'] {
            assert_eq!(press(&mut app, KeyCode::Char(c)), AppAction::Continue);
        }
        assert_eq!(app.game().board_history().len(), 1);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(
            app.game().board_value().get(Position::BottomRight).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_enter_plays_cursor_square() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.game().board_value().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_log_navigation_travels_back() {
        let mut app = App::new();
        for c in ['1', '2', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::Log);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.game().current_step(), 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().board_history().len(), 4);
    }

    #[test]
    fn test_home_and_end() {
        let mut app = App::new();
        for c in ['1', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Home);
        assert_eq!(app.game().current_step(), 0);
        assert_eq!(app.game().board_status(), BoardStatus::Next { player: Player::X });

        press(&mut app, KeyCode::End);
        assert_eq!(app.game().current_step(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
        assert_eq!(press(&mut app, KeyCode::Char('x')), AppAction::Continue);
    }

    #[test]
    fn test_mouse_without_hitboxes_does_nothing() {
        let mut app = App::new();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse(click), AppAction::Continue);
        assert_eq!(app.game().board_history().len(), 1);
    }
}
