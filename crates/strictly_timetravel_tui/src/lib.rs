//! Terminal UI for time-travel tic-tac-toe.
//!
//! The frontend is presentation only. All game state lives in a
//! [`GameHistory`](strictly_timetravel::GameHistory) owned by the [`App`];
//! the UI reads derived values from it and routes clicks and keys back to
//! its two handlers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
pub mod ui;

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

pub use app::{App, AppAction, Focus};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use input::{digit_square, move_cursor, move_selection};
pub use terminal::TerminalGuard;
pub use ui::Hitboxes;

/// Sends tracing output to the configured log file.
///
/// Logging to stdout would draw over the TUI, so output goes to a file with
/// ANSI colors off. `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    // A subscriber installed earlier keeps receiving events.
    if let Err(e) = result {
        debug!(error = %e, "Tracing subscriber already installed");
    }

    Ok(())
}

/// Runs the game until the user quits.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Strictly Games time travel TUI");

    let mut guard = TerminalGuard::enter(*config.mouse())?;
    let mut app = App::new();
    let poll = Duration::from_millis(*config.poll_interval_ms());

    loop {
        let mut hitboxes = Hitboxes::default();
        guard
            .terminal_mut()
            .draw(|f| hitboxes = ui::draw(f, &app))?;
        app.set_hitboxes(hitboxes);

        if !event::poll(poll)? {
            continue;
        }

        let action = match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            other => {
                debug!(event = ?other, "Unhandled event");
                AppAction::Continue
            }
        };

        if action == AppAction::Quit {
            info!(
                moves = app.game().latest_step(),
                status = %app.game().board_status(),
                "User quit"
            );
            return Ok(());
        }
    }
}
