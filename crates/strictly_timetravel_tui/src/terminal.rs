//! Terminal setup and teardown.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument, warn};

/// Raw-mode alternate-screen terminal. Restores the terminal on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl TerminalGuard {
    /// Switches the terminal into raw mode on the alternate screen.
    #[instrument]
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = rollback_on_error(
            || {
                let mut stdout = io::stdout();
                if mouse {
                    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
                } else {
                    execute!(stdout, EnterAlternateScreen)?;
                }
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                if let Err(e) = disable_raw_mode() {
                    warn!(error = %e, "Failed to disable raw mode");
                }
                if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
                    warn!(error = %e, "Failed to leave alternate screen");
                }
            },
        )?;
        info!("Terminal ready");
        Ok(Self { terminal, mouse })
    }

    /// The wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

/// Runs `setup`; if it fails, runs `rollback` before returning the error.
///
/// Covers the window after raw mode is on but before a guard exists to
/// restore it.
fn rollback_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|e| {
        warn!(error = %e, "Terminal setup failed, restoring");
        rollback();
    })
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        let result = if self.mouse {
            execute!(
                self.terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )
        } else {
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
        };
        if let Err(e) = result {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}
