//! Command-line interface for strictly_timetravel_tui.

use std::path::PathBuf;

use clap::Parser;

use crate::config::TuiConfig;

/// Tic-tac-toe in the terminal, with a move log you can travel back through
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel_tui")]
#[command(about = "Time-travel tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, config: TuiConfig) -> TuiConfig {
        let config = match &self.log_file {
            Some(path) => config.with_log_file(path.clone()),
            None => config,
        };
        if self.no_mouse {
            config.with_mouse(false)
        } else {
            config
        }
    }
}
