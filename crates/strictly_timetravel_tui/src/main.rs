//! Strictly Games - time travel tic-tac-toe

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_timetravel_tui::{Cli, TuiConfig, init_tracing, run};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(TuiConfig::load(cli.config.as_deref())?);
    init_tracing(&config)?;

    run(&config)
}
