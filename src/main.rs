use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use termbrot::{Config, DisplayToggles, SessionController, TerminalInput, TerminalPresenter};

fn init_logging(config: &Config) -> Result<()> {
    // Without a log file nothing is installed, so no output can reach the
    // raw-mode screen.
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(config.log_level))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let viewport = config
        .initial_viewport()
        .context("Invalid starting viewport")?;
    let renderer = config.renderer().context("Failed to start renderer")?;
    let toggles = DisplayToggles {
        show_help: !config.hide_help,
        show_info: !config.hide_info,
    };

    let presenter = TerminalPresenter::new().context("Failed to initialise terminal")?;
    let mut session =
        SessionController::new(presenter, TerminalInput::new(), renderer, viewport, toggles);

    let result = session.run();
    // Restore the terminal before anything is printed.
    drop(session);

    if let Err(err) = &result {
        error!(%err, "session failed");
    }

    result.context("Session ended with an error")
}
