//! KeyCode Challenge - shows live keyboard event information
//!
//! This is the main entry point for the keycode-challenge application.

use std::{fs::File, io, sync::{Arc, Mutex}};
use anyhow::Context;
use tracing::info;

use keycode_challenge::{
    config::Config,
    render::{TerminalRenderer, TerminalSession},
    state::AppState,
    tasks::input_listener_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // The terminal is the display, so logs go to a file
    let log_path = config.log_path();
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(format!("keycode_challenge={}", config.log_level()))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting keycode-challenge v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: ttl={}s, debug={}", config.ttl, config.debug);

    let session = TerminalSession::enter().context("Failed to set up the terminal")?;
    let (cols, rows) = session.size()?;

    let renderer = TerminalRenderer::new(io::stdout(), cols, rows);
    let state = Arc::new(AppState::new(Box::new(renderer), config.ttl));

    if config.debug {
        state.run_debug();
    } else {
        state.show_current_view();
    }

    let result = tokio::select! {
        result = input_listener_task(Arc::clone(&state), config.debug) => result,
        result = shutdown_signal() => {
            info!("Shutdown signal received");
            result.map_err(anyhow::Error::from)
        }
    };

    drop(session);
    info!("Shutdown complete");
    result
}
