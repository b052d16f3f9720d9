//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "keycode-challenge")]
#[command(about = "Shows live keyboard event information, hiding it again when idle")]
#[command(version)]
pub struct Config {
    /// Seconds without a key press before the cards hide again
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    pub ttl: u64,

    /// Show the card layout without listening for keys
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Where to write logs (the terminal itself is the display)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the log file path, defaulting to the temp directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("keycode-challenge.log"))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
