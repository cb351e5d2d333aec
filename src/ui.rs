//! Leveled terminal output.
//!
//! The level comes from the `LOG_LEVEL` environment variable, which the mode
//! flags export before any task runs, so child processes print at the same
//! level as the tasks process itself.

use colored::Colorize;
use std::env;

/// Output levels selected by the `quiet`/`verbose` mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Quiet,
    Normal,
    Verbose,
}

impl LogLevel {
    /// Reads the level from `LOG_LEVEL`; anything unrecognized is `Normal`.
    pub fn from_env() -> Self {
        match env::var("LOG_LEVEL").as_deref() {
            Ok("quiet") => LogLevel::Quiet,
            Ok("verbose") => LogLevel::Verbose,
            _ => LogLevel::Normal,
        }
    }

    /// The value exported back into `LOG_LEVEL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Verbose => "verbose",
        }
    }
}

/// Print an informational message (suppressed when quiet).
pub fn info(message: &str) {
    if LogLevel::from_env() >= LogLevel::Normal {
        eprintln!("{} {}", "info".blue().bold(), message);
    }
}

/// Print a notice that should stand out (suppressed when quiet).
pub fn notice(message: &str) {
    if LogLevel::from_env() >= LogLevel::Normal {
        eprintln!("{} {}", "notice".yellow().bold(), message);
    }
}

/// Print an error message. Always shown.
pub fn error(message: &str) {
    eprintln!("{} {}", "error".red().bold(), message);
}

/// Print a debug message (verbose only).
pub fn debug(message: &str) {
    if LogLevel::from_env() >= LogLevel::Verbose {
        eprintln!("{} {}", "debug".dimmed(), message);
    }
}
