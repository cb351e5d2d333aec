//! Chore - a task runner for Rust projects
//!
//! A project defines named tasks in a small "tasks crate": a binary crate
//! that links this library, fills a [`Registry`] with handlers, and calls
//! [`cli::go`]. The `chore` binary supervises that crate — it runs it
//! through cargo, forwards the command line, and re-launches it when the
//! tasks process exits with the reserved restart code.

// Public modules
pub mod cli;
pub mod error;
pub mod runner;
pub mod strategy;
pub mod ui;
pub mod utils;
pub mod watch;

// Re-export commonly used types
pub use error::{ChoreError, Result};
pub use runner::{Registry, RunContext, Task};
pub use strategy::{Action, Strategy};
pub use watch::WatchDispatcher;

/// Current version of Chore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
