//! Task registry and execution.
//!
//! This module holds the runtime representation of tasks, the registry a
//! tasks crate fills at startup, the run context derived from the mode
//! flags, and process running for task bodies.

pub mod command;
pub mod context;
pub mod registry;
pub mod task;

// Re-export main types
pub use command::*;
pub use context::*;
pub use registry::*;
pub use task::*;
