//! The task invocation strategy engine.
//!
//! Maps tokenized options and positional arguments onto the declared task
//! names and produces a validated, ordered execution plan (or a help
//! signal). Pure: the same inputs always yield the same strategy.

pub mod infer;
pub mod scope;

// Re-export main types
pub use infer::*;
pub use scope::*;
