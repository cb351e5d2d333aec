//! Error types for Chore

use std::io;
use thiserror::Error;

/// Result type alias for Chore operations
pub type Result<T> = std::result::Result<T, ChoreError>;

/// Main error type for Chore
#[derive(Error, Debug)]
pub enum ChoreError {
    /// Strategy inference errors
    #[error("{0}")]
    Strategy(#[from] StrategyError),

    /// Task execution errors
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// File watching errors
    #[error("watch error: {0}")]
    Watch(#[from] WatchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No tasks manifest could be located
    #[error("could not find a tasks manifest (tried: {0})")]
    TasksFileNotFound(String),
}

/// Errors produced while resolving the execution plan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// An option matched neither a declared task nor a reserved mode flag
    #[error("the task '{0}' is not exposed")]
    UnknownTask(String),

    /// Nothing to run and no fallback task is declared
    #[error("no tasks were specified and no 'default' task is registered")]
    NoDefaultTask,
}

/// Task execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// A resolved action has no registered handler
    #[error("the task '{0}' has no registered handler")]
    TaskLookup(String),

    /// A task handler reported a failure
    #[error("task '{0}' failed")]
    TaskFailed(String),

    /// A spawned command could not run or exited non-zero
    #[error("command failed with exit code {0:?}")]
    CommandFailed(Option<i32>),
}

/// File watching errors
#[derive(Error, Debug)]
pub enum WatchError {
    /// The underlying filesystem watch could not be created
    #[error("failed to watch the file system: {0}")]
    Notify(#[from] notify::Error),

    /// A glob in a watch specification did not compile
    #[error("invalid glob pattern '{pattern}': {error}")]
    Pattern { pattern: String, error: String },
}

/// Specialized result type for strategy operations
pub type StrategyResult<T> = std::result::Result<T, StrategyError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for watch operations
pub type WatchResult<T> = std::result::Result<T, WatchError>;
