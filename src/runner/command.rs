//! Process running for task bodies.

use crate::error::{ExecutionError, ExecutionResult};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// How to run a command: working directory, extra environment, and whether
/// to capture output instead of inheriting stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub cwd: Option<PathBuf>,
    pub env: HashMap<String, String>,
    pub capture: bool,
}

/// The outcome of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,

    /// Concatenated stdout and stderr when capturing; empty otherwise.
    pub output: String,
}

/// Runs a command given as an argv list.
///
/// Without `capture`, the command inherits the terminal; with it, stdout
/// and stderr are collected into `output`. A non-zero exit is reported in
/// `success`, not as an error; only a command that cannot be spawned fails.
pub fn run_command(argv: &[String], options: &CommandOptions) -> ExecutionResult<CommandOutput> {
    let program = argv.first().ok_or(ExecutionError::CommandFailed(None))?;

    let mut command = Command::new(program);
    command.args(&argv[1..]);

    if let Some(cwd) = &options.cwd {
        command.current_dir(cwd);
    }
    for (key, value) in &options.env {
        command.env(key, value);
    }

    if options.capture {
        command.stdout(Stdio::piped()).stderr(Stdio::piped());

        let finished = command
            .output()
            .map_err(|_| ExecutionError::CommandFailed(None))?;

        let mut output = String::from_utf8_lossy(&finished.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&finished.stderr));

        Ok(CommandOutput { success: finished.status.success(), output })
    } else {
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = command
            .status()
            .map_err(|_| ExecutionError::CommandFailed(None))?;

        Ok(CommandOutput { success: status.success(), output: String::new() })
    }
}

/// Runs a one-line command, splitting on whitespace.
pub fn run_line(line: &str, options: &CommandOptions) -> ExecutionResult<CommandOutput> {
    let argv: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    run_command(&argv, options)
}
