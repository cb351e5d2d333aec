//! The `chore` binary: locates the project's tasks crate and supervises it.
//!
//! The tasks crate is an ordinary binary crate that links this library and
//! calls [`go`](crate::cli::go). The supervisor runs it through cargo,
//! forwards the remaining command line verbatim, and re-launches it while
//! it keeps exiting with the reserved restart code.

use crate::error::{ChoreError, Result};
use crate::ui;
use crate::watch::RESTART_EXIT_CODE;
use clap::{Arg, Command};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

/// Manifest locations probed when neither the command line nor
/// `CHORE_TASKS_FILE` names one.
const TASKS_FILE_CANDIDATES: &[&str] = &["tasks/Cargo.toml", ".config/tasks/Cargo.toml"];

/// Runs the supervisor and returns the tasks process's final exit code.
pub fn run() -> Result<i32> {
    dotenvy::dotenv().ok();

    let matches = build_command().get_matches();

    let tasks_file = matches.get_one::<String>("tasks-file").cloned();
    let passthrough: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let manifest = resolve_tasks_file(tasks_file.as_deref())?;
    supervise(&manifest, &passthrough)
}

fn build_command() -> Command {
    Command::new("chore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs the tasks a project defines in its tasks crate")
        .arg(
            Arg::new("tasks-file")
                .value_name("TASKS_FILE")
                .help("Path to the tasks crate or its Cargo.toml"),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .help("Task options and arguments, passed through to the tasks process"),
        )
}

/// Probes the command-line value, then `CHORE_TASKS_FILE`, then the
/// default locations. A directory means its `Cargo.toml`.
fn resolve_tasks_file(cli_value: Option<&str>) -> Result<PathBuf> {
    let named = cli_value
        .map(str::to_string)
        .or_else(|| env::var("CHORE_TASKS_FILE").ok());

    let candidates: Vec<String> = match named {
        Some(path) => vec![path],
        None => TASKS_FILE_CANDIDATES.iter().map(|c| c.to_string()).collect(),
    };

    let mut tried = Vec::new();
    for candidate in candidates {
        let path = as_manifest(Path::new(&candidate));
        if path.is_file() {
            return Ok(path);
        }
        tried.push(path.display().to_string());
    }

    Err(ChoreError::TasksFileNotFound(tried.join(", ")))
}

fn as_manifest(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join("Cargo.toml")
    } else {
        path.to_path_buf()
    }
}

/// Spawns the tasks crate, re-launching while it exits with the restart
/// code, and returns its final exit code.
fn supervise(manifest: &Path, passthrough: &[String]) -> Result<i32> {
    loop {
        let status = process::Command::new("cargo")
            .arg("run")
            .arg("--quiet")
            .arg("--manifest-path")
            .arg(manifest)
            .arg("--")
            .args(passthrough)
            .status()?;

        match status.code() {
            Some(code) if code == RESTART_EXIT_CODE => {
                ui::notice("Tasks process requested a restart. Relaunching...");
            }
            Some(code) => return Ok(code),
            // Killed by a signal: report a generic failure.
            None => return Ok(1),
        }
    }
}
