//! File watching: one multiplexed OS stream, per-subscription glob
//! filtering and debounce, and the high-level helpers tasks call.

pub mod debounce;
pub mod dispatcher;
pub mod filter;

// Re-export main types
pub use debounce::*;
pub use dispatcher::*;
pub use filter::*;

use crate::error::WatchResult;
use crate::ui;
use crate::utils::normalize_path;
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::thread;

/// Exit code meaning "the tasks process asked to be restarted". The
/// supervisor re-launches on it instead of treating it as a failure.
pub const RESTART_EXIT_CODE: i32 = 71;

/// Runs `on_change` once with every file currently matching `spec`, then,
/// if `condition` holds, re-runs it whenever matching files change.
///
/// Changes are filtered by the spec and debounced, so a burst of events
/// (a whole directory write, say) produces a single invocation with the
/// union of matching files. Watching blocks the calling thread for the
/// process lifetime.
pub fn run_watch_if<F>(
    dispatcher: &WatchDispatcher,
    condition: bool,
    spec: impl Into<WatchSpec>,
    on_change: F,
) -> WatchResult<()>
where
    F: Fn(Vec<PathBuf>) + Send + 'static,
{
    let spec = spec.into();
    let filter = spec.compile()?;

    on_change(files_matching(&spec)?);

    if !condition {
        return Ok(());
    }

    let debouncer = Arc::new(Debouncer::new(DEBOUNCE_WINDOW));

    let drain = Arc::clone(&debouncer);
    let worker = thread::spawn(move || loop {
        on_change(drain.next_batch());
    });

    dispatcher.subscribe(move |paths, _kind| {
        let matched = filter.filter(paths);
        if !matched.is_empty() {
            debouncer.extend(&matched);
        }
    })?;

    // The worker never finishes: watching lives until process exit.
    let _ = worker.join();
    Ok(())
}

/// Exits with [`RESTART_EXIT_CODE`] once `file` changes, after the
/// debounce window settles. Registration returns immediately; the watch
/// itself lives for the process lifetime.
pub fn restart_when_changed(
    dispatcher: &WatchDispatcher,
    file: impl AsRef<Path>,
) -> WatchResult<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let target = normalize_path(file.as_ref(), &cwd);

    let debouncer = Arc::new(Debouncer::new(DEBOUNCE_WINDOW));

    let drain = Arc::clone(&debouncer);
    thread::spawn(move || loop {
        let files = drain.next_batch();
        if files.contains(&target) {
            ui::notice(&format!("'{}' changed. Restarting process...", target.display()));
            process::exit(RESTART_EXIT_CODE);
        }
    });

    dispatcher.subscribe(move |paths, _kind| {
        if !paths.is_empty() {
            debouncer.extend(paths);
        }
    })
}
