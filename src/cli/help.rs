//! Help text generated from the registry.

use crate::runner::Registry;

/// Builds the task overview shown when help is requested.
pub fn generate_help(registry: &Registry) -> String {
    let width = registry
        .iter()
        .map(|task| task.name().len())
        .max()
        .unwrap_or(0);

    let mut help = String::from("Usage: chore <tasks-file> [--task]... [arg]...\n\nTasks:\n");

    for task in registry.iter() {
        let usage = task.usage().map(first_line).unwrap_or("");
        let line = format!("  {:width$}  {}", task.name(), usage, width = width);
        help.push_str(line.trim_end());
        help.push('\n');
    }

    help
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
