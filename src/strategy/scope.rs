//! Routing of `task::value`-prefixed positional arguments.
//!
//! One invocation can run several tasks; the prefix convention routes
//! disjoint argument subsets to each while unprefixed arguments stay shared.

/// A positional argument, parsed for an optional routing prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopedArg<'a> {
    /// No usable prefix: shared by every task.
    Bare(&'a str),

    /// `prefix::value`: earmarked for the named task.
    Scoped { prefix: &'a str, value: &'a str },
}

impl<'a> ScopedArg<'a> {
    /// Splits on the first `::`. An empty suffix carries no value to route,
    /// so the raw string stays a shared argument.
    fn parse(raw: &'a str) -> Self {
        match raw.split_once("::") {
            Some((_, "")) | None => ScopedArg::Bare(raw),
            Some((prefix, value)) => ScopedArg::Scoped { prefix, value },
        }
    }
}

/// Computes the argument list for one task out of the full raw list.
///
/// Unprefixed arguments belong to every task. A prefixed argument belongs
/// to the named task; a task in `running_tasks` claims its own prefix and
/// excludes the argument everywhere else. A prefix naming no running task
/// claims nothing, so its value is shared like an unprefixed argument.
pub fn args_for_task(task: &str, running_tasks: &[String], raw_args: &[String]) -> Vec<String> {
    raw_args
        .iter()
        .filter_map(|raw| arg_for_task(task, running_tasks, raw))
        .collect()
}

fn arg_for_task(task: &str, running_tasks: &[String], raw: &str) -> Option<String> {
    match ScopedArg::parse(raw) {
        ScopedArg::Bare(arg) => Some(arg.to_string()),
        ScopedArg::Scoped { prefix, value } => {
            if prefix != task && running_tasks.iter().any(|running| running == prefix) {
                // Earmarked for another task running this invocation.
                return None;
            }
            Some(value.to_string())
        }
    }
}
