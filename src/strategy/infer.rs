//! Strategy inference: which tasks run, with which arguments, or help.

use crate::error::{StrategyError, StrategyResult};
use crate::strategy::scope::args_for_task;
use crate::utils::camel_case;

/// Option names with a fixed, non-task meaning. They select environment
/// modes and are consumed elsewhere, so inference skips them silently.
pub const RESERVED_OPTIONS: &[&str] =
    &["production", "staging", "quiet", "verbose", "deploy", "reload"];

/// A resolved execution unit: a task name and the arguments routed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: String,
    pub arguments: Vec<String>,
}

/// The engine's decision: show help, or run these actions in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub show_help: bool,
    pub actions: Vec<Action>,
}

impl Strategy {
    fn help() -> Self {
        Strategy { show_help: true, actions: Vec::new() }
    }

    fn run(actions: Vec<Action>) -> Self {
        Strategy { show_help: false, actions }
    }
}

/// Maps the tokenized options onto the declared task names.
///
/// Options are camel-cased before comparison, so `--some-task`,
/// `--some_task` and `--SOME_TASK` all select a task named `someTask`. A
/// bare `--help` short-circuits to the help screen unless a task named
/// `help` is declared; a declared `help` task, once requested, wins
/// outright over every other requested task. With no task options, a
/// declared `default` task is synthesized; with none, inference fails.
pub fn infer_strategy(
    options: &[String],
    args: &[String],
    task_names: &[String],
) -> StrategyResult<Strategy> {
    let mut tasks_to_run: Vec<String> = Vec::new();

    for raw_option in options {
        let option = camel_case(raw_option);

        if task_names.iter().any(|name| *name == option) {
            // Two raw spellings of one task collapse to a single run.
            if !tasks_to_run.contains(&option) {
                tasks_to_run.push(option);
            }
            continue;
        }

        if option == "help" {
            return Ok(Strategy::help());
        }

        if RESERVED_OPTIONS.contains(&option.as_str()) {
            continue;
        }

        return Err(StrategyError::UnknownTask(option));
    }

    let mut actions: Vec<Action> = tasks_to_run
        .iter()
        .map(|task| Action {
            id: task.clone(),
            arguments: args_for_task(task, &tasks_to_run, args),
        })
        .collect();

    if let Some(help_action) = actions.iter().find(|action| action.id == "help") {
        return Ok(Strategy::run(vec![help_action.clone()]));
    }

    if actions.is_empty() && task_names.iter().any(|name| name == "default") {
        actions.push(Action {
            id: "default".to_string(),
            arguments: args_for_task("default", &tasks_to_run, args),
        });
    }

    if actions.is_empty() {
        return Err(StrategyError::NoDefaultTask);
    }

    Ok(Strategy::run(actions))
}
