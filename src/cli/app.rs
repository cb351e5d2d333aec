//! The library entry a tasks crate calls after registering its tasks.

use crate::cli::args::{tokenize, RawInvocation};
use crate::cli::help::generate_help;
use crate::error::{ExecutionError, Result};
use crate::runner::{Registry, RunContext, Task};
use crate::strategy::{infer_strategy, Action};
use std::env;
use std::thread;

/// Parses the process arguments, resolves the strategy against `registry`,
/// and either prints help or runs the resolved actions.
pub fn go(registry: &Registry) -> Result<()> {
    let invocation = tokenize(env::args().skip(1));
    run_invocation(registry, &invocation)
}

/// Everything [`go`] does after capturing the process arguments.
pub fn run_invocation(registry: &Registry, invocation: &RawInvocation) -> Result<()> {
    let ctx = RunContext::from_options(&invocation.options);
    ctx.export();

    let strategy = infer_strategy(&invocation.options, &invocation.args, &registry.names())?;

    if strategy.show_help {
        println!("{}", generate_help(registry));
        return Ok(());
    }

    run_actions(registry, &strategy.actions, &ctx)
}

/// Resolves every action to its registered task, then runs them
/// concurrently.
///
/// Resolution failures abort before anything runs. Handler failures are
/// reported per task as they happen and surface as one error afterwards,
/// so a failing task never stops its siblings.
pub fn run_actions(registry: &Registry, actions: &[Action], ctx: &RunContext) -> Result<()> {
    let resolved: Vec<(&Task, &Action)> = actions
        .iter()
        .map(|action| {
            registry
                .get(&action.id)
                .map(|task| (task, action))
                .ok_or_else(|| ExecutionError::TaskLookup(action.id.clone()))
        })
        .collect::<std::result::Result<_, _>>()?;

    let results: Vec<(String, bool)> = thread::scope(|scope| {
        let handles: Vec<_> = resolved
            .into_iter()
            .map(|(task, action)| {
                let handle = scope.spawn(move || task.execute(&action.arguments, ctx));
                (action.id.clone(), handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(id, handle)| {
                let passed = handle.join().unwrap_or(false);
                (id, passed)
            })
            .collect()
    });

    match results.into_iter().find(|(_, passed)| !passed) {
        None => Ok(()),
        Some((name, _)) => Err(ExecutionError::TaskFailed(name).into()),
    }
}
