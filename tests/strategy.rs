//! Integration tests for the invocation strategy engine.

mod common;

use chore::cli::tokenize;
use chore::error::StrategyError;
use chore::strategy::{infer_strategy, Action, Strategy};
use common::strings;

fn action(id: &str, arguments: &[&str]) -> Action {
    Action {
        id: id.to_string(),
        arguments: strings(arguments),
    }
}

#[test]
fn test_detects_strategy_across_multiple_tasks() {
    let strategy = infer_strategy(
        &strings(&["reload", "staging", "ci", "lint", "d", "be-real"]),
        &strings(&["foo", "ci::bar", "beReal::baz"]),
        &strings(&["ci", "lint", "beReal", "a", "b", "c", "d"]),
    )
    .unwrap();

    assert_eq!(
        strategy,
        Strategy {
            show_help: false,
            actions: vec![
                action("ci", &["foo", "bar"]),
                action("lint", &["foo"]),
                action("d", &["foo"]),
                action("beReal", &["foo", "baz"]),
            ],
        }
    );
}

#[test]
fn test_errors_at_tasks_that_do_not_exist() {
    let result = infer_strategy(&strings(&["task", "invalid"]), &[], &strings(&["task"]));

    assert_eq!(result, Err(StrategyError::UnknownTask("invalid".to_string())));
}

#[test]
fn test_uses_the_default_task_when_no_tasks_are_present() {
    let strategy = infer_strategy(
        &[],
        &strings(&["some-argument", "default::other-arg"]),
        &strings(&["default", "otherTask"]),
    )
    .unwrap();

    assert_eq!(
        strategy,
        Strategy {
            show_help: false,
            actions: vec![action("default", &["some-argument", "other-arg"])],
        }
    );
}

#[test]
fn test_errors_when_nothing_runs_and_there_is_no_default() {
    let result = infer_strategy(&[], &[], &strings(&["task"]));

    assert_eq!(result, Err(StrategyError::NoDefaultTask));
}

#[test]
fn test_quits_everything_and_shows_help_when_requested() {
    let strategy = infer_strategy(
        &strings(&["task", "help"]),
        &[],
        &strings(&["task", "otherTask"]),
    )
    .unwrap();

    assert_eq!(strategy, Strategy { show_help: true, actions: vec![] });
}

#[test]
fn test_does_not_show_help_when_a_help_task_is_declared() {
    let strategy = infer_strategy(
        &strings(&["task", "help"]),
        &[],
        &strings(&["task", "help", "otherTask"]),
    )
    .unwrap();

    assert_eq!(
        strategy,
        Strategy {
            show_help: false,
            actions: vec![action("help", &[])],
        }
    );
}

#[test]
fn test_option_spellings_resolve_to_camel_case_tasks() {
    let strategy = infer_strategy(
        &strings(&["some-task", "other_task", "NEW_TASK", "CrazyTask"]),
        &[],
        &strings(&["someTask", "otherTask", "newTask", "crazyTask"]),
    )
    .unwrap();

    assert_eq!(
        strategy,
        Strategy {
            show_help: false,
            actions: vec![
                action("someTask", &[]),
                action("otherTask", &[]),
                action("newTask", &[]),
                action("crazyTask", &[]),
            ],
        }
    );
}

#[test]
fn test_tokenized_command_line_end_to_end() {
    let invocation = tokenize([
        "--be-real", "-d", "--reload", "foo", "beReal::baz", "foo",
    ]);

    let strategy = infer_strategy(
        &invocation.options,
        &invocation.args,
        &strings(&["beReal", "d"]),
    )
    .unwrap();

    // Positional duplicates survive tokenization and reach both tasks.
    assert_eq!(
        strategy,
        Strategy {
            show_help: false,
            actions: vec![
                action("beReal", &["foo", "baz", "foo"]),
                action("d", &["foo", "foo"]),
            ],
        }
    );
}
