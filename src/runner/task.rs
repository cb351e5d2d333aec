//! Runtime task representation.

use crate::runner::RunContext;
use crate::ui;
use std::fmt;

/// A task handler: the ordered argument list plus the run context.
pub type TaskHandler = Box<dyn Fn(&[String], &RunContext) -> anyhow::Result<()> + Send + Sync>;

/// A named, callable unit of work.
///
/// Registered once at startup, never mutated, looked up by name at dispatch
/// time.
pub struct Task {
    name: String,
    usage: Option<String>,
    handler: TaskHandler,
}

impl Task {
    /// Creates a task with the given name and handler.
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[String], &RunContext) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Task {
            name: name.into(),
            usage: None,
            handler: Box::new(handler),
        }
    }

    /// Attaches a one-line usage string shown in the task table.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Task name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Usage description, if any
    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    /// Runs the handler, reporting the outcome under the task's name.
    /// Returns whether the task passed.
    pub fn execute(&self, arguments: &[String], ctx: &RunContext) -> bool {
        ui::info(&format!("Running task '{}'...", self.name));

        match (self.handler)(arguments, ctx) {
            Ok(()) => {
                ui::info(&format!("Task '{}' executed", self.name));
                true
            }
            Err(error) => {
                ui::error(&format!("{:#}", error));
                ui::error(&format!("Task '{}' failed", self.name));
                false
            }
        }
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_execute_reports_success() {
        let task = Task::new("ok", |_, _| Ok(()));
        assert!(task.execute(&[], &RunContext::default()));
    }

    #[test]
    fn test_execute_reports_failure() {
        let task = Task::new("broken", |_, _| Err(anyhow!("boom")));
        assert!(!task.execute(&[], &RunContext::default()));
    }

    #[test]
    fn test_handler_receives_arguments() {
        let task = Task::new("echo", |args, _| {
            assert_eq!(args, ["one", "two"]);
            Ok(())
        });

        let args = vec!["one".to_string(), "two".to_string()];
        assert!(task.execute(&args, &RunContext::default()));
    }
}
