//! The task registry: every task a project exposes.
//!
//! Constructed once at startup and passed by reference to dispatch; there
//! is no ambient global. Registration order is preserved for help output.

use crate::runner::{RunContext, Task};

/// Registered tasks, looked up by name at dispatch time.
#[derive(Debug, Default)]
pub struct Registry {
    tasks: Vec<Task>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry { tasks: Vec::new() }
    }

    /// Registers a task. Re-registering a name replaces the earlier handler
    /// in place, keeping its position.
    pub fn register(&mut self, task: Task) -> &mut Self {
        match self.tasks.iter_mut().find(|existing| existing.name() == task.name()) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        self
    }

    /// Convenience for `register(Task::new(name, handler))`.
    pub fn task<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&[String], &RunContext) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register(Task::new(name, handler))
    }

    /// Declared task names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.name().to_string()).collect()
    }

    /// Looks a task up by exact name.
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name() == name)
    }

    /// Iterates tasks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
