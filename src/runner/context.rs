//! Run context: the environment-mode switches shared by every task.
//!
//! The reserved options select a deployment environment and an output
//! level; both are exported to the process environment so child processes
//! inherit the same modes.

use crate::ui::LogLevel;
use crate::utils::camel_case;
use std::env;

/// Deployment environment selected by the mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    /// The value exported as `ENV`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Mode switches computed from the option set, passed to every task handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub environment: Environment,
    pub log_level: LogLevel,
    pub deploy: bool,
    pub reload: bool,
}

impl RunContext {
    /// Derives the context from the deduplicated option set. Staging wins
    /// over production, verbose over quiet.
    pub fn from_options(options: &[String]) -> Self {
        let has = |name: &str| options.iter().any(|option| camel_case(option) == name);

        let environment = if has("staging") {
            Environment::Staging
        } else if has("production") {
            Environment::Production
        } else {
            Environment::Dev
        };

        let log_level = if has("verbose") {
            LogLevel::Verbose
        } else if has("quiet") {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        };

        RunContext {
            environment,
            log_level,
            deploy: has("deploy"),
            reload: has("reload"),
        }
    }

    /// Exports the modes as `ENV`, `LOG_LEVEL`, `RELOAD` and `DEPLOY`.
    pub fn export(&self) {
        env::set_var("ENV", self.environment.as_str());
        env::set_var("LOG_LEVEL", self.log_level.as_str());

        if self.reload {
            env::set_var("RELOAD", "1");
        }
        if self.deploy {
            env::set_var("DEPLOY", "1");
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for RunContext {
    fn default() -> Self {
        RunContext {
            environment: Environment::Dev,
            log_level: LogLevel::Normal,
            deploy: false,
            reload: false,
        }
    }
}
