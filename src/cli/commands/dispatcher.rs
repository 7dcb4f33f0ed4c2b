//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the command token

use crate::config::ToolchainConfig;
use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::tasks::TaskName;
use crate::ui::UserInterface;

use super::help::HelpCommand;
use super::task::TaskCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `runner` - Starts external programs and performs pauses
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code to end the process with.
    fn execute(
        &self,
        runner: &mut dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the last step succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit code narrowed to what a process can report.
    ///
    /// Codes outside `0..=255` (possible on Windows) become 1, so a failure
    /// never wraps around to 0.
    pub fn process_exit_code(&self) -> u8 {
        match u8::try_from(self.exit_code) {
            Ok(code) => code,
            Err(_) => 1,
        }
    }

    /// Create a result from a raw exit code.
    pub fn from_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Routes the command token to its implementation.
pub struct CommandDispatcher {
    config: ToolchainConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher using the given tool locations.
    pub fn new(config: ToolchainConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute the command named by `token`.
    ///
    /// Unknown or missing tokens print the help listing and succeed.
    pub fn dispatch(
        &self,
        token: Option<&str>,
        runner: &mut dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match token.and_then(TaskName::parse) {
            Some(task) => {
                tracing::debug!("Dispatching '{}'", task);
                TaskCommand::new(task, &self.config).execute(runner, ui)
            }
            None => {
                tracing::debug!("No known command in {:?}, showing help", token);
                HelpCommand.execute(runner, ui)
            }
        }
    }
}
