//! Running one of the known tasks.
//!
//! Steps run strictly in order. No step looks at the outcome of the one
//! before it: a failing tool is reported by the tool itself and the
//! sequence carries on, exactly as a plain shell script would. The exit
//! code of the command is that of the last step.

use crate::config::ToolchainConfig;
use crate::error::{DevtaskError, Result};
use crate::shell::{ProcessRunner, COMMAND_NOT_FOUND};
use crate::tasks::{plan, Step, TaskName};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// A known task with its expanded step list.
#[derive(Debug, Clone)]
pub struct TaskCommand {
    task: TaskName,
    steps: Vec<Step>,
}

impl TaskCommand {
    /// Expand `task` against the tool configuration.
    pub fn new(task: TaskName, config: &ToolchainConfig) -> Self {
        Self {
            task,
            steps: plan(task, config),
        }
    }
}

impl Command for TaskCommand {
    fn execute(
        &self,
        runner: &mut dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!("Running '{}' ({} steps)", self.task, self.steps.len());
        Ok(run_steps(&self.steps, runner, ui))
    }
}

/// Run every step, ignoring intermediate outcomes.
pub fn run_steps(
    steps: &[Step],
    runner: &mut dyn ProcessRunner,
    ui: &mut dyn UserInterface,
) -> CommandResult {
    let mut last = CommandResult::success();

    for (index, step) in steps.iter().enumerate() {
        tracing::debug!("[{}/{}] {}", index + 1, steps.len(), step);

        match step {
            Step::Run(invocation) => {
                last = match runner.run(invocation) {
                    Ok(code) => {
                        if code != 0 {
                            tracing::warn!("'{}' exited with code {}", invocation, code);
                        }
                        CommandResult::from_code(code)
                    }
                    Err(DevtaskError::SpawnFailed { command, source }) => {
                        tracing::error!("Could not start '{}': {}", command, source);
                        ui.error(&format!("{}: {}", command, source));
                        CommandResult::failure(COMMAND_NOT_FOUND)
                    }
                    Err(e) => {
                        tracing::error!("'{}' failed: {}", invocation, e);
                        ui.error(&e.to_string());
                        CommandResult::failure(1)
                    }
                };
            }
            Step::Pause(duration) => runner.pause(*duration),
            Step::Announce(message) => {
                ui.message(message);
                last = CommandResult::success();
            }
        }
    }

    last
}
