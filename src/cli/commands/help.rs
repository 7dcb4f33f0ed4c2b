//! Usage listing for unrecognized tokens.

use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::tasks::help_text;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the static help text. Never runs anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(
        &self,
        _runner: &mut dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.message(help_text());
        Ok(CommandResult::success())
    }
}
