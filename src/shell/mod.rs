//! External process execution.

pub mod command;
pub mod mock;

pub use command::{exit_code, Invocation, ProcessRunner, SystemRunner, COMMAND_NOT_FOUND};
pub use mock::{MockRunner, RunnerEvent};
