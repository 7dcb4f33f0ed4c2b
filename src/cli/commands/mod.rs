//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! [`CommandDispatcher`] maps the positional token to either a
//! [`TaskCommand`] (one of the six known names) or the [`HelpCommand`]
//! (everything else).

pub mod dispatcher;
pub mod help;
pub mod task;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use help::HelpCommand;
pub use task::TaskCommand;
