//! devtask - development task dispatcher.
//!
//! Forwards a handful of named commands (`install`, `setup`, `dev`,
//! `db-up`, `migrate`, `superuser`) to the project's package installer,
//! container orchestrator and web-application management script. Any
//! other token prints the usage listing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and dispatch
//! - [`config`] - Optional tool locations (`devtask.yml`)
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External process execution
//! - [`tasks`] - The fixed command table
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use devtask::cli::CommandDispatcher;
//! use devtask::config::ToolchainConfig;
//! use devtask::shell::MockRunner;
//! use devtask::ui::MockUI;
//!
//! let dispatcher = CommandDispatcher::new(ToolchainConfig::default());
//! let mut runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! dispatcher.dispatch(Some("migrate"), &mut runner, &mut ui).unwrap();
//! assert_eq!(runner.command_lines(), vec!["python manage.py migrate"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod tasks;
pub mod ui;

pub use error::{DevtaskError, Result};
