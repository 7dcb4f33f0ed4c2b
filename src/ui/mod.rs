//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use devtask::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Uso: devtask <comando>");
//! assert!(ui.has_message("Uso"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message on stdout, unstyled.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
