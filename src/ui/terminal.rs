//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Theme, UserInterface};

/// Terminal UI writing messages to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    err_theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI; errors are coloured only if stderr is a TTY.
    pub fn new() -> Self {
        let err = Term::stderr();
        let err_theme = if should_use_colors(&err) {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            out: Term::stdout(),
            err,
            err_theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.err_theme.format_error(msg)).ok();
    }
}

/// Create the UI used by the binary.
pub fn create_ui() -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new())
}
