//! Recording runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything. It
//! keeps an ordered log of every invocation and pause, and returns
//! pre-configured exit codes.
//!
//! # Example
//!
//! ```
//! use devtask::shell::{Invocation, MockRunner, ProcessRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.set_exit_code("pip", 1);
//!
//! assert_eq!(runner.run(&Invocation::new("pip")).unwrap(), 1);
//! assert_eq!(runner.invocations().len(), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::error::{DevtaskError, Result};

use super::command::{Invocation, ProcessRunner};

/// One thing the runner was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerEvent {
    Run(Invocation),
    Pause(Duration),
}

/// Runner that records instead of executing.
#[derive(Debug, Default)]
pub struct MockRunner {
    events: Vec<RunnerEvent>,
    exit_codes: HashMap<String, i32>,
    missing: HashSet<String>,
}

impl MockRunner {
    /// Create a runner where every program exits 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every run of `program` exit with `code`.
    pub fn set_exit_code(&mut self, program: &str, code: i32) {
        self.exit_codes.insert(program.to_string(), code);
    }

    /// Make `program` fail to spawn.
    pub fn set_missing(&mut self, program: &str) {
        self.missing.insert(program.to_string());
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[RunnerEvent] {
        &self.events
    }

    /// Only the invocations, in order.
    pub fn invocations(&self) -> Vec<&Invocation> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RunnerEvent::Run(inv) => Some(inv),
                RunnerEvent::Pause(_) => None,
            })
            .collect()
    }

    /// Invocations rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations().iter().map(|i| i.to_string()).collect()
    }

    /// Total time spent in pauses.
    pub fn paused(&self) -> Duration {
        self.events
            .iter()
            .map(|e| match e {
                RunnerEvent::Pause(d) => *d,
                RunnerEvent::Run(_) => Duration::ZERO,
            })
            .sum()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<i32> {
        self.events.push(RunnerEvent::Run(invocation.clone()));

        if self.missing.contains(&invocation.program) {
            return Err(DevtaskError::SpawnFailed {
                command: invocation.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            });
        }

        Ok(self
            .exit_codes
            .get(&invocation.program)
            .copied()
            .unwrap_or(0))
    }

    fn pause(&mut self, duration: Duration) {
        self.events.push(RunnerEvent::Pause(duration));
    }
}
