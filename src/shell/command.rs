//! Process invocation.
//!
//! Programs are started directly, without an intermediate shell, with
//! stdin, stdout and stderr inherited so interactive tools behave as if
//! run by hand.

use crate::error::{DevtaskError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

/// Exit status reported when a program cannot be started, as a shell would.
pub const COMMAND_NOT_FOUND: i32 = 127;

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute (looked up on `PATH`).
    pub program: String,

    /// Arguments, passed literally.
    pub args: Vec<String>,

    /// Environment variables (merged with the inherited environment).
    pub env: BTreeMap<String, String>,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Build an invocation from a command prefix plus trailing arguments.
    ///
    /// Returns `None` if the combined command is empty.
    pub fn from_parts<I, S>(prefix: &[String], trailing: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (program, leading) = prefix.split_first()?;
        let mut invocation = Self::new(program.clone());
        invocation.args.extend(leading.iter().cloned());
        invocation.args.extend(trailing.into_iter().map(Into::into));
        Some(invocation)
    }

    /// Replace the extra environment.
    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Runs invocations and pauses.
///
/// The dispatcher only talks to this trait, which keeps the command
/// sequences testable without spawning anything.
pub trait ProcessRunner {
    /// Run the invocation to completion and return its exit code.
    ///
    /// # Errors
    ///
    /// Returns `SpawnFailed` if the program could not be started.
    fn run(&mut self, invocation: &Invocation) -> Result<i32>;

    /// Block for `duration`.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Runner that spawns real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<i32> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| DevtaskError::SpawnFailed {
            command: invocation.to_string(),
            source,
        })?;

        Ok(exit_code(status))
    }
}

/// Convert an exit status to a shell-style exit code.
///
/// A process killed by a signal reports `128 + signal` on Unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
