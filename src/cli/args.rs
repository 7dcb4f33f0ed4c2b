//! CLI argument definitions.
//!
//! The command line is a single positional token. clap's own `--help` and
//! `--version` are turned off so that every token, flags included, reaches
//! the dispatcher; anything it does not know prints the usage listing.
//! A leading `--` is also a token, not an end-of-options marker.

use clap::Parser;
use std::ffi::OsString;

/// Token clap would otherwise swallow as the end-of-options marker.
const END_OF_OPTIONS: &str = "--";

/// devtask - development task dispatcher.
#[derive(Debug, Default, Parser)]
#[command(name = "devtask")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command to run
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Ignored trailing arguments
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Parse from an argument iterator, falling back to "no command" when
    /// clap rejects the input.
    ///
    /// The first argument after the binary name is always the token, exactly
    /// as given.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if args.get(1).is_some_and(|first| first == END_OF_OPTIONS) {
            return Self {
                command: Some(END_OF_OPTIONS.to_string()),
                extra: args[2..]
                    .iter()
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect(),
            };
        }

        match Self::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                tracing::debug!("Unparseable arguments, showing help: {}", e);
                Self::default()
            }
        }
    }

    /// The selected command token, if any.
    pub fn token(&self) -> Option<&str> {
        self.command.as_deref()
    }
}
