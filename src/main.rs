//! devtask CLI entry point.

use std::process::ExitCode;

use devtask::cli::{Cli, CommandDispatcher};
use devtask::config::{load_config, ToolchainConfig};
use devtask::shell::SystemRunner;
use devtask::tasks::TaskName;
use devtask::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` if set, otherwise warnings only.
/// Logs go to stderr so stdout carries nothing but help and tool output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devtask=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse_lenient(std::env::args_os());

    tracing::debug!("devtask starting with args: {:?}", cli);
    if !cli.extra.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    let mut ui = create_ui();
    let project_root = std::env::current_dir().unwrap_or_default();

    // Help never depends on devtask.yml, so a broken file cannot hide it.
    let config = if cli.token().and_then(TaskName::parse).is_some() {
        match load_config(&project_root) {
            Ok(config) => config,
            Err(e) => {
                ui.error(&format!("Error: {}", e));
                return ExitCode::from(1);
            }
        }
    } else {
        ToolchainConfig::default()
    };

    let dispatcher = CommandDispatcher::new(config);
    let mut runner = SystemRunner::new();

    match dispatcher.dispatch(cli.token(), &mut runner, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
