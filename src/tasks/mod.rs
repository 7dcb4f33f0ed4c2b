//! The fixed command table.
//!
//! Each [`TaskName`] expands to exactly one ordered list of [`Step`]s via
//! [`plan`]. The sequences and their literals (bind address, port, pause
//! length, management sub-actions) do not depend on configuration; only
//! the programs that carry them out do.

pub mod help;

pub use help::{help_text, SETUP_COMPLETE};

use std::fmt;
use std::time::Duration;

use crate::config::ToolchainConfig;
use crate::shell::Invocation;

/// Address the development server binds to.
pub const DEV_SERVER_BIND: &str = "0.0.0.0";

/// Port the development server listens on.
pub const DEV_SERVER_PORT: u16 = 8000;

/// Fixed wait between starting the database and migrating during `setup`.
pub const SETUP_SETTLE: Duration = Duration::from_secs(5);

/// A known command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskName {
    Install,
    Setup,
    Dev,
    DbUp,
    Migrate,
    Superuser,
}

impl TaskName {
    /// All tasks, in the order they are listed in the help text.
    pub const ALL: [TaskName; 6] = [
        TaskName::Install,
        TaskName::Setup,
        TaskName::Dev,
        TaskName::DbUp,
        TaskName::Migrate,
        TaskName::Superuser,
    ];

    /// Match a token by exact, case-sensitive equality.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == token)
    }

    /// The literal the task is invoked by.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::Install => "install",
            TaskName::Setup => "setup",
            TaskName::Dev => "dev",
            TaskName::DbUp => "db-up",
            TaskName::Migrate => "migrate",
            TaskName::Superuser => "superuser",
        }
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a task's action sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Run an external program and wait for it.
    Run(Invocation),

    /// Wait unconditionally.
    Pause(Duration),

    /// Print a completion message.
    Announce(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Run(inv) => write!(f, "{}", inv),
            Step::Pause(d) => write!(f, "sleep {}", d.as_secs()),
            Step::Announce(msg) => write!(f, "echo {}", msg),
        }
    }
}

/// Expand a task into its flat step list.
///
/// `setup` reuses the `install` and `db-up` expansions, so those
/// sub-sequences are identical to running the tasks on their own.
pub fn plan(task: TaskName, config: &ToolchainConfig) -> Vec<Step> {
    match task {
        TaskName::Install => {
            let manifest = config.installer.manifest.to_string_lossy().into_owned();
            run(config, &config.installer.command, [manifest])
        }
        TaskName::DbUp => run(
            config,
            &config.orchestrator.command,
            ["up".to_string(), "-d".to_string(), config.orchestrator.service.clone()],
        ),
        TaskName::Setup => {
            let mut steps = plan(TaskName::Install, config);
            steps.extend(plan(TaskName::DbUp, config));
            steps.push(Step::Pause(SETUP_SETTLE));
            steps.extend(manage(config, ["makemigrations"]));
            steps.extend(manage(config, ["migrate"]));
            steps.push(Step::Announce(SETUP_COMPLETE.to_string()));
            steps
        }
        TaskName::Dev => manage(
            config,
            [
                "runserver".to_string(),
                format!("{}:{}", DEV_SERVER_BIND, DEV_SERVER_PORT),
            ],
        ),
        TaskName::Migrate => manage(config, ["migrate"]),
        TaskName::Superuser => manage(config, ["createsuperuser"]),
    }
}

fn manage<I, S>(config: &ToolchainConfig, action: I) -> Vec<Step>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run(config, &config.manage.command, action)
}

// An empty prefix yields no step; `config::validate` rejects that case
// before anything is planned.
fn run<I, S>(config: &ToolchainConfig, prefix: &[String], trailing: I) -> Vec<Step>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Invocation::from_parts(prefix, trailing)
        .map(|inv| Step::Run(inv.with_env(config.env.clone())))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(steps: &[Step]) -> Vec<String> {
        steps.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_matches_every_literal() {
        for task in TaskName::ALL {
            assert_eq!(TaskName::parse(task.as_str()), Some(task));
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(TaskName::parse(""), None);
        assert_eq!(TaskName::parse("Install"), None);
        assert_eq!(TaskName::parse(" install"), None);
        assert_eq!(TaskName::parse("db_up"), None);
        assert_eq!(TaskName::parse("--help"), None);
    }

    #[test]
    fn install_uses_manifest() {
        let steps = plan(TaskName::Install, &ToolchainConfig::default());
        assert_eq!(lines(&steps), vec!["pip install -r requirements.txt"]);
    }

    #[test]
    fn db_up_starts_service_detached() {
        let steps = plan(TaskName::DbUp, &ToolchainConfig::default());
        assert_eq!(lines(&steps), vec!["docker-compose up -d db"]);
    }

    #[test]
    fn dev_binds_all_interfaces_on_8000() {
        let steps = plan(TaskName::Dev, &ToolchainConfig::default());
        assert_eq!(steps.len(), 1);
        match &steps[0] {
            Step::Run(inv) => {
                assert_eq!(inv.args.last().map(String::as_str), Some("0.0.0.0:8000"));
                assert_eq!(inv.to_string(), "python manage.py runserver 0.0.0.0:8000");
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn migrate_is_a_single_apply() {
        let steps = plan(TaskName::Migrate, &ToolchainConfig::default());
        assert_eq!(lines(&steps), vec!["python manage.py migrate"]);
    }

    #[test]
    fn superuser_runs_createsuperuser() {
        let steps = plan(TaskName::Superuser, &ToolchainConfig::default());
        assert_eq!(lines(&steps), vec!["python manage.py createsuperuser"]);
    }

    #[test]
    fn setup_sequence_is_fixed() {
        let steps = plan(TaskName::Setup, &ToolchainConfig::default());
        assert_eq!(
            lines(&steps),
            vec![
                "pip install -r requirements.txt".to_string(),
                "docker-compose up -d db".to_string(),
                "sleep 5".to_string(),
                "python manage.py makemigrations".to_string(),
                "python manage.py migrate".to_string(),
                format!("echo {}", SETUP_COMPLETE),
            ]
        );
        assert_eq!(steps[2], Step::Pause(Duration::from_secs(5)));
    }

    #[test]
    fn setup_embeds_install_and_db_up_unchanged() {
        let config = ToolchainConfig::default();
        let setup = plan(TaskName::Setup, &config);
        assert_eq!(setup[0..1], plan(TaskName::Install, &config)[..]);
        assert_eq!(setup[1..2], plan(TaskName::DbUp, &config)[..]);
    }

    #[test]
    fn plan_is_deterministic() {
        let config = ToolchainConfig::default();
        for task in TaskName::ALL {
            assert_eq!(plan(task, &config), plan(task, &config));
        }
    }

    #[test]
    fn configured_programs_and_env_are_used() {
        let mut config = ToolchainConfig::default();
        config.manage.command = vec!["uv".into(), "run".into(), "manage.py".into()];
        config
            .env
            .insert("DJANGO_SETTINGS_MODULE".into(), "config.settings.development".into());

        let steps = plan(TaskName::Migrate, &config);
        match &steps[0] {
            Step::Run(inv) => {
                assert_eq!(inv.to_string(), "uv run manage.py migrate");
                assert_eq!(inv.env.len(), 1);
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn dev_literals_ignore_configuration() {
        let mut config = ToolchainConfig::default();
        config.manage.command = vec!["./manage.py".into()];
        let steps = plan(TaskName::Dev, &config);
        assert_eq!(lines(&steps), vec!["./manage.py runserver 0.0.0.0:8000"]);
    }
}
