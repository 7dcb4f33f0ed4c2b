//! Integration tests for the devtask binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use devtask::tasks::{help_text, SETUP_COMPLETE};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("devtask.yml"), config).unwrap();
    temp
}

fn devtask(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("devtask"));
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn expected_help() -> String {
    format!("{}\n", help_text())
}

// Every collaborator replaced by `echo`, so the invocations show up on stdout.
const ECHO_TOOLS: &str = r#"
installer:
  command: [echo, installer]
orchestrator:
  command: [echo, orchestrator]
manage:
  command: [echo, manage]
"#;

#[test]
fn cli_no_args_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devtask(&temp)
        .assert()
        .success()
        .stdout(predicate::eq(expected_help()))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_unknown_token_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    for token in ["foo", "", "Setup", "--help", "-h", "--version"] {
        devtask(&temp)
            .arg(token)
            .assert()
            .success()
            .stdout(predicate::eq(expected_help()));
    }
    Ok(())
}

#[test]
fn cli_leading_double_dash_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ECHO_TOOLS);
    devtask(&temp)
        .args(["--", "migrate"])
        .assert()
        .success()
        .stdout(predicate::eq(expected_help()));
    Ok(())
}

#[test]
fn cli_help_lists_all_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut assert = devtask(&temp).arg("nope").assert().success();
    for name in ["install", "setup", "dev", "db-up", "migrate", "superuser"] {
        assert = assert.stdout(predicate::str::contains(format!("  {}", name)));
    }
    Ok(())
}

#[test]
fn cli_unknown_token_ignores_broken_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("installer: [unclosed");
    devtask(&temp)
        .arg("whatever")
        .assert()
        .success()
        .stdout(predicate::eq(expected_help()));
    Ok(())
}

#[test]
fn cli_broken_config_fails_known_token() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("installer: [unclosed");
    devtask(&temp)
        .arg("migrate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_migrate_invokes_apply_once() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ECHO_TOOLS);
    devtask(&temp)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::eq("manage migrate\n"));
    Ok(())
}

#[test]
fn cli_dev_binds_all_interfaces() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ECHO_TOOLS);
    devtask(&temp)
        .arg("dev")
        .assert()
        .success()
        .stdout(predicate::eq("manage runserver 0.0.0.0:8000\n"));
    Ok(())
}

#[test]
fn cli_install_db_up_and_superuser() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ECHO_TOOLS);
    devtask(&temp)
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::eq("installer requirements.txt\n"));
    devtask(&temp)
        .arg("db-up")
        .assert()
        .success()
        .stdout(predicate::eq("orchestrator up -d db\n"));
    devtask(&temp)
        .arg("superuser")
        .assert()
        .success()
        .stdout(predicate::eq("manage createsuperuser\n"));
    Ok(())
}

#[test]
fn cli_extra_arguments_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ECHO_TOOLS);
    devtask(&temp)
        .args(["migrate", "users", "--fake"])
        .assert()
        .success()
        .stdout(predicate::eq("manage migrate\n"));
    Ok(())
}

#[test]
fn cli_setup_runs_full_sequence() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ECHO_TOOLS);
    let start = std::time::Instant::now();
    devtask(&temp)
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::eq(format!(
            "installer requirements.txt\n\
             orchestrator up -d db\n\
             manage makemigrations\n\
             manage migrate\n\
             {}\n",
            SETUP_COMPLETE
        )));
    assert!(start.elapsed() >= std::time::Duration::from_secs(5));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_exit_code_comes_from_last_tool() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
manage:
  command: [sh, -c, "exit 3", sh]
"#,
    );
    devtask(&temp).arg("migrate").assert().code(3);
    Ok(())
}

#[test]
fn cli_missing_tool_exits_127() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
manage:
  command: [devtask-test-missing-tool]
"#,
    );
    devtask(&temp)
        .arg("migrate")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("devtask-test-missing-tool migrate"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_setup_keeps_going_after_failures() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
installer:
  command: [sh, -c, "echo installer-failed; exit 1", sh]
orchestrator:
  command: [devtask-test-missing-tool]
manage:
  command: [echo, manage]
"#,
    );
    devtask(&temp)
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("installer-failed"))
        .stdout(predicate::str::contains("manage makemigrations"))
        .stdout(predicate::str::contains("manage migrate"))
        .stdout(predicate::str::contains(SETUP_COMPLETE))
        .stderr(predicate::str::contains("devtask-test-missing-tool up -d db"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_passes_configured_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
manage:
  command: [sh, -c, "echo $DJANGO_SETTINGS_MODULE $0", sh]
env:
  DJANGO_SETTINGS_MODULE: config.settings.development
"#,
    );
    devtask(&temp)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::eq("config.settings.development sh\n"));
    Ok(())
}
