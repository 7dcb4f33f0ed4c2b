//! Configuration file loading and validation.

use crate::config::schema::ToolchainConfig;
use crate::error::{DevtaskError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE_NAME: &str = "devtask.yml";

/// Load the configuration for `project_root`.
///
/// Returns the defaults when `devtask.yml` does not exist.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid and
/// `ConfigValidationError` if a command prefix is empty.
pub fn load_config(project_root: &Path) -> Result<ToolchainConfig> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        tracing::debug!(
            "No {} in {}, using defaults",
            CONFIG_FILE_NAME,
            project_root.display()
        );
        return Ok(ToolchainConfig::default());
    }
    load_config_file(&path)
}

/// Load and validate a specific config file.
pub fn load_config_file(path: &Path) -> Result<ToolchainConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content, path)?;
    validate(&config)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse YAML content into a [`ToolchainConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ToolchainConfig> {
    if content.trim().is_empty() {
        return Ok(ToolchainConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DevtaskError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check that every command prefix names a program.
pub fn validate(config: &ToolchainConfig) -> Result<()> {
    let prefixes = [
        ("installer.command", &config.installer.command),
        ("orchestrator.command", &config.orchestrator.command),
        ("manage.command", &config.manage.command),
    ];

    for (field, command) in prefixes {
        match command.first() {
            Some(program) if !program.trim().is_empty() => {}
            _ => {
                return Err(DevtaskError::ConfigValidationError {
                    message: format!("{} must start with a program name", field),
                })
            }
        }
    }

    if config.orchestrator.service.trim().is_empty() {
        return Err(DevtaskError::ConfigValidationError {
            message: "orchestrator.service must not be empty".to_string(),
        });
    }

    Ok(())
}
