//! Configuration schema definitions.
//!
//! These structs map to the `devtask.yml` file format. Every field has a
//! default, so an empty file and a missing file behave the same.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure for devtask.yml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Dependency installer
    pub installer: InstallerConfig,

    /// Container orchestrator
    pub orchestrator: OrchestratorConfig,

    /// Web application management entry point
    pub manage: ManageConfig,

    /// Extra environment variables for every child process
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

/// Dependency installer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Program and leading arguments; the manifest path is appended.
    pub command: Vec<String>,

    /// Manifest file listing the dependencies.
    pub manifest: PathBuf,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            command: strings(&["pip", "install", "-r"]),
            manifest: PathBuf::from("requirements.txt"),
        }
    }
}

/// Container orchestrator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrchestratorConfig {
    /// Program and leading arguments; `up -d <service>` is appended.
    pub command: Vec<String>,

    /// Service started by `db-up`.
    pub service: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            command: strings(&["docker-compose"]),
            service: "db".to_string(),
        }
    }
}

/// Management entry point settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManageConfig {
    /// Program and leading arguments; the sub-action is appended.
    pub command: Vec<String>,
}

impl Default for ManageConfig {
    fn default() -> Self {
        Self {
            command: strings(&["python", "manage.py"]),
        }
    }
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
