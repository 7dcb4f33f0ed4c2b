//! Tool locations for the external collaborators.
//!
//! The six command sequences are fixed in [`crate::tasks`]; what can be
//! changed is *which* programs play the installer, orchestrator and
//! management entry point roles:
//! - Schema definitions in [`schema`]
//! - Optional file loading and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use devtask::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("devtask.yml"), "orchestrator:\n  service: postgres\n").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.orchestrator.service, "postgres");
//! assert_eq!(config.manage.command, vec!["python", "manage.py"]);
//! ```
//!
//! # Configuration File Location
//!
//! `devtask.yml` in the directory devtask is run from. A missing file is
//! not an error: the built-in defaults are used.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, validate, CONFIG_FILE_NAME};
pub use schema::{InstallerConfig, ManageConfig, OrchestratorConfig, ToolchainConfig};
