//! # repo-export Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration that adjusts export defaults:
//! the archive file stem, the default format, the directory archives are
//! written to, and whether entries are sorted before archiving. Command-line
//! flags always take precedence over anything configured here.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.repo-export.toml` at the repository root
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/repo-export/config.toml` on Linux)
//! 3. Built-in defaults
//!
//! Both files share one schema. Values are merged field by field, then `~` is
//! expanded in paths and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [export]
//! base_name = "firmware-head"
//! format = "zip"
//! output_dir = "~/exports"
//! sorted = true
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&root)?;
//! let stem = cfg.export.base_name();
//! ```
//!
use crate::common::archive::ArchiveFormat;
use crate::core::error::{ExportError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// File stem used for the archive when neither `-o` nor `base_name` is given.
pub const DEFAULT_BASE_NAME: &str = "repo-head";

const PROJECT_CONFIG_FILENAME: &str = ".repo-export.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
}

/// Defaults for `repo-export` runs.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// File stem of the default archive name; the format extension is appended.
    pub base_name: Option<String>,
    /// Archive format used when neither `--tar` nor `--zip` is given.
    pub format: Option<ArchiveFormat>,
    /// Directory the default archive is written to (can use ~). Relative
    /// paths are resolved against the repository root.
    pub output_dir: Option<String>,
    /// Sort entries byte-wise instead of keeping git's listing order.
    pub sorted: Option<bool>,
}

impl ExportConfig {
    /// The configured file stem, or [`DEFAULT_BASE_NAME`].
    pub fn base_name(&self) -> &str {
        self.base_name.as_deref().unwrap_or(DEFAULT_BASE_NAME)
    }
}

/// Loads, merges, expands and validates the user and project configuration
/// for the repository rooted at `root`.
pub fn load_config(root: &Path) -> Result<Config> {
    let user_config = match user_config_path() {
        Some(path) => load_optional(&path, "user")?,
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    };
    let project_config = load_optional(&root.join(PROJECT_CONFIG_FILENAME), "project")?;

    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "RepoExport", "repo-export")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_optional(path: &Path, kind: &str) -> Result<Option<Config>> {
    if path.is_file() {
        info!("Loading {} configuration from: {}", kind, path.display());
        load_config_from_path(path).map(Some)
    } else {
        debug!("No {} configuration file at {}", kind, path.display());
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(ExportError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p.export,
        None => return user,
    };
    let user = user.export;
    Config {
        export: ExportConfig {
            base_name: project.base_name.or(user.base_name),
            format: project.format.or(user.format),
            output_dir: project.output_dir.or(user.output_dir),
            sorted: project.sorted.or(user.sorted),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.export.output_dir.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded output directory: {}", dir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(name) = &config.export.base_name {
        if name.trim().is_empty() {
            return Err(anyhow!(ExportError::Config(
                "base_name cannot be empty.".to_string()
            )));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(anyhow!(ExportError::Config(format!(
                "base_name '{}' must be a file name, not a path. Use output_dir for the directory.",
                name
            ))));
        }
    }
    if let Some(dir) = &config.export.output_dir {
        if dir.is_empty() {
            return Err(anyhow!(ExportError::Config(
                "output_dir cannot be empty.".to_string()
            )));
        }
    }
    Ok(())
}
