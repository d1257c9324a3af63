//! # repo-export Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the export pipeline. Errors are reported as
//! `ExportError` so they land in the same taxonomy as archive failures.
//!
//! - **`ensure_dir_exists`**: creates a directory and its parents if missing,
//!   and rejects a path that exists but is not a directory. Used to prepare
//!   the output location of the archive.
//! - **`resolve_against`**: anchors a possibly relative path at a base
//!   directory. Used to interpret output paths relative to the repository root.
//!
use crate::core::error::{ExportError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, the directory is created together with any
/// missing parents (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| ExportError::io(path, e))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ExportError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Path exists but is not a directory",
            ),
        ));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Returns `path` unchanged if it is absolute, otherwise `base.join(path)`.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
