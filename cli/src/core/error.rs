//! # repo-export Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy for an export run. Every variant is
//! terminal: the driver reports it on stderr and exits with a non-zero status.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ExportError`: A custom error enum using `thiserror` for the specific failure kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible propagation
//!
//! The failure kinds cover:
//! - Missing version-control tooling
//! - Failed or empty file listings
//! - Archive backends not compiled into this build
//! - Filesystem I/O while reading sources or writing the archive
//! - Malformed configuration files
//!
//! ## Examples
//!
//! ```rust
//! // Raise a specific error type
//! if files.is_empty() {
//!     anyhow::bail!(ExportError::EmptyRepository);
//! }
//!
//! // Wrap an I/O failure with the path it happened on
//! let file = File::open(&path).map_err(|e| ExportError::io(&path, e))?;
//!
//! // Inspect the kind of a propagated error
//! let empty = err
//!     .downcast_ref::<ExportError>()
//!     .map_or(false, |e| matches!(e, ExportError::EmptyRepository));
//! ```
//!
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure kinds of a repository export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("'{tool}' executable not found in PATH")]
    ToolingMissing { tool: String },

    #[error("{cmd} failed: {stderr}")]
    ListingFailed { cmd: String, stderr: String },

    #[error("No tracked files in the repository, nothing to archive.")]
    EmptyRepository,

    #[error("The {format} archive backend is not available in this build.")]
    BackendUnavailable { format: String },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExportError {
    /// Builds an [`ExportError::Io`] tagged with the path being read or written.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
