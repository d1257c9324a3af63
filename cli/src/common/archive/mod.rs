//! # repo-export Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module writes the export archive. It owns the [`ArchiveFormat`] tag and
//! the [`write_archive`] dispatcher, which prepares the output location and
//! hands the file list to the backend for the requested format.
//!
//! ## Architecture
//!
//! - **`tar`**: gzip-compressed tarballs (`.tar.gz`) via the `tar` and `flate2` crates.
//! - **`zip`**: deflate-compressed zip archives via the `zip` crate. Compiled
//!   only with the `zip` cargo feature (on by default).
//!
//! Both backends add entries in the order they are given, under the
//! repository-relative path, reading each source from `root.join(path)`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{self, ArchiveFormat};
//!
//! # fn run(root: &Path, files: &[String]) -> anyhow::Result<()> {
//! archive::write_archive(ArchiveFormat::Tar, root, files, &root.join("out.tar.gz"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{ExportError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::info;

pub mod tar;
#[cfg(feature = "zip")]
pub mod zip;

/// Container format of the produced archive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    /// gzip-compressed tar stream
    #[default]
    Tar,
    /// deflate-compressed zip archive
    Zip,
}

impl ArchiveFormat {
    /// File name extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ArchiveFormat::Tar => "tar.gz",
            ArchiveFormat::Zip => "zip",
        }
    }

    /// Whether the backend for this format is compiled into the binary.
    pub fn is_available(self) -> bool {
        match self {
            ArchiveFormat::Tar => true,
            ArchiveFormat::Zip => cfg!(feature = "zip"),
        }
    }

    /// Fails with [`ExportError::BackendUnavailable`] if the backend is missing.
    pub fn ensure_available(self) -> Result<()> {
        if !self.is_available() {
            anyhow::bail!(ExportError::BackendUnavailable {
                format: self.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArchiveFormat::Tar => "tar",
            ArchiveFormat::Zip => "zip",
        })
    }
}

/// Writes `files` (relative to `root`) into a new archive at `out_path`.
///
/// The backend is checked before anything touches the filesystem. Parent
/// directories of `out_path` are created when missing, and an existing file
/// at `out_path` is overwritten.
///
/// # Errors
///
/// - [`ExportError::BackendUnavailable`] if `format` is not compiled in.
/// - [`ExportError::Io`] if a source cannot be read or the output cannot be
///   written. A partially written archive is left on disk.
pub fn write_archive(
    format: ArchiveFormat,
    root: &Path,
    files: &[String],
    out_path: &Path,
) -> Result<()> {
    format.ensure_available()?;

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        io::ensure_dir_exists(parent)?;
    }

    info!(
        "Writing {} archive with {} entries to {}",
        format,
        files.len(),
        out_path.display()
    );
    match format {
        ArchiveFormat::Tar => tar::write_tar_gz(root, files, out_path),
        #[cfg(feature = "zip")]
        ArchiveFormat::Zip => zip::write_zip(root, files, out_path),
        #[cfg(not(feature = "zip"))]
        ArchiveFormat::Zip => unreachable!("zip availability is checked above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_extensions() {
        assert_eq!(ArchiveFormat::Tar.extension(), "tar.gz");
        assert_eq!(ArchiveFormat::Zip.extension(), "zip");
        assert_eq!(ArchiveFormat::default(), ArchiveFormat::Tar);
    }

    #[test]
    fn test_tar_is_always_available() {
        assert!(ArchiveFormat::Tar.ensure_available().is_ok());
    }

    #[cfg(not(feature = "zip"))]
    #[test]
    fn test_zip_unavailable_creates_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/out.zip");

        let err = write_archive(ArchiveFormat::Zip, dir.path(), &["a".into()], &out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::BackendUnavailable { .. })
        ));
        assert!(!out.exists());
        assert!(!out.parent().unwrap().exists());
    }

    #[test]
    fn test_write_archive_creates_parent_dirs() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "hello")?;
        let out = dir.path().join("dist/deep/out.tar.gz");

        write_archive(ArchiveFormat::Tar, dir.path(), &["a.txt".into()], &out)?;

        assert!(out.is_file());
        Ok(())
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.tar.gz");

        let err = write_archive(
            ArchiveFormat::Tar,
            dir.path(),
            &["deleted-after-listing.txt".into()],
            &out,
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::Io { .. })
        ));
    }
}
