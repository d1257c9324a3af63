//! # repo-export TAR Archive Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Writes a gzipped tarball (`.tar.gz`) containing a list of files taken from
//! a repository checkout.
//!
//! ## Architecture
//!
//! The module leverages the `tar` crate for building the archive structure and
//! the `flate2` crate for Gzip compression. The archive is streamed straight to
//! the output file rather than assembled in memory.
//!
//! - Each listed path is resolved against the repository root and stored under
//!   the relative path as its entry name.
//! - Symbolic links are stored as links, not followed.
//! - A listed path that is a directory (a submodule checkout) is added
//!   recursively.
//!
use crate::core::error::{ExportError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// # Write Gzipped TAR Archive (`write_tar_gz`)
///
/// Creates (or truncates) `out_path` and writes every entry of `files` into a
/// gzip-compressed tar stream, in the given order.
///
/// ## Arguments
///
/// * `root` - Directory the relative paths in `files` are resolved against.
/// * `files` - Repository-relative paths, used verbatim as entry names.
/// * `out_path` - Archive file to create. Its parent directory must exist.
///
/// ## Errors
///
/// Returns [`ExportError::Io`] if:
/// - The output file cannot be created or written.
/// - Any listed file cannot be read (e.g. removed since it was listed).
/// - Finishing the TAR structure or the Gzip stream fails.
pub fn write_tar_gz(root: &Path, files: &[String], out_path: &Path) -> Result<()> {
    let file = File::create(out_path).map_err(|e| ExportError::io(out_path, e))?;
    let enc = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut tar_builder = tar::Builder::new(enc);
    tar_builder.follow_symlinks(false);

    for rel in files {
        let full = root.join(rel);
        debug!("Adding {} to tar archive", rel);
        append_entry(&mut tar_builder, &full, rel)?;
    }

    // Writes the closing records, then the gzip footer.
    let encoder = tar_builder
        .into_inner()
        .map_err(|e| ExportError::io(out_path, e))?;
    let mut writer = encoder
        .finish()
        .map_err(|e| ExportError::io(out_path, e))?;
    writer.flush().map_err(|e| ExportError::io(out_path, e))?;
    Ok(())
}

fn append_entry<W: Write>(builder: &mut tar::Builder<W>, full: &Path, rel: &str) -> Result<()> {
    let meta = fs::symlink_metadata(full).map_err(|e| ExportError::io(full, e))?;
    let appended = if meta.is_dir() {
        builder.append_dir_all(rel, full)
    } else {
        builder.append_path_with_name(full, rel)
    };
    appended.map_err(|e| ExportError::io(full, e))?;
    Ok(())
}
