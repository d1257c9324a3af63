//! # repo-export ZIP Archive Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! ## Overview
//!
//! Writes a deflate-compressed zip archive with the `zip` crate. Entries are
//! named by their repository-relative path, with `/` as separator on every
//! platform. Symbolic links are followed and stored as regular files. On Unix
//! the source permission bits are recorded in each entry.
//!
//! A listed path that is a directory (a submodule checkout) is walked with
//! `walkdir` in file-name order and added entry by entry.
//!
use crate::core::error::{ExportError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Creates (or truncates) `out_path` and writes every entry of `files` into a
/// deflate-compressed zip archive, in the given order.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the output cannot be written or any listed
/// file cannot be read.
pub fn write_zip(root: &Path, files: &[String], out_path: &Path) -> Result<()> {
    let file = File::create(out_path).map_err(|e| ExportError::io(out_path, e))?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for rel in files {
        let full = root.join(rel);
        let meta = fs::metadata(&full).map_err(|e| ExportError::io(&full, e))?;
        if meta.is_dir() {
            add_directory_tree(&mut writer, &full, rel, options)?;
        } else {
            add_file(&mut writer, &full, rel, &meta, options)?;
        }
    }

    let mut inner = writer
        .finish()
        .map_err(|e| ExportError::io(out_path, zip_to_io(e)))?;
    inner.flush().map_err(|e| ExportError::io(out_path, e))?;
    Ok(())
}

fn add_file<W: Write + Seek>(
    writer: &mut ZipWriter<W>,
    full: &Path,
    name: &str,
    meta: &fs::Metadata,
    options: SimpleFileOptions,
) -> Result<()> {
    debug!("Adding {} to zip archive", name);
    let options = with_permissions(options, meta).large_file(needs_zip64(meta.len()));
    writer
        .start_file(name, options)
        .map_err(|e| ExportError::io(full, zip_to_io(e)))?;
    let mut source = File::open(full).map_err(|e| ExportError::io(full, e))?;
    io::copy(&mut source, writer).map_err(|e| ExportError::io(full, e))?;
    Ok(())
}

fn add_directory_tree<W: Write + Seek>(
    writer: &mut ZipWriter<W>,
    dir: &Path,
    rel: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ExportError::io(path, e.into())
        })?;
        let suffix = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let name = if suffix.is_empty() {
            rel.trim_end_matches('/').to_string()
        } else {
            format!("{}/{}", rel.trim_end_matches('/'), suffix)
        };

        let meta = fs::metadata(entry.path()).map_err(|e| ExportError::io(entry.path(), e))?;
        if meta.is_dir() {
            debug!("Adding directory {} to zip archive", name);
            writer
                .add_directory(name.as_str(), options)
                .map_err(|e| ExportError::io(entry.path(), zip_to_io(e)))?;
        } else {
            add_file(writer, entry.path(), &name, &meta, options)?;
        }
    }
    Ok(())
}

/// Entries of 4 GiB and more need ZIP64 size fields.
fn needs_zip64(len: u64) -> bool {
    len >= u64::from(u32::MAX)
}

#[cfg(unix)]
fn with_permissions(options: SimpleFileOptions, meta: &fs::Metadata) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;
    options.unix_permissions(meta.permissions().mode())
}

#[cfg(not(unix))]
fn with_permissions(options: SimpleFileOptions, _meta: &fs::Metadata) -> SimpleFileOptions {
    options
}

fn zip_to_io(err: zip::result::ZipError) -> io::Error {
    match err {
        zip::result::ZipError::Io(e) => e,
        other => io::Error::other(other),
    }
}
