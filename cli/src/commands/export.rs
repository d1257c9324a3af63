//! # repo-export Export Command
//!
//! File: cli/src/commands/export.rs
//!
//! ## Overview
//!
//! Implements the export pipeline: find the repository root, load the
//! configuration, resolve where the archive goes and in which format, list the
//! tracked files, write the archive and report the path.
//!
//! ## Architecture
//!
//! - `ExportArgs`: the command-line flags, flattened into the top-level parser.
//! - `resolve_target`: computes the [`ArchiveTarget`] from flags, config and
//!   defaults. Pure, no I/O.
//! - `run_export`: the pipeline itself, generic over any [`FileLister`] so
//!   tests can drive it without git.
//! - `handle_export`: wires a [`GitLister`] into `run_export` and prints the
//!   confirmation line.
//!
//! ## Examples
//!
//! ```bash
//! # tar.gz of the current repository at <root>/repo-head.tar.gz
//! repo-export
//!
//! # zip written to <root>/dist/snapshot.zip, regardless of the current directory
//! repo-export --zip -o dist/snapshot.zip
//!
//! # export another checkout
//! repo-export -C ../firmware --sorted
//! ```
//!
use crate::common::archive::{self, ArchiveFormat};
use crate::common::fs::io::resolve_against;
use crate::common::vcs::{self, git::GitLister, FileLister};
use crate::core::config::{self, ExportConfig};
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments for an export run.
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Produce a gzip-compressed tar archive (default).
    #[arg(long, conflicts_with = "zip")]
    pub tar: bool,

    /// Produce a deflate-compressed zip archive.
    #[arg(long)]
    pub zip: bool,

    /// Output file. Relative paths are resolved against the repository root.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory inside the repository to export (default: current directory).
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// git executable used to list tracked files.
    #[arg(long, value_name = "PATH", env = "REPO_EXPORT_GIT", default_value = "git")]
    pub git: PathBuf,

    /// Sort entries byte-wise instead of keeping git's listing order.
    #[arg(long)]
    pub sorted: bool,
}

impl ExportArgs {
    /// Format explicitly requested on the command line, if any.
    fn requested_format(&self) -> Option<ArchiveFormat> {
        if self.zip {
            Some(ArchiveFormat::Zip)
        } else if self.tar {
            Some(ArchiveFormat::Tar)
        } else {
            None
        }
    }
}

/// Where the archive is written and in which format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTarget {
    pub path: PathBuf,
    pub format: ArchiveFormat,
}

/// Computes the archive target for a repository rooted at `root`.
///
/// Format: command-line flag, then configured `format`, then tar.
/// Path: `--output`, then `<output_dir>/<base_name>.<ext>`, then
/// `<root>/repo-head.<ext>`. Relative paths are anchored at `root`.
pub fn resolve_target(root: &Path, args: &ExportArgs, cfg: &ExportConfig) -> ArchiveTarget {
    let format = args
        .requested_format()
        .or(cfg.format)
        .unwrap_or_default();

    let path = match &args.output {
        Some(output) => output.clone(),
        None => {
            let file_name = format!("{}.{}", cfg.base_name(), format.extension());
            match &cfg.output_dir {
                Some(dir) => PathBuf::from(dir).join(file_name),
                None => PathBuf::from(file_name),
            }
        }
    };

    ArchiveTarget {
        path: resolve_against(root, &path),
        format,
    }
}

/// Runs the export pipeline and returns the target that was written.
pub fn run_export(lister: &dyn FileLister, args: &ExportArgs) -> Result<ArchiveTarget> {
    let start = match &args.repo {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let root = lister.repository_root(&start)?;
    info!("Exporting repository at {}", root.display());

    let cfg = config::load_config(&root)?;
    let target = resolve_target(&root, args, &cfg.export);
    debug!("Resolved archive target: {:?}", target);
    target.format.ensure_available()?;

    let mut files = vcs::list_tracked_files(lister, &root)?;
    if args.sorted || cfg.export.sorted.unwrap_or(false) {
        files.sort_unstable();
    }

    archive::write_archive(target.format, &root, &files, &target.path)
        .with_context(|| format!("Failed to write archive {}", target.path.display()))?;
    Ok(target)
}

/// # Handle Export Command (`handle_export`)
///
/// Entry point called from `main`. Runs the pipeline against the git
/// executable named by `--git` and prints one confirmation line on success.
pub fn handle_export(args: ExportArgs) -> Result<()> {
    info!("Handling export with args: {:?}", args);
    let lister = GitLister::new(args.git.clone());
    let target = run_export(&lister, &args)?;
    println!("Archive written: {}", target.path.display());
    Ok(())
}
