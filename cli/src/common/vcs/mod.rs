//! # repo-export Version Control Listing (`common::vcs`)
//!
//! File: cli/src/common/vcs/mod.rs
//!
//! ## Overview
//!
//! Everything the exporter needs from version control sits behind the
//! [`FileLister`] trait: locating the repository root and enumerating the
//! tracked files beneath it. The production implementation shells out to git
//! ([`git::GitLister`]); tests substitute an in-memory fake.
//!
//! ## Architecture
//!
//! - **`git`**: `GitLister`, which runs `git rev-parse` and `git ls-files`.
//! - [`list_tracked_files`]: the entry point the export pipeline calls. It
//!   wraps any lister and rejects an empty listing, so every implementation
//!   shares the same failure semantics.
//! - [`parse_listing`]: turns newline-delimited tool output into paths.
//!
use crate::core::error::{ExportError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod git;

/// Source of the repository root and its tracked files.
pub trait FileLister {
    /// Resolves the top-level directory of the repository containing `start`.
    fn repository_root(&self, start: &Path) -> Result<PathBuf>;

    /// Returns the tracked paths under `root`, relative to it, in the
    /// tool's own order. May be empty.
    fn tracked_files(&self, root: &Path) -> Result<Vec<String>>;
}

/// Lists the tracked files of `root` through `lister`.
///
/// # Errors
///
/// Propagates the lister's failure, and returns
/// [`ExportError::EmptyRepository`] when nothing is tracked.
pub fn list_tracked_files(lister: &dyn FileLister, root: &Path) -> Result<Vec<String>> {
    let files = lister.tracked_files(root)?;
    if files.is_empty() {
        anyhow::bail!(ExportError::EmptyRepository);
    }
    info!("Found {} tracked files under {}", files.len(), root.display());
    Ok(files)
}

/// Splits listing output on line boundaries, trimming each line and dropping
/// blank ones.
pub fn parse_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fake::FakeLister;
    use super::*;

    #[test]
    fn test_parse_listing_trims_and_skips_blank_lines() {
        let output = "a.txt\r\n  sub/b.txt  \n\n\t\nREADME.md\n";
        assert_eq!(
            parse_listing(output),
            vec!["a.txt", "sub/b.txt", "README.md"]
        );
    }

    #[test]
    fn test_parse_listing_keeps_order() {
        let output = "zeta\nalpha\nmid\n";
        assert_eq!(parse_listing(output), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_listing_is_empty_repository() {
        let lister = FakeLister {
            root: PathBuf::from("/repo"),
            files: Vec::new(),
        };
        let err = list_tracked_files(&lister, Path::new("/repo")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::EmptyRepository)
        ));
    }

    #[test]
    fn test_non_empty_listing_passes_through() -> Result<()> {
        let lister = FakeLister {
            root: PathBuf::from("/repo"),
            files: vec!["b".into(), "a".into()],
        };
        assert_eq!(list_tracked_files(&lister, Path::new("/repo"))?, vec!["b", "a"]);
        Ok(())
    }
}
