//! # repo-export Git Lister (`common::vcs::git`)
//!
//! File: cli/src/common/vcs/git.rs
//!
//! ## Overview
//!
//! [`GitLister`] implements [`FileLister`] by invoking the git executable:
//!
//! - `git rev-parse --show-toplevel` finds the repository root.
//! - `git -c core.quotepath=off ls-files` lists tracked paths in index order.
//!   `core.quotepath=off` keeps non-ASCII file names unescaped.
//!
//! A git binary that cannot be spawned becomes `ExportError::ToolingMissing`;
//! a git invocation that exits non-zero becomes `ExportError::ListingFailed`
//! with git's stderr attached.
//!
use super::{parse_listing, FileLister};
use crate::common::process::{self, CapturedOutput};
use crate::core::error::{ExportError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists tracked files with the git command-line tool.
#[derive(Debug, Clone)]
pub struct GitLister {
    program: PathBuf,
}

impl GitLister {
    /// Creates a lister that runs `program` (usually just `git`).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<CapturedOutput> {
        let output = match process::run_command_capture(&self.program, args, Some(cwd)) {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                anyhow::bail!(ExportError::ToolingMissing {
                    tool: self.program.display().to_string(),
                });
            }
            Err(e) => return Err(ExportError::io(&self.program, e).into()),
        };

        if !output.success {
            anyhow::bail!(ExportError::ListingFailed {
                cmd: format!("git {}", args.join(" ")),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl Default for GitLister {
    fn default() -> Self {
        Self::new("git")
    }
}

impl FileLister for GitLister {
    fn repository_root(&self, start: &Path) -> Result<PathBuf> {
        let output = self.run(&["rev-parse", "--show-toplevel"], start)?;
        let root = PathBuf::from(output.stdout.trim());
        debug!("Repository root resolved to {}", root.display());
        Ok(root)
    }

    fn tracked_files(&self, root: &Path) -> Result<Vec<String>> {
        let output = self.run(&["-c", "core.quotepath=off", "ls-files"], root)?;
        Ok(parse_listing(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_git_is_tooling_missing() {
        let dir = tempdir().unwrap();
        let lister = GitLister::new("repo-export-no-such-git");

        let err = lister.tracked_files(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::ToolingMissing { .. })
        ));

        let err = lister.repository_root(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::ToolingMissing { .. })
        ));
    }

    /// A git stand-in that fails every invocation with a diagnostic.
    #[cfg(unix)]
    #[test]
    fn test_failing_ls_files_is_listing_failed() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let fake_git = dir.path().join("fake-git");
        std::fs::write(
            &fake_git,
            "#!/bin/sh\necho 'fatal: index file corrupt' >&2\nexit 1\n",
        )?;
        std::fs::set_permissions(&fake_git, std::fs::Permissions::from_mode(0o755))?;
        let lister = GitLister::new(&fake_git);

        let err = lister.tracked_files(dir.path()).unwrap_err();

        match err.downcast_ref::<ExportError>() {
            Some(ExportError::ListingFailed { cmd, stderr }) => {
                assert!(cmd.contains("ls-files"));
                assert_eq!(stderr, "fatal: index file corrupt");
            }
            other => panic!("expected ListingFailed, got {:?}", other),
        }
        Ok(())
    }
}
