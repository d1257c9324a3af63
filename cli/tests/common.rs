//! # repo-export Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: locating the
//! compiled binary, isolating it from the developer's own configuration, and
//! building throwaway git repositories.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

/// # Get repo-export Command (`export_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `repo-export` binary with
/// `HOME` and `XDG_CONFIG_HOME` pointed at `home`, so no user configuration
/// leaks into the test, and `REPO_EXPORT_GIT`/`RUST_LOG` cleared.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn export_cmd(home: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("repo-export").expect("Failed to find repo-export binary for testing");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("REPO_EXPORT_GIT")
        .env_remove("RUST_LOG");
    cmd
}

/// Returns `true` if a working `git` is on PATH. Tests that need a real
/// repository return early when it is not.
pub fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Runs `git <args>` in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        status.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Initialises a repository in `dir`, writes `files` (relative path, content)
/// and stages them so `git ls-files` lists them.
pub fn init_repo(dir: &Path, files: &[(&str, &str)]) {
    git(dir, &["init", "-q"]);
    for (rel, content) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write file");
        git(dir, &["add", rel]);
    }
}
