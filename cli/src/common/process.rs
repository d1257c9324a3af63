//! # repo-export Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Thin wrapper around `std::process::Command` for running an external tool to
//! completion and capturing what it printed. The caller decides how a spawn
//! failure or a non-zero exit maps onto `ExportError`, so this module hands
//! back the raw `std::io::Error` when the process cannot be started at all.
//!
//! ```rust
//! let out = process::run_command_capture(Path::new("git"), &["ls-files"], Some(&root))?;
//! if out.success {
//!     println!("{}", out.stdout);
//! }
//! ```
//!
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, trace};

/// Result of a finished external command.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// `true` if the process exited with status zero.
    pub success: bool,
    /// Human-readable exit status (e.g. `exit status: 128`).
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `program` with `args`, optionally inside `cwd`, and blocks until it exits.
///
/// Stdin is closed; stdout and stderr are captured and decoded lossily as UTF-8.
///
/// # Errors
///
/// Returns the `std::io::Error` from spawning the process. An executable that
/// cannot be found surfaces as `ErrorKind::NotFound`.
pub fn run_command_capture(
    program: &Path,
    args: &[&str],
    cwd: Option<&Path>,
) -> std::io::Result<CapturedOutput> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!("Running {:?} {:?} in {:?}", program, args, cwd);
    let output = command.output()?;

    let captured = CapturedOutput {
        success: output.status.success(),
        status: output.status.to_string(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    trace!(
        "Command {:?} finished: {}, stderr='{}'",
        program,
        captured.status,
        captured.stderr.trim()
    );
    Ok(captured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_found() {
        let result = run_command_capture(
            Path::new("repo-export-definitely-not-a-real-tool"),
            &["--version"],
            None,
        );
        let err = result.expect_err("spawning a missing program must fail");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_and_status() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let out = run_command_capture(Path::new("sh"), &["-c", "echo hi; exit 3"], Some(dir.path()))?;
        assert!(!out.success);
        assert_eq!(out.stdout.trim(), "hi");
        Ok(())
    }
}
