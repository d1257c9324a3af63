//! # repo-export Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the export command:
//!
//! - **`archive`**: the archive format tag and the tar.gz / zip writers.
//! - **`fs`**: directory creation and path resolution.
//! - **`process`**: running external tools and capturing their output.
//! - **`vcs`**: the `FileLister` abstraction and its git implementation.
//!
//! ```rust
//! use crate::common::{archive, vcs};
//!
//! # fn run(lister: &dyn vcs::FileLister, root: &Path) -> anyhow::Result<()> {
//! let files = vcs::list_tracked_files(lister, root)?;
//! archive::write_archive(archive::ArchiveFormat::Zip, root, &files, &root.join("out.zip"))?;
//! # Ok(())
//! # }
//! ```
//!

/// Archive writers (gzip tar, deflate zip).
pub mod archive;
/// Filesystem helpers.
pub mod fs;
/// External process execution with captured output.
pub mod process;
/// Tracked-file listing through version control.
pub mod vcs;
