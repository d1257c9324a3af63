//! # repo-export Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the export pipeline. Currently a single
//! submodule:
//!
//! - **`io`**: `ensure_dir_exists` for preparing the archive's parent
//!   directory, and `resolve_against` for anchoring relative output paths at
//!   the repository root.
//!

/// Directory creation and path resolution helpers.
pub mod io;
