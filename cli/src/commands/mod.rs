//! # repo-export Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Command handlers invoked from `main.rs`. The tool has a single operation,
//! so there are no subcommands: the export flags are flattened into the
//! top-level parser and routed to `export::handle_export`.
//!

/// Export of the tracked files into a tar.gz or zip archive.
pub mod export;
