//! # repo-export Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the export pipeline:
//! - `config`: Loading and merging of the optional TOML configuration files
//! - `error`: The `ExportError` taxonomy and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ExportError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
