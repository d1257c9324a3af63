//! # repo-export Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! `repo-export` packs the files git tracks in a repository into a single
//! gzip-compressed tar or deflate-compressed zip archive. This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the export and turning failures into a non-zero exit status
//!
//! ## Examples
//!
//! ```bash
//! # <root>/repo-head.tar.gz
//! repo-export
//!
//! # zip with an explicit name, resolved against the repository root
//! repo-export --zip -o out.zip
//!
//! # show what is being archived
//! repo-export -vv
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Run the export
//! 4. Print the archive path, or the error on stderr with exit status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The export command.
mod common; // Archive writers, git listing, process and fs helpers.
mod core; // Configuration and error types.

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "repo-export",
    about = "Export the git-tracked files of a repository into a tar.gz or zip archive",
    long_about = "Collects the files git tracks in the current checkout and packs them into\n\
                  a single archive. Relative output paths are resolved against the\n\
                  repository root, not the current directory.",
    version
)]
struct Cli {
    #[command(flatten)]
    export: commands::export::ExportArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::export::handle_export(cli.export) {
        tracing::error!("Export failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
