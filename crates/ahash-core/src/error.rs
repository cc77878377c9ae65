//! Errors that abort a hashing run

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while enumerating, hashing or reporting
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to echo record to console: {0}")]
    Console(#[source] std::io::Error),

    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
