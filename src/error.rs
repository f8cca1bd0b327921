//! Global error handling for dumptree
//!
//! This module provides a centralized error type covering every failure mode
//! of a scan-and-dump run. All failures are fail-fast; nothing is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for dumptree operations
#[derive(Error, Debug)]
pub enum DumpTreeError {
    /// Base path cannot be resolved, does not exist, or is not a directory
    #[error("invalid project path: {0}")]
    InvalidPath(String),

    /// A directory's contents could not be listed; aborts the whole scan
    #[error("failed to list directory {}: {source}", path.display())]
    Scan { path: PathBuf, source: io::Error },

    /// A selected file could not be read during content rendering
    #[error("failed to read file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Output stream errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for dumptree operations
pub type Result<T> = std::result::Result<T, DumpTreeError>;
