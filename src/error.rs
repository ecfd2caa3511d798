//! Error types for Pointplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pointplot operations.
pub type Result<T> = std::result::Result<T, PointplotError>;

/// Errors that can occur in Pointplot.
#[derive(Debug, Error)]
pub enum PointplotError {
    /// The input file does not exist.
    #[error("File '{path}' not found")]
    FileNotFound {
        /// Path that failed to resolve.
        path: PathBuf,
    },

    /// A record that does not parse as two floating-point fields.
    #[error("{path}:{line}: malformed record: {reason}")]
    MalformedRecord {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number of the offending record.
        line: usize,
        /// Why the record failed to parse.
        reason: String,
    },

    /// The input file contained no points.
    #[error("No points found in '{path}'")]
    EmptyInput {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PointplotError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a MalformedRecord error.
    pub fn malformed_record(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create an EmptyInput error.
    pub fn empty_input(path: impl Into<PathBuf>) -> Self {
        Self::EmptyInput { path: path.into() }
    }
}
