//! Error types for dataset loading.
//!
//! Loading is the only fallible step in the pipeline. Everything derived from
//! a loaded dataset degrades silently instead of failing.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while reading and validating a dataset document.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the expected shape.
    #[error("Invalid dataset '{origin}': {source}")]
    Parse {
        /// Where the document came from (a path or "bundled sample").
        origin: String,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    /// Create an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for the given origin.
    #[must_use]
    pub fn parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            source,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
