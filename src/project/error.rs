//! Error types for loading source files.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions while loading files. Syntax errors are not among them:
/// those are collected per file and loading continues.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read (or its path could not be resolved).
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not carry the configured extension.
    #[error("unsupported file extension for {}: expected .{expected}", .path.display())]
    UnsupportedExtension { path: PathBuf, expected: String },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::UnsupportedExtension { path, .. } => path,
        }
    }
}
