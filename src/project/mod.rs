//! Loading TONTO files from disk and following their imports.
//!
//! [`file_loader`] reads and parses one file; [`ImportLoader`] starts from a
//! root file and merges every file it transitively imports.

mod error;
pub mod file_loader;
mod import_loader;

pub use error::LoadError;
pub use file_loader::{ParsedFile, load_and_parse};
pub use import_loader::{FileReport, ImportLoader, ImportReport, LoadedModel, UnresolvedImport};

use std::path::{Path, PathBuf};

/// Extension of TONTO source files
pub const DEFAULT_EXTENSION: &str = "tonto";

/// File extension and extra directories searched for imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub extension: String,
    /// Consulted in order, after the importing file's own directory
    pub search_paths: Vec<PathBuf>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            search_paths: Vec::new(),
        }
    }
}

impl LoadOptions {
    pub fn with_search_path(mut self, path: impl AsRef<Path>) -> Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }
}
