//! Reading and parsing single source files.

use std::path::{Path, PathBuf};

use super::LoadOptions;
use super::error::LoadError;
use crate::parser::{Parse, parse};

/// A parsed file together with where it came from.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub parse: Parse,
}

/// Extension of `path`, without the dot
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Check that `path` carries the configured extension (ASCII case-insensitive)
pub fn validate_extension(path: &Path, options: &LoadOptions) -> Result<(), LoadError> {
    match get_extension(path) {
        Some(ext) if ext.eq_ignore_ascii_case(&options.extension) => Ok(()),
        _ => Err(LoadError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: options.extension.clone(),
        }),
    }
}

/// Read a file into a string
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::io(path, source))
}

/// Validate, read and parse a file
pub fn load_and_parse(path: &Path, options: &LoadOptions) -> Result<ParsedFile, LoadError> {
    validate_extension(path, options)?;
    let text = load_file(path)?;
    let parse = parse(&text);
    tracing::debug!(
        path = %path.display(),
        errors = parse.errors.len(),
        "loaded file"
    );
    Ok(ParsedFile {
        path: path.to_path_buf(),
        parse,
    })
}
