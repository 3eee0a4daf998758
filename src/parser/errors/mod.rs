//! Parser error handling module
//!
//! This module provides error values for the TONTO lexer and parser:
//! - Categorized error codes for filtering
//! - Context-aware error messages and recovery token sets
//! - Suggestions chosen by the category of the offending token
//! - Related line tracking (e.g., "opened here" for unclosed bodies)

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{RelatedInfo, Severity, SyntaxError, format_context_error, suggestion_for};

#[cfg(test)]
mod tests;
