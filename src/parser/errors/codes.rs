//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid characters, literals, comments)
//! - E02xx: Structural errors (braces, brackets)
//! - E03xx: Declaration errors (classes, attributes, datatypes, enums)
//! - E05xx: Package/import errors
//! - E06xx: Relation and generalization set errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Invalid numeric literal
    E0104,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unclosed brace `{`
    E0202,
    /// Malformed cardinality `[...]`
    E0204,
    /// Unexpected closing delimiter
    E0205,
    /// Cardinality lower bound above upper bound
    E0206,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Name without a leading stereotype or keyword
    E0302,
    /// Unexpected token in a declaration body
    E0304,
    /// Missing attribute type
    E0305,

    // =========================================================================
    // E05xx: Package/import errors
    // =========================================================================
    /// Import after the package declaration
    E0501,
    /// Missing package declaration
    E0502,
    /// More than one package declaration
    E0503,

    // =========================================================================
    // E06xx: Relation and genset errors
    // =========================================================================
    /// Missing or invalid relation symbol
    E0601,
    /// Missing relation end (cardinality or class)
    E0602,
    /// Specific listed twice in a genset
    E0603,
    /// Genset without general or specifics
    E0604,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0202")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0202 => "E0202",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
            Self::E0603 => "E0603",
            Self::E0604 => "E0604",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "invalid numeric literal",
            Self::E0202 => "unclosed brace",
            Self::E0204 => "malformed cardinality",
            Self::E0205 => "unexpected closing delimiter",
            Self::E0206 => "cardinality lower bound exceeds upper bound",
            Self::E0301 => "missing identifier",
            Self::E0302 => "missing stereotype or keyword",
            Self::E0304 => "unexpected token in declaration body",
            Self::E0305 => "missing attribute type",
            Self::E0501 => "import after package declaration",
            Self::E0502 => "missing package declaration",
            Self::E0503 => "duplicate package declaration",
            Self::E0601 => "missing relation symbol",
            Self::E0602 => "missing relation end",
            Self::E0603 => "duplicate genset specific",
            Self::E0604 => "incomplete genset",
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
        }
    }

}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0202.as_str(), "E0202");
        assert_eq!(ErrorCode::E0901.as_str(), "E0901");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0603), "E0603");
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(ErrorCode::E0101.default_message(), "invalid character");
        assert_eq!(ErrorCode::E0202.default_message(), "unclosed brace");
    }
}
