//! Syntax error values
//!
//! Every lexical or syntactic problem becomes a [`SyntaxError`] carrying:
//! - the 1-based source line
//! - a categorized error code
//! - a severity
//! - an optional suggestion chosen from the offending token
//! - related lines (e.g. where an unclosed body was opened)

use std::fmt;

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::parser::SyntaxKind;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// A hard error in the source
    #[default]
    Error,
    /// Recorded, but the construct was still accepted as written
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A second line relevant to an error, e.g. "class body opened here".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub line: u32,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// A lexical or syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line of the offending token or character
    pub line: u32,
    /// Human-readable error message
    pub message: String,
    /// Suggestion based on the category of the offending token
    pub suggestion: Option<String>,
    /// Categorized error code
    pub code: ErrorCode,
    pub severity: Severity,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    /// Create an error with the given message at `line`
    pub fn new(message: impl Into<String>, line: u32, code: ErrorCode) -> Self {
        Self {
            line,
            message: message.into(),
            suggestion: None,
            code,
            severity: Severity::Error,
            related: vec![],
        }
    }

    /// Create a builder for more complex error construction
    pub fn builder(code: ErrorCode) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder::new(code)
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Format the error for display, one extra indented line per suggestion
    /// or related location
    pub fn format(&self) -> String {
        let mut result = format!(
            "line {}: {}[{}]: {}",
            self.line,
            self.severity.as_str(),
            self.code,
            self.message
        );
        if let Some(suggestion) = &self.suggestion {
            result.push_str(&format!("\n  suggestion: {suggestion}"));
        }
        for related in &self.related {
            result.push_str(&format!("\n  note: line {}: {}", related.line, related.message));
        }
        result
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Builder for syntax errors with optional parts
pub struct SyntaxErrorBuilder {
    code: ErrorCode,
    message: Option<String>,
    line: u32,
    suggestion: Option<String>,
    related: Vec<RelatedInfo>,
}

impl SyntaxErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            line: 0,
            suggestion: None,
            related: vec![],
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn suggestion(mut self, suggestion: Option<&str>) -> Self {
        self.suggestion = suggestion.map(str::to_string);
        self
    }

    pub fn related(mut self, message: impl Into<String>, line: u32) -> Self {
        self.related.push(RelatedInfo::new(message, line));
        self
    }

    /// Build the error, falling back to the code's default message
    pub fn build(self) -> SyntaxError {
        SyntaxError {
            line: self.line,
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            suggestion: self.suggestion,
            code: self.code,
            severity: Severity::Error,
            related: self.related,
        }
    }
}

/// Suggestion for an unexpected token, chosen by its category.
pub fn suggestion_for(kind: SyntaxKind) -> Option<&'static str> {
    match kind {
        SyntaxKind::CLASS_NAME => Some("check for a missing stereotype or keyword before this name"),
        SyntaxKind::L_BRACE => {
            Some("check that the preceding declaration is complete and well-formed for its kind")
        }
        SyntaxKind::R_BRACE => Some("check for a missing attribute, relation, or separator"),
        _ => None,
    }
}

/// Build an "unexpected token" error for `found` in `context`
pub fn format_context_error(
    kind: SyntaxKind,
    text: &str,
    line: u32,
    context: ParseContext,
    code: ErrorCode,
) -> SyntaxError {
    let found = if kind == SyntaxKind::EOF {
        kind.describe().to_string()
    } else {
        format!("{} '{}'", kind.describe(), text)
    };
    let message = format!(
        "unexpected {} {}, expected {}",
        found,
        context.description(),
        context.expected_description()
    );

    SyntaxError::builder(code)
        .message(message)
        .line(line)
        .suggestion(suggestion_for(kind))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_new() {
        let err = SyntaxError::new("expected ']'", 4, ErrorCode::E0204);

        assert_eq!(err.message, "expected ']'");
        assert_eq!(err.line, 4);
        assert_eq!(err.severity, Severity::Error);
        assert!(err.suggestion.is_none());
        assert!(err.related.is_empty());
    }

    #[test]
    fn test_syntax_error_builder_defaults() {
        let err = SyntaxError::builder(ErrorCode::E0202).line(7).build();

        assert_eq!(err.message, "unclosed brace");
        assert_eq!(err.line, 7);
    }

    #[test]
    fn test_syntax_error_builder_related() {
        let err = SyntaxError::builder(ErrorCode::E0202)
            .message("unclosed class body")
            .line(9)
            .related("class body opened here", 3)
            .build();

        assert_eq!(err.related, vec![RelatedInfo::new("class body opened here", 3)]);
    }

    #[test]
    fn test_suggestion_by_category() {
        assert_eq!(
            suggestion_for(SyntaxKind::CLASS_NAME),
            Some("check for a missing stereotype or keyword before this name")
        );
        assert!(suggestion_for(SyntaxKind::L_BRACE).is_some());
        assert!(suggestion_for(SyntaxKind::R_BRACE).is_some());
        assert_eq!(suggestion_for(SyntaxKind::COMMA), None);
        assert_eq!(suggestion_for(SyntaxKind::RELATION_NAME), None);
    }

    #[test]
    fn test_format_context_error() {
        let err = format_context_error(
            SyntaxKind::CLASS_NAME,
            "Person",
            2,
            ParseContext::TopLevel,
            ErrorCode::E0302,
        );

        assert!(err.message.contains("class name 'Person'"));
        assert!(err.message.contains("at top level"));
        assert!(err.suggestion.is_some());
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_format_includes_suggestion_and_note() {
        let err = SyntaxError::builder(ErrorCode::E0202)
            .message("unclosed class body")
            .line(5)
            .suggestion(Some("add '}'"))
            .related("opened here", 1)
            .build();

        let formatted = err.format();
        assert!(formatted.starts_with("line 5: error[E0202]: unclosed class body"));
        assert!(formatted.contains("suggestion: add '}'"));
        assert!(formatted.contains("note: line 1: opened here"));
    }

    #[test]
    fn test_warning_severity() {
        let err = SyntaxError::new("x", 1, ErrorCode::E0206).with_severity(Severity::Warning);
        assert!(!err.severity.is_error());
        assert_eq!(err.severity.as_str(), "warning");
    }
}
