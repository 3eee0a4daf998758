//! Integration tests for the errors module

use super::*;
use crate::parser::SyntaxKind;

#[test]
fn test_error_module_exports() {
    let _code = ErrorCode::E0901;
    let _severity = Severity::Error;
    let _context = ParseContext::TopLevel;

    let _err = SyntaxError::new("test error", 1, ErrorCode::E0901);
}

#[test]
fn test_unclosed_body_workflow() {
    let err = SyntaxError::builder(ErrorCode::E0202)
        .message("unclosed class body of 'Person'")
        .line(6)
        .suggestion(suggestion_for(SyntaxKind::R_BRACE))
        .related("class body opened here", 2)
        .build();

    assert_eq!(err.code, ErrorCode::E0202);
    assert_eq!(err.suggestion.as_deref(), suggestion_for(SyntaxKind::R_BRACE));
    assert_eq!(err.related[0].line, 2);
}

#[test]
fn test_error_code_exhaustiveness() {
    let codes = [
        ErrorCode::E0101,
        ErrorCode::E0102,
        ErrorCode::E0103,
        ErrorCode::E0104,
        ErrorCode::E0202,
        ErrorCode::E0204,
        ErrorCode::E0205,
        ErrorCode::E0206,
        ErrorCode::E0301,
        ErrorCode::E0302,
        ErrorCode::E0304,
        ErrorCode::E0305,
        ErrorCode::E0501,
        ErrorCode::E0502,
        ErrorCode::E0503,
        ErrorCode::E0601,
        ErrorCode::E0602,
        ErrorCode::E0603,
        ErrorCode::E0604,
        ErrorCode::E0901,
        ErrorCode::E0902,
    ];

    for code in codes {
        assert!(code.as_str().starts_with('E'));
        assert_eq!(code.as_str().len(), 5);
        assert!(!code.default_message().is_empty());
    }
}

#[test]
fn test_context_recovery_stops_at_declaration_starts() {
    let tokens = ParseContext::TopLevel.recovery_tokens();
    for kind in tokens {
        assert!(kind.is_declaration_start(), "{kind:?} is not a declaration start");
    }
}

#[test]
fn test_context_error_on_eof_has_no_text() {
    let err = format_context_error(
        SyntaxKind::EOF,
        "",
        12,
        ParseContext::ClassBody,
        ErrorCode::E0202,
    );
    assert!(err.message.contains("unexpected end of file in class body"));
    assert!(err.suggestion.is_none());
}
