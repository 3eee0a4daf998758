//! Lexer Tests - Classification, Values and Lexical Errors
//!
//! Tests for identifier classification, token values, comment handling and
//! recovery from bad characters.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use rstest::rstest;
use tonto::keywords::classify_word;
use tonto::parser::{ErrorCode, SyntaxKind, TokenValue, tokenize};

fn kinds(input: &str) -> Vec<SyntaxKind> {
    tokenize(input).tokens.iter().map(|t| t.kind).collect()
}

// ============================================================================
// Identifier Classification
// ============================================================================

#[rstest]
#[case("Person", SyntaxKind::CLASS_NAME)]
#[case("person1", SyntaxKind::INSTANCE_NAME)]
#[case("hasName", SyntaxKind::RELATION_NAME)]
#[case("ColorDataType", SyntaxKind::DATATYPE_NAME)]
#[case("true", SyntaxKind::BOOLEAN)]
#[case("false", SyntaxKind::BOOLEAN)]
#[case("kind", SyntaxKind::CLASS_STEREOTYPE)]
#[case("roleMixin", SyntaxKind::CLASS_STEREOTYPE)]
#[case("mediation", SyntaxKind::RELATION_STEREOTYPE)]
#[case("externalDependence", SyntaxKind::RELATION_STEREOTYPE)]
#[case("GENSET", SyntaxKind::GENSET_KW)]
#[case("Specializes", SyntaxKind::SPECIALIZES_KW)]
#[case("_internal", SyntaxKind::IDENT)]
fn test_classification(#[case] word: &str, #[case] expected: SyntaxKind) {
    assert_eq!(classify_word(word), expected, "word: {word}");
    assert_eq!(kinds(word), vec![expected], "tokenized: {word}");
}

// ============================================================================
// Punctuation and Relation Symbols
// ============================================================================

#[rstest]
#[case("--", SyntaxKind::DASH_DASH)]
#[case("<>--", SyntaxKind::CONTAINS)]
#[case("--<>", SyntaxKind::CONTAINED_BY)]
#[case("..", SyntaxKind::DOT_DOT)]
#[case("<=", SyntaxKind::LT_EQ)]
#[case(">=", SyntaxKind::GT_EQ)]
#[case("@", SyntaxKind::AT)]
#[case("*", SyntaxKind::STAR)]
fn test_symbols(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(kinds(input), vec![expected]);
}

#[test]
fn test_cardinality_tokens() {
    assert_eq!(
        kinds("[2..*]"),
        vec![
            SyntaxKind::L_BRACKET,
            SyntaxKind::INTEGER,
            SyntaxKind::DOT_DOT,
            SyntaxKind::STAR,
            SyntaxKind::R_BRACKET,
        ]
    );
}

// ============================================================================
// Values and Lines
// ============================================================================

#[test]
fn test_values() {
    let tokenized = tokenize("42 \"hello\" 'single' false");
    let values: Vec<_> = tokenized.tokens.iter().map(|t| t.value).collect();
    assert_eq!(
        values,
        vec![
            TokenValue::Integer(42),
            TokenValue::Text("hello"),
            TokenValue::Text("single"),
            TokenValue::Boolean(false),
        ]
    );
}

#[test]
fn test_block_comment_advances_lines() {
    let tokenized = tokenize("package A\n/* one\ntwo\nthree */\nkind Person // trailing\nrole R");
    let lines: Vec<_> = tokenized
        .tokens
        .iter()
        .map(|t| (t.text, t.line))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("package", 1),
            ("A", 1),
            ("kind", 5),
            ("Person", 5),
            ("role", 6),
            ("R", 6),
        ]
    );
}

#[test]
fn test_tokenize_twice_is_identical() {
    let text = "package Shop\nkind Product { price: number [1] }\n@mediation relation Sale [1] -- [1..*] Product";
    assert_eq!(tokenize(text), tokenize(text));
}

// ============================================================================
// Lexical Errors
// ============================================================================

#[rstest]
#[case("kind Person # role Student", ErrorCode::E0101, 4)]
#[case("kind Person \"unterminated", ErrorCode::E0102, 3)]
#[case("kind Person /* never closed", ErrorCode::E0103, 2)]
#[case("kind Person [99999999999999999999999]", ErrorCode::E0104, 4)]
fn test_lexical_errors_do_not_abort(
    #[case] input: &str,
    #[case] code: ErrorCode,
    #[case] min_tokens: usize,
) {
    let tokenized = tokenize(input);
    assert_eq!(tokenized.errors.len(), 1, "input: {input}");
    assert_eq!(tokenized.errors[0].code, code);
    assert_eq!(tokenized.errors[0].line, 1);
    assert!(
        tokenized.tokens.len() >= min_tokens,
        "lexing stopped early: {:?}",
        tokenized.tokens
    );
}

#[test]
fn test_bad_character_line_is_reported() {
    let tokenized = tokenize("package A\n\nkind $Person");
    assert_eq!(tokenized.errors.len(), 1);
    assert_eq!(tokenized.errors[0].line, 3);
    assert_eq!(
        kinds("kind $Person"),
        vec![SyntaxKind::CLASS_STEREOTYPE, SyntaxKind::CLASS_NAME]
    );
}
