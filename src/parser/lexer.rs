//! Logos-based lexer for TONTO
//!
//! Logos recognizes the token shapes. Every identifier-shaped lexeme is then
//! classified by [`classify_word`], so keywords, stereotypes and the name
//! categories share a single regex.

use indexmap::IndexMap;
use logos::Logos;

use super::errors::{ErrorCode, SyntaxError};
use super::keywords::classify_word;
use super::syntax_kind::SyntaxKind;

/// Decoded value of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue<'a> {
    /// The lexeme itself; string literals without their quotes
    Text(&'a str),
    Integer(u64),
    Boolean(bool),
}

impl TokenValue<'_> {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            TokenValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// A token with its kind, source text and starting line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    /// 1-based line on which the token starts
    pub line: u32,
    pub value: TokenValue<'a>,
}

/// Result of [`tokenize`]: the significant tokens, a per-kind histogram in
/// first-seen order, and the lexical errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized<'a> {
    pub tokens: Vec<Token<'a>>,
    pub counts: IndexMap<SyntaxKind, usize>,
    pub errors: Vec<SyntaxError>,
}

/// Lexer wrapping the logos-generated tokenizer.
///
/// Yields trivia as well as significant tokens. An unrecognized character
/// yields one error and lexing restarts right after it.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    /// Byte offset of `inner`'s input within `source`
    base: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            inner: LogosToken::lexer(input),
            base: 0,
            line: 1,
        }
    }

    fn restart_after(&mut self, start: usize) -> SyntaxError {
        let rest = &self.source[start..];
        let mut chars = rest.chars();
        let first = chars.next().unwrap_or('\0');
        let second = chars.next();

        let error = match first {
            '"' | '\'' => SyntaxError::new(
                format!("unterminated string literal starting with {first}"),
                self.line,
                ErrorCode::E0102,
            ),
            '/' if second == Some('*') => {
                SyntaxError::new("unterminated block comment", self.line, ErrorCode::E0103)
            }
            _ => SyntaxError::new(
                format!("unrecognized character '{}'", first.escape_debug()),
                self.line,
                ErrorCode::E0101,
            ),
        };

        self.base = start + first.len_utf8();
        self.inner = LogosToken::lexer(&self.source[self.base..]);
        error
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let start = self.base + span.start;

        let logos_token = match logos_token {
            Ok(token) => token,
            Err(()) => return Some(Err(self.restart_after(start))),
        };

        let text = &self.source[start..self.base + span.end];
        let line = self.line;
        self.line += text.matches('\n').count() as u32;

        let kind = logos_token.kind(text);
        let value = match kind {
            SyntaxKind::STRING => TokenValue::Text(&text[1..text.len() - 1]),
            SyntaxKind::BOOLEAN => TokenValue::Boolean(text == "true"),
            SyntaxKind::INTEGER => match text.parse::<u64>() {
                Ok(n) => TokenValue::Integer(n),
                Err(_) => {
                    return Some(Err(SyntaxError::new(
                        format!("integer literal {text} does not fit in 64 bits"),
                        line,
                        ErrorCode::E0104,
                    )));
                }
            },
            _ => TokenValue::Text(text),
        };

        Some(Ok(Token {
            kind,
            text,
            line,
            value,
        }))
    }
}

/// Tokenize an entire source text, dropping trivia
pub fn tokenize(input: &str) -> Tokenized<'_> {
    let mut result = Tokenized::default();

    for item in Lexer::new(input) {
        match item {
            Ok(token) if token.kind.is_trivia() => {}
            Ok(token) => {
                *result.counts.entry(token.kind).or_insert(0) += 1;
                result.tokens.push(token);
            }
            Err(error) => {
                tracing::warn!(line = error.line, code = %error.code, "{}", error.message);
                result.errors.push(error);
            }
        }
    }

    tracing::trace!(
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "tokenized"
    );
    result
}

/// Logos token enum - identifiers are classified afterwards
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // RELATION SYMBOLS
    // =========================================================================
    #[token("<>--")]
    Contains,

    #[token("--<>")]
    ContainedBy,

    #[token("--")]
    DashDash,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("..")]
    DotDot,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(".")]
    Dot,

    #[token("@")]
    At,

    #[token("*")]
    Star,

    #[token("-")]
    Minus,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,
}

impl LogosToken {
    fn kind(self, text: &str) -> SyntaxKind {
        match self {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::Integer => SyntaxKind::INTEGER,
            LogosToken::Ident => classify_word(text),
            LogosToken::Contains => SyntaxKind::CONTAINS,
            LogosToken::ContainedBy => SyntaxKind::CONTAINED_BY,
            LogosToken::DashDash => SyntaxKind::DASH_DASH,
            LogosToken::DotDot => SyntaxKind::DOT_DOT,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
        }
    }
}
