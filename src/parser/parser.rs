//! Recursive descent parser for TONTO
//!
//! Builds a rowan GreenNode tree of the significant tokens and, in the same
//! pass, the ontology model. Errors are recorded and parsing continues.

use rowan::{GreenNode, GreenNodeBuilder};

use super::ast::AstNode;
use super::build_context::BuildContext;
use super::errors::{ErrorCode, ParseContext, SyntaxError, format_context_error, suggestion_for};
use super::grammar;
use super::lexer::{Token, Tokenized, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::model::OntologyModel;

/// Parse result containing the green tree, the model and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub model: OntologyModel,
    /// Lexical and syntax errors, ordered by line
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Typed root of the syntax tree
    pub fn source_file(&self) -> Option<super::SourceFile> {
        super::SourceFile::cast(self.syntax())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.iter().all(|error| !error.severity.is_error())
    }
}

/// Parse TONTO source into a syntax tree and an ontology model
pub fn parse(input: &str) -> Parse {
    let Tokenized {
        tokens,
        errors: lex_errors,
        ..
    } = tokenize(input);

    let mut parser = Parser::new(tokens);
    grammar::source_file(&mut parser);
    let (green, model, syntax_errors) = parser.finish();

    let mut errors = lex_errors;
    errors.extend(syntax_errors);
    errors.sort_by_key(|error| error.line);

    tracing::debug!(
        classes = model.classes.len(),
        relations = model.relations.len(),
        gensets = model.gensets.len(),
        errors = errors.len(),
        "parsed"
    );

    Parse {
        green,
        model,
        errors,
    }
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    pub(crate) ctx: BuildContext,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            ctx: BuildContext::new(),
        }
    }

    fn finish(self) -> (GreenNode, OntologyModel, Vec<SyntaxError>) {
        let (model, errors) = self.ctx.finish();
        (self.builder.finish(), model, errors)
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub(crate) fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(crate) fn current_text(&self) -> &'a str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    /// Line of the current token, or of the last token at end of input
    pub(crate) fn current_line(&self) -> u32 {
        self.current()
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub(crate) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub(crate) fn bump(&mut self) -> Option<Token<'a>> {
        let token = *self.current()?;
        self.builder.token(token.kind.into(), token.text);
        self.pos += 1;
        Some(token)
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or record an error and skip to the
    /// recovery set of `context`
    pub(crate) fn expect(
        &mut self,
        kind: SyntaxKind,
        expected: &str,
        context: ParseContext,
        code: ErrorCode,
    ) -> Option<Token<'a>> {
        if self.at(kind) {
            return self.bump();
        }
        self.expected(expected, context, code);
        None
    }

    /// Like [`Parser::expect`], for any kind matching `accepts`
    pub(crate) fn expect_where(
        &mut self,
        accepts: impl Fn(SyntaxKind) -> bool,
        expected: &str,
        context: ParseContext,
        code: ErrorCode,
    ) -> Option<Token<'a>> {
        if accepts(self.current_kind()) {
            return self.bump();
        }
        self.expected(expected, context, code);
        None
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    /// Record an error at the current token
    pub(crate) fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let error = SyntaxError::builder(code)
            .message(message)
            .line(self.current_line())
            .suggestion(suggestion_for(self.current_kind()))
            .build();
        self.ctx.error(error);
    }

    pub(crate) fn push_error(&mut self, error: SyntaxError) {
        self.ctx.error(error);
    }

    /// Record an "unexpected token" error for the current token
    pub(crate) fn unexpected(&mut self, context: ParseContext, code: ErrorCode) {
        let error = format_context_error(
            self.current_kind(),
            self.current_text(),
            self.current_line(),
            context,
            code,
        );
        self.ctx.error(error);
    }

    /// Record "expected X, found Y" and skip to the recovery set of `context`
    pub(crate) fn expected(&mut self, expected: &str, context: ParseContext, code: ErrorCode) {
        let found = self.found_description();
        self.error(
            code,
            format!("expected {} {}, found {}", expected, context.description(), found),
        );
        self.synchronize(context);
    }

    fn found_description(&self) -> String {
        match self.current() {
            Some(token) => format!("{} '{}'", token.kind.describe(), token.text),
            None => SyntaxKind::EOF.describe().to_string(),
        }
    }

    /// Skip tokens until one in the recovery set of `context`. Consumes
    /// nothing if already there.
    pub(crate) fn synchronize(&mut self, context: ParseContext) {
        let recovery = context.recovery_tokens();
        if self.at_eof() || self.at_any(recovery) {
            return;
        }
        self.start_node(SyntaxKind::ERROR);
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
        }
        self.finish_node();
    }

    /// Skip at least one token, then continue to the recovery set of `context`
    pub(crate) fn recover(&mut self, context: ParseContext) {
        if self.at_eof() {
            return;
        }
        let recovery = context.recovery_tokens();
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Run `f` inside a node of `kind`; the node is closed even when `f`
    /// bails out early
    pub(crate) fn node<R>(&mut self, kind: SyntaxKind, f: impl FnOnce(&mut Self) -> R) -> R {
        self.start_node(kind);
        let result = f(self);
        self.finish_node();
        result
    }
}
