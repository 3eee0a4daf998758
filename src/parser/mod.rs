//! Rowan-based parser for TONTO
//!
//! This module provides the language front end using:
//! - **logos** for lexing, with contextual identifier classification
//! - **rowan** for the syntax tree
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind, line and value
//!     ↓
//! Parser → GreenNode tree + OntologyModel + SyntaxErrors
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! HIR → Pattern findings
//! ```
//!
//! The parser never stops at the first error: each problem is recorded and
//! parsing resynchronizes at the next declaration start.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod build_context;
pub mod errors;
mod grammar;
pub mod keywords;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use build_context::BuildContext;
pub use errors::{ErrorCode, ParseContext, Severity, SyntaxError};
pub use lexer::{Lexer, Token, TokenValue, Tokenized, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TontoLanguage};

/// Re-export rowan types for convenience
pub use rowan::GreenNode;
