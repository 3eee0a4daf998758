//! # tonto-base
//!
//! Lexer, error-recovering parser and ontology pattern validator for the
//! TONTO modeling language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! report    → Plain-text rendering for the CLI
//!   ↓
//! project   → File loading, import resolution and merging
//!   ↓
//! hir       → Model index, the six pattern checks, reference check
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan syntax tree
//!   ↓
//! model     → Classes, relations, gensets, datatypes, enums
//! ```

// ============================================================================
// MODULES (dependency order: model → parser → hir → project → report)
// ============================================================================

/// Ontology model: the records the parser produces
pub mod model;

/// Parser: Logos lexer, recursive-descent parser, error recovery
pub mod parser;

/// Pattern validation over the model
pub mod hir;

/// File loading and import merging
pub mod project;

/// Report rendering
pub mod report;

// Re-export the pipeline entry points
pub use hir::{Finding, check_references, validate};
pub use model::OntologyModel;
pub use parser::{Parse, keywords, parse, tokenize};
