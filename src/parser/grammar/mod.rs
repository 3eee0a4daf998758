//! TONTO grammar rules
//!
//! Free functions over [`Parser`], one module per construct:
//! - `declarations` - package, import, class, datatype, enum
//! - `body` - class body items (attributes, metadata, internal relations)
//! - `relations` - external relations, cardinalities, relation symbols
//! - `genset` - generalization sets in both surface forms
//!
//! Rules that can fail return `Option`; a `None` means the error was
//! recorded and the parser was resynchronized.

mod body;
mod declarations;
mod genset;
mod relations;

use super::errors::{ErrorCode, ParseContext};
use super::parser::Parser;
use super::syntax_kind::SyntaxKind;

/// program := importDecl* packageDecl content*
pub(crate) fn source_file(p: &mut Parser<'_>) {
    p.node(SyntaxKind::SOURCE_FILE, |p| {
        while p.at(SyntaxKind::IMPORT_KW) {
            declarations::import(p);
        }

        if p.at(SyntaxKind::PACKAGE_KW) {
            declarations::package(p);
        } else {
            p.error(ErrorCode::E0502, "missing package declaration");
        }

        while !p.at_eof() {
            let before = p.position();
            content(p);
            if p.position() == before {
                p.recover(ParseContext::TopLevel);
            }
        }
    });
}

/// content := classDecl | datatypeDecl | enumDecl | gensetDecl | relationDecl | recoveryUnit
fn content(p: &mut Parser<'_>) {
    match p.current_kind() {
        SyntaxKind::CLASS_STEREOTYPE => declarations::class(p),
        SyntaxKind::DATATYPE_KW => declarations::datatype(p),
        SyntaxKind::ENUM_KW => declarations::enumeration(p),
        SyntaxKind::GENSET_KW | SyntaxKind::DISJOINT_KW | SyntaxKind::COMPLETE_KW => {
            genset::genset(p)
        }
        SyntaxKind::RELATION_KW | SyntaxKind::RELATION_STEREOTYPE | SyntaxKind::AT => {
            relations::external_relation(p)
        }
        SyntaxKind::IMPORT_KW => {
            p.error(
                ErrorCode::E0501,
                "import must appear before the package declaration",
            );
            declarations::import(p);
        }
        SyntaxKind::PACKAGE_KW => {
            p.error(ErrorCode::E0503, "only one package declaration is allowed");
            declarations::package(p);
        }
        kind => {
            let code = match kind {
                SyntaxKind::CLASS_NAME => ErrorCode::E0302,
                SyntaxKind::R_BRACE | SyntaxKind::R_BRACKET | SyntaxKind::R_PAREN => {
                    ErrorCode::E0205
                }
                _ => ErrorCode::E0901,
            };
            p.unexpected(ParseContext::TopLevel, code);
            p.recover(ParseContext::TopLevel);
        }
    }
}
