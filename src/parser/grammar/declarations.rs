//! Package, import, class, datatype and enum declarations

use crate::model::{ClassDecl, ClassStereotype, Datatype, EnumType, Import};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

use super::body;

/// import := 'import' Name
pub(super) fn import(p: &mut Parser<'_>) {
    p.node(SyntaxKind::IMPORT, |p| {
        let line = p.current_line();
        p.bump();
        let name = p.expect_where(
            SyntaxKind::is_name,
            "a module name",
            ParseContext::Import,
            ErrorCode::E0301,
        )?;
        p.ctx.add_import(Import {
            name: name.text.into(),
            line,
        });
        Some(())
    });
}

/// package := 'package' Name
///
/// A repeated package declaration is consumed but the first name is kept.
pub(super) fn package(p: &mut Parser<'_>) {
    p.node(SyntaxKind::PACKAGE, |p| {
        p.bump();
        let name = p.expect_where(
            SyntaxKind::is_name,
            "a package name",
            ParseContext::Package,
            ErrorCode::E0301,
        )?;
        if !p.ctx.has_package() {
            p.ctx.set_package(name.text);
        }
        Some(())
    });
}

/// classDecl := ClassStereotype ClassName ('specializes' ClassName)? body?
pub(super) fn class(p: &mut Parser<'_>) {
    p.node(SyntaxKind::CLASS_DEF, |p| {
        let marker = p.bump()?;
        let stereotype = ClassStereotype::from_keyword(marker.text)?;
        let name = p.expect(
            SyntaxKind::CLASS_NAME,
            "a class name",
            ParseContext::ClassDeclaration,
            ErrorCode::E0301,
        )?;
        let mut class = ClassDecl::new(name.text, stereotype, marker.line);

        if p.at(SyntaxKind::SPECIALIZES_KW) {
            let parent = p.node(SyntaxKind::SPECIALIZATION, |p| {
                p.bump();
                p.expect(
                    SyntaxKind::CLASS_NAME,
                    "a parent class name",
                    ParseContext::ClassDeclaration,
                    ErrorCode::E0301,
                )
            });
            match parent {
                Some(parent) => class.specializes = Some(parent.text.into()),
                None => {
                    p.ctx.add_class(class);
                    return None;
                }
            }
        }

        if p.at(SyntaxKind::L_BRACE) {
            body::class_body(p, &mut class);
        }

        p.ctx.add_class(class);
        Some(())
    });
}

/// datatypeDecl := 'datatype' Name ('{' attribute* '}')?
pub(super) fn datatype(p: &mut Parser<'_>) {
    p.node(SyntaxKind::DATATYPE_DEF, |p| {
        let line = p.current_line();
        p.bump();
        let name = p.expect_where(
            |kind| matches!(kind, SyntaxKind::DATATYPE_NAME | SyntaxKind::CLASS_NAME),
            "a datatype name",
            ParseContext::ClassDeclaration,
            ErrorCode::E0301,
        )?;
        let mut datatype = Datatype {
            name: name.text.into(),
            attributes: Vec::new(),
            line,
        };

        if p.at(SyntaxKind::L_BRACE) {
            body::datatype_body(p, &mut datatype);
        }

        p.ctx.add_datatype(datatype);
        Some(())
    });
}

/// enumDecl := 'enum' ClassName '{' (Name (',' Name)*)? '}'
pub(super) fn enumeration(p: &mut Parser<'_>) {
    p.node(SyntaxKind::ENUM_DEF, |p| {
        let line = p.current_line();
        p.bump();
        let name = p.expect(
            SyntaxKind::CLASS_NAME,
            "an enum name",
            ParseContext::ClassDeclaration,
            ErrorCode::E0301,
        )?;
        let mut enumeration = EnumType {
            name: name.text.into(),
            instances: Vec::new(),
            line,
        };

        let open_line = p.current_line();
        p.expect(
            SyntaxKind::L_BRACE,
            "'{'",
            ParseContext::ClassDeclaration,
            ErrorCode::E0902,
        )?;

        loop {
            match p.current_kind() {
                SyntaxKind::R_BRACE => {
                    p.bump();
                    break;
                }
                SyntaxKind::COMMA => {
                    p.bump();
                }
                kind if kind.is_name() => {
                    if let Some(instance) = p.bump() {
                        enumeration.instances.push(instance.text.into());
                    }
                }
                kind if kind == SyntaxKind::EOF || kind.is_declaration_start() => {
                    body::unclosed(p, "enum", &enumeration.name, open_line);
                    break;
                }
                _ => {
                    p.unexpected(ParseContext::EnumBody, ErrorCode::E0304);
                    p.recover(ParseContext::EnumBody);
                }
            }
        }

        p.ctx.add_enum(enumeration);
        Some(())
    });
}
